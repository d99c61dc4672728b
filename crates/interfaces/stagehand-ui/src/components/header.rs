use crate::theme::*;
use crate::utils::{cmd_button, ButtonKind};
use eframe::egui;

use stagehand_app_core::Route;

#[derive(Default)]
pub struct HeaderResponse {
    pub navigate: Option<Route>,
    pub logout_clicked: bool,
}

pub fn draw(ui: &mut egui::Ui, route: Route, user: Option<&str>, is_busy: bool) -> HeaderResponse {
    let mut resp = HeaderResponse::default();

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("STAGEHAND")
                .size(15.0)
                .extra_letter_spacing(2.0)
                .strong()
                .color(COL_TEXT),
        );
        ui.label(egui::RichText::new(route.title()).color(COL_TEXT_DIM));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(name) = user {
                if cmd_button(ui, "Log out", ButtonKind::Danger, true).clicked() {
                    resp.logout_clicked = true;
                }
                ui.label(egui::RichText::new(name).color(COL_TEXT_DIM));
                if route != Route::Home && ui.link("Home").clicked() {
                    resp.navigate = Some(Route::Home);
                }
            }
            if is_busy {
                ui.add(egui::Spinner::new());
            }
        });
    });

    resp
}
