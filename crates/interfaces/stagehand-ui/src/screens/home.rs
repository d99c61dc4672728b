use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;

use stagehand_app_core::{home_vm, StudioApplication};

pub fn draw(ui: &mut egui::Ui, app: &mut StudioApplication) {
    let vm = home_vm(app);

    ui.add_space(16.0);
    ui.label(
        egui::RichText::new(&vm.greeting)
            .size(20.0)
            .strong()
            .color(COL_TEXT),
    );
    ui.add_space(12.0);
    section_label(ui, "TOOLS");

    for (route, blurb) in &vm.entries {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(route.title()).strong().color(COL_TEXT));
                    ui.colored_label(COL_TEXT_DIM, *blurb);
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if cmd_button(ui, "Open", ButtonKind::Outline, true).clicked() {
                        app.navigate(*route);
                    }
                });
            });
        });
        ui.add_space(6.0);
    }
}
