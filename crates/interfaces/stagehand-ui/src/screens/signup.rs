use crate::theme::*;
use crate::utils::{cmd_button, error_label, section_label, ButtonKind};
use eframe::egui;

use stagehand_app_core::{Route, StudioApplication};
use stagehand_core::SignupRequest;

pub fn draw(ui: &mut egui::Ui, app: &mut StudioApplication, form: &mut SignupRequest) {
    let pending = app.auth_state().is_pending();
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.set_max_width(360.0);
        ui.add_space(48.0);
        section_label(ui, "CREATE ACCOUNT");
        ui.add_space(8.0);

        ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(&mut form.name).hint_text("Name"),
        );
        ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(&mut form.email).hint_text("Email"),
        );
        ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(&mut form.password)
                .password(true)
                .hint_text("Password"),
        );

        ui.add_space(8.0);
        let label = if pending { "Creating account..." } else { "Sign up" };
        submit = cmd_button(ui, label, ButtonKind::Primary, !pending).clicked();

        if let Some(err) = app.auth_state().error() {
            error_label(ui, err);
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.colored_label(COL_TEXT_DIM, "Already registered?");
            if ui.link("Log in").clicked() {
                app.navigate(Route::Login);
            }
        });
    });

    if submit && !pending {
        app.signup(form.clone());
    }
}
