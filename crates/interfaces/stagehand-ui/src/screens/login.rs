use crate::theme::*;
use crate::utils::{cmd_button, error_label, section_label, ButtonKind};
use eframe::egui;

use stagehand_app_core::{Route, StudioApplication};
use stagehand_core::Credentials;

pub fn draw(ui: &mut egui::Ui, app: &mut StudioApplication, form: &mut Credentials) {
    let pending = app.auth_state().is_pending();
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.set_max_width(360.0);
        ui.add_space(48.0);
        section_label(ui, "SIGN IN");
        ui.add_space(8.0);

        ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(&mut form.email).hint_text("Email"),
        );
        let password = ui.add_enabled(
            !pending,
            egui::TextEdit::singleline(&mut form.password)
                .password(true)
                .hint_text("Password"),
        );
        if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }

        ui.add_space(8.0);
        let label = if pending { "Signing in..." } else { "Log in" };
        submit |= cmd_button(ui, label, ButtonKind::Primary, !pending).clicked();

        if let Some(err) = app.auth_state().error() {
            error_label(ui, err);
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.colored_label(COL_TEXT_DIM, "No account yet?");
            if ui.link("Sign up").clicked() {
                app.navigate(Route::Signup);
            }
        });
    });

    if submit && !pending {
        app.login(form.clone());
    }
}
