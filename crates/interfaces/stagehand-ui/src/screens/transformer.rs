use crate::components::{result_panel, status};
use crate::dialogs::{pick_document, DialogArtifactSink};
use crate::theme::*;
use crate::utils::{cmd_button, error_label, section_label, ButtonKind};
use eframe::egui;
use tracing::warn;

use stagehand_app_core::{transform_screen_vm, StudioApplication};
use stagehand_core::Genre;

pub fn draw(ui: &mut egui::Ui, app: &mut StudioApplication, file_error: &mut Option<String>) {
    let vm = transform_screen_vm(app);

    egui::ScrollArea::vertical()
        .id_salt("transformer")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            section_label(ui, "TARGET GENRE");
            let mut genre = app.transform_input.auxiliary().genre;
            egui::ComboBox::from_id_salt("genre")
                .selected_text(genre.as_str())
                .show_ui(ui, |ui| {
                    for g in Genre::ALL {
                        ui.selectable_value(&mut genre, g, g.as_str());
                    }
                });
            if genre != app.transform_input.auxiliary().genre {
                app.transform_input.set_genre(genre);
            }

            ui.add_space(8.0);
            section_label(ui, "SCRIPT");
            ui.add(
                egui::TextEdit::multiline(app.transform_input.text_mut())
                    .hint_text("Paste your script here")
                    .desired_rows(12)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace),
            );

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if cmd_button(ui, "Upload PDF", ButtonKind::Outline, true).clicked() {
                    match pick_document() {
                        Some(Ok(blob)) => {
                            *file_error = None;
                            app.transform_input.set_file(blob);
                        }
                        Some(Err(e)) => {
                            warn!("Could not read document: {e}");
                            *file_error = Some(e.to_string());
                        }
                        None => {}
                    }
                }
                if let Some(file) = &vm.file {
                    ui.colored_label(COL_SUCCESS, format!("{} ({})", file.name, file.size));
                    if ui.small_button("Remove").clicked() {
                        app.transform_input.clear_file();
                    }
                }
            });
            if vm.file.is_some() && !app.transform_input.text().trim().is_empty() {
                ui.colored_label(COL_TEXT_DIM, "The uploaded PDF is used instead of the pasted text.");
            }
            if let Some(err) = file_error.as_deref() {
                error_label(ui, err);
            }

            ui.add_space(10.0);
            let label = if vm.submission.pending {
                "Transforming..."
            } else {
                "Transform script"
            };
            if cmd_button(ui, label, ButtonKind::Primary, !vm.submission.pending).clicked() {
                app.submit_transform();
            }
            status::draw(ui, &vm.submission, "Rewriting your script. This can take a minute.");

            if let Some(result) = &vm.result {
                ui.add_space(10.0);
                if result_panel::transform(ui, result, !vm.submission.pending) {
                    if let Err(e) = app.export_transform(&DialogArtifactSink) {
                        warn!("Export failed: {e:#}");
                    }
                }
            }
        });
}
