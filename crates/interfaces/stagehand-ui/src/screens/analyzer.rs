use crate::components::{result_panel, status};
use crate::dialogs::{pick_video, DialogArtifactSink};
use crate::theme::*;
use crate::utils::{cmd_button, error_label, section_label, ButtonKind};
use eframe::egui;
use tracing::warn;

use stagehand_app_core::{analysis_screen_vm, StudioApplication};
use stagehand_config::MAX_CLIP_SECONDS;
use stagehand_core::ClipWindow;

/// Clip bounds as edited on screen. A disabled bound leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipForm {
    pub use_start: bool,
    pub start: f64,
    pub use_end: bool,
    pub end: f64,
}

impl ClipForm {
    fn window(&self) -> ClipWindow {
        ClipWindow {
            start: self.use_start.then_some(self.start),
            end: self.use_end.then_some(self.end),
        }
    }
}

fn bound(ui: &mut egui::Ui, label: &str, enabled: &mut bool, value: &mut f64) {
    ui.checkbox(enabled, label);
    ui.add_enabled(
        *enabled,
        egui::DragValue::new(value)
            .range(0.0..=MAX_CLIP_SECONDS)
            .speed(0.1)
            .suffix(" s"),
    );
}

pub fn draw(
    ui: &mut egui::Ui,
    app: &mut StudioApplication,
    clip: &mut ClipForm,
    file_error: &mut Option<String>,
) {
    egui::ScrollArea::vertical()
        .id_salt("analyzer")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            section_label(ui, "PERFORMANCE VIDEO");
            ui.horizontal(|ui| {
                if cmd_button(ui, "Choose video", ButtonKind::Outline, true).clicked() {
                    match pick_video() {
                        Some(Ok(blob)) => {
                            *file_error = None;
                            app.analysis_input.set_file(blob);
                        }
                        Some(Err(e)) => {
                            warn!("Could not read video: {e}");
                            *file_error = Some(e.to_string());
                        }
                        None => {}
                    }
                }
                if app.analysis_input.file().is_some() && ui.small_button("Remove").clicked() {
                    app.analysis_input.clear_file();
                }
            });
            if let Some(err) = file_error.as_deref() {
                error_label(ui, err);
            }

            ui.add_space(8.0);
            section_label(ui, "INTENDED EMOTION");
            ui.add(
                egui::TextEdit::singleline(app.analysis_input.hint_mut())
                    .hint_text("e.g. joy, grief, quiet anger")
                    .desired_width(280.0),
            );

            ui.add_space(8.0);
            section_label(ui, "CLIP (OPTIONAL)");
            ui.horizontal(|ui| {
                bound(ui, "Start", &mut clip.use_start, &mut clip.start);
                ui.add_space(12.0);
                bound(ui, "End", &mut clip.use_end, &mut clip.end);
            });
            let window = clip.window();
            if window != app.analysis_input.auxiliary().clip {
                app.analysis_input.set_clip(window);
            }

            // Built after the inputs above so this frame reflects the edits.
            let vm = analysis_screen_vm(app);
            if let Some(file) = &vm.file {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.colored_label(COL_SUCCESS, &file.name);
                    ui.colored_label(COL_TEXT_DIM, format!("{} | {}", file.size, file.content_type));
                });
            }
            if let Some(err) = &vm.clip_error {
                error_label(ui, err);
            }

            ui.add_space(10.0);
            let label = if vm.submission.pending {
                "Analyzing..."
            } else {
                "Analyze performance"
            };
            if cmd_button(ui, label, ButtonKind::Primary, !vm.submission.pending).clicked() {
                app.submit_analysis();
            }
            status::draw(ui, &vm.submission, "Analyzing your performance...");

            if let Some(result) = &vm.result {
                ui.add_space(10.0);
                if result_panel::analysis(ui, result, !vm.submission.pending) {
                    if let Err(e) = app.export_analysis(&DialogArtifactSink) {
                        warn!("Export failed: {e:#}");
                    }
                }
            }
        });
}
