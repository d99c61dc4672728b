use crate::theme::*;
use crate::utils::{cmd_button, section_label, ButtonKind};
use eframe::egui;

use stagehand_app_core::{AnalysisResultVm, TransformResultVm};

fn key_value(ui: &mut egui::Ui, key: &str, value: &str, color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(format!("{key}:")).color(COL_TEXT_DIM));
        ui.label(egui::RichText::new(value).color(color));
    });
}

/// Returns `true` when the download button was clicked.
pub fn transform(ui: &mut egui::Ui, vm: &TransformResultVm, can_export: bool) -> bool {
    let mut export = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            section_label(ui, "TRANSFORMED SCRIPT");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                export = cmd_button(ui, "Download .docx", ButtonKind::Outline, can_export).clicked();
            });
        });

        if let Some(status) = &vm.status {
            key_value(ui, "Status", status, COL_TEXT);
        }
        if let Some(review) = &vm.review {
            ui.colored_label(COL_TEXT_DIM, review);
        }
        if let Some(path) = &vm.file_path {
            key_value(ui, "Saved by service as", path, COL_TEXT_DIM);
        }
        if let Some(preview) = &vm.extracted_preview {
            egui::CollapsingHeader::new("Extracted text preview")
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(egui::RichText::new(preview).monospace().color(COL_TEXT_DIM));
                });
        }

        ui.separator();
        egui::ScrollArea::vertical()
            .id_salt("script_output")
            .max_height(360.0)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(&vm.script).monospace().color(COL_TEXT));
            });
    });
    export
}

/// Returns `true` when the download button was clicked.
pub fn analysis(ui: &mut egui::Ui, vm: &AnalysisResultVm, can_export: bool) -> bool {
    let mut export = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            section_label(ui, "ANALYSIS");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                export = cmd_button(ui, "Download report", ButtonKind::Outline, can_export).clicked();
            });
        });

        if let Some(intended) = &vm.user_emotion {
            key_value(ui, "Intended emotion", intended, COL_TEXT);
        }
        key_value(ui, "Predicted emotion", &vm.predicted, COL_ACCENT);
        key_value(ui, "Confidence", &vm.confidence, COL_TEXT);
        key_value(
            ui,
            "Match",
            vm.match_token,
            if vm.matched { COL_SUCCESS } else { COL_WARN },
        );
        if let Some(duration) = &vm.clip_duration {
            key_value(ui, "Analyzed clip", duration, COL_TEXT_DIM);
        }

        ui.separator();
        section_label(ui, "RECOMMENDATIONS");
        if let Some(summary) = &vm.key_summary {
            ui.label(egui::RichText::new(summary).strong().color(COL_TEXT));
        }
        egui::ScrollArea::vertical()
            .id_salt("recommendations")
            .max_height(280.0)
            .show(ui, |ui| {
                ui.label(egui::RichText::new(&vm.recommendation).color(COL_TEXT));
            });
    });
    export
}
