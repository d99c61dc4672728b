use crate::theme::*;
use crate::utils::error_label;
use eframe::egui;

use stagehand_app_core::SubmissionVm;

/// Pending spinner, failure message and the last export notice.
pub fn draw(ui: &mut egui::Ui, vm: &SubmissionVm, pending_text: &str) {
    if vm.pending {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(COL_WARN, pending_text);
        });
    }
    if let Some(err) = &vm.error {
        error_label(ui, err);
    }
    if let Some(notice) = &vm.export_notice {
        ui.colored_label(COL_TEXT_DIM, notice);
    }
}
