//! Native file dialogs: picking inputs and saving exported artifacts.

use std::path::Path;

use stagehand_app_core::{ArtifactSink, SaveOutcome};
use stagehand_core::{Artifact, BinaryBlob, BlobError};

/// Asks the user where to put the artifact. Closing the dialog is not an error.
pub struct DialogArtifactSink;

impl ArtifactSink for DialogArtifactSink {
    fn save(&self, artifact: &Artifact) -> anyhow::Result<SaveOutcome> {
        let mut dialog = rfd::FileDialog::new().set_file_name(artifact.file_name.as_str());
        if let Some(ext) = Path::new(&artifact.file_name)
            .extension()
            .and_then(|e| e.to_str())
        {
            dialog = dialog.add_filter(ext.to_ascii_uppercase(), &[ext]);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(SaveOutcome::Cancelled);
        };
        stagehand_infra::save::write_artifact_to(&path, artifact)?;
        Ok(SaveOutcome::Saved(path))
    }
}

pub fn pick_document() -> Option<Result<BinaryBlob, BlobError>> {
    rfd::FileDialog::new()
        .add_filter("PDF", &["pdf"])
        .pick_file()
        .map(|p| BinaryBlob::from_path(&p))
}

pub fn pick_video() -> Option<Result<BinaryBlob, BlobError>> {
    rfd::FileDialog::new()
        .add_filter("Video", &["mp4", "mov", "webm", "mkv", "avi"])
        .pick_file()
        .map(|p| BinaryBlob::from_path(&p))
}
