//! Writes exported artifacts to disk without ever leaving a half-written file
//! at the target path.

use std::io::Write;
use std::path::{Path, PathBuf};

use stagehand_core::Artifact;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("{0} has no parent directory")]
    NoParent(PathBuf),
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Saves `artifact` under its suggested file name inside `dir`.
pub fn write_artifact(dir: &Path, artifact: &Artifact) -> Result<PathBuf, SaveError> {
    let target = dir.join(&artifact.file_name);
    write_artifact_to(&target, artifact)?;
    Ok(target)
}

/// Saves `artifact` at exactly `target`, replacing any existing file.
pub fn write_artifact_to(target: &Path, artifact: &Artifact) -> Result<(), SaveError> {
    let parent = match target.parent() {
        Some(p) if p.as_os_str().is_empty() => Path::new("."),
        Some(p) => p,
        None => return Err(SaveError::NoParent(target.to_path_buf())),
    };
    let io_err = |source| SaveError::Io {
        path: target.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(io_err)?;
    tmp.write_all(&artifact.bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(target).map_err(|e| io_err(e.error))?;

    info!(path = %target.display(), bytes = artifact.bytes.len(), "Artifact saved");
    Ok(())
}
