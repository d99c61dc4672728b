//! Turns successful results into downloadable artifacts. Everything here is a
//! pure function of its inputs: the same result always yields the same bytes.

mod docx;
mod report;

use thiserror::Error;

use crate::input::Genre;
use crate::result::{AnalysisResult, TransformResult};

pub use docx::{document_text, write_document};
pub use report::{render_report, ReportMeta};

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write document container: {0}")]
    Container(#[from] zip::result::ZipError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Bytes plus the file name the save dialog should suggest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn export_document(result: &TransformResult, genre: Genre) -> Result<Artifact, ExportError> {
    let paragraphs: Vec<&str> = result
        .script_text()
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();

    Ok(Artifact {
        file_name: stagehand_config::document_file_name(genre.as_str()),
        content_type: DOCX_CONTENT_TYPE,
        bytes: write_document(&paragraphs)?,
    })
}

pub fn export_report(result: &AnalysisResult, meta: &ReportMeta) -> Artifact {
    Artifact {
        file_name: stagehand_config::REPORT_FILE_NAME.to_string(),
        content_type: REPORT_CONTENT_TYPE,
        bytes: render_report(result, meta).into_bytes(),
    }
}
