use stagehand_core::result::format_confidence;
use stagehand_core::{AnalysisResult, BinaryBlob, TransformResult};

use crate::app::StudioApplication;
use crate::app_core::SubmissionState;
use crate::domain::{ExportNotice, Route};
use crate::ports::{IdentityPort, InferenceGateway};

fn format_size(bytes: u64) -> String {
    const KB: f64 = 1_000.0;
    const MB: f64 = 1_000_000.0;
    const GB: f64 = 1_000_000_000.0;

    let b = bytes as f64;
    if b >= GB {
        format!("{:.1} GB", b / GB)
    } else if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

fn format_seconds(secs: f64) -> String {
    format!("{secs:.1} s")
}

#[derive(Debug, Clone)]
pub struct FileInfoVm {
    pub name: String,
    pub size: String,
    pub content_type: String,
}

pub fn file_info_vm(blob: &BinaryBlob) -> FileInfoVm {
    FileInfoVm {
        name: blob.name.clone(),
        size: format_size(blob.len() as u64),
        content_type: blob.content_type.clone(),
    }
}

#[derive(Debug, Clone)]
pub struct SubmissionVm {
    pub pending: bool,
    pub error: Option<String>,
    pub export_notice: Option<String>,
}

fn submission_vm<R>(state: &SubmissionState<R>, notice: Option<&ExportNotice>) -> SubmissionVm {
    SubmissionVm {
        pending: state.is_pending(),
        error: state.error_message(),
        export_notice: notice.map(|n| match n {
            ExportNotice::Saved(path) => format!("Saved to {}", path.display()),
            ExportNotice::Failed(msg) => format!("Export failed: {msg}"),
        }),
    }
}

#[derive(Debug, Clone)]
pub struct TransformResultVm {
    pub script: String,
    pub status: Option<String>,
    pub review: Option<String>,
    pub file_path: Option<String>,
    pub extracted_preview: Option<String>,
}

impl From<&TransformResult> for TransformResultVm {
    fn from(r: &TransformResult) -> Self {
        let review = r.review.as_ref().map(|rv| {
            let verdict = match rv.ready {
                Some(true) => "approved",
                Some(false) => "not approved",
                None => "no verdict",
            };
            let mut line = match rv.iteration {
                Some(n) => format!("Review: {verdict} after {n} iteration(s)"),
                None => format!("Review: {verdict}"),
            };
            if let Some(msg) = rv.message.as_deref().filter(|m| !m.trim().is_empty()) {
                line.push_str(" - ");
                line.push_str(msg);
            }
            line
        });

        Self {
            script: r.script_text().to_string(),
            status: r.status.clone(),
            review,
            file_path: r.file_path.clone(),
            extracted_preview: r
                .extracted_text_preview
                .clone()
                .filter(|p| !p.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisResultVm {
    pub predicted: String,
    pub confidence: String,
    pub matched: bool,
    pub match_token: &'static str,
    pub recommendation: String,
    pub key_summary: Option<String>,
    pub user_emotion: Option<String>,
    pub clip_duration: Option<String>,
}

impl From<&AnalysisResult> for AnalysisResultVm {
    fn from(r: &AnalysisResult) -> Self {
        Self {
            predicted: r.predicted_label().to_string(),
            confidence: format_confidence(r.confidence),
            matched: r.matched(),
            match_token: r.match_token(),
            recommendation: r.recommendation_text().to_string(),
            key_summary: r.recommendations.key_summary().map(str::to_string),
            user_emotion: r.user_emotion.clone(),
            clip_duration: r.clip_duration_seconds.map(format_seconds),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformScreenVm {
    pub submission: SubmissionVm,
    pub file: Option<FileInfoVm>,
    pub result: Option<TransformResultVm>,
}

pub fn transform_screen_vm<G: InferenceGateway, I: IdentityPort>(
    app: &StudioApplication<G, I>,
) -> TransformScreenVm {
    let state = app.transform_state();
    TransformScreenVm {
        submission: submission_vm(&state, app.state.export_notice.as_ref()),
        file: app.transform_input.file().map(file_info_vm),
        result: state.result().map(TransformResultVm::from),
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisScreenVm {
    pub submission: SubmissionVm,
    pub file: Option<FileInfoVm>,
    pub clip_error: Option<String>,
    pub result: Option<AnalysisResultVm>,
}

pub fn analysis_screen_vm<G: InferenceGateway, I: IdentityPort>(
    app: &StudioApplication<G, I>,
) -> AnalysisScreenVm {
    let state = app.analysis_state();
    AnalysisScreenVm {
        submission: submission_vm(&state, app.state.export_notice.as_ref()),
        file: app.analysis_input.file().map(file_info_vm),
        clip_error: app
            .analysis_input
            .auxiliary()
            .clip
            .validate()
            .err()
            .map(|e| e.to_string()),
        result: state.result().map(AnalysisResultVm::from),
    }
}

#[derive(Debug, Clone)]
pub struct HomeVm {
    pub greeting: String,
    pub entries: Vec<(Route, &'static str)>,
}

pub fn home_vm<G: InferenceGateway, I: IdentityPort>(app: &StudioApplication<G, I>) -> HomeVm {
    let name = app
        .session()
        .map(|s| s.user.display_name().to_string())
        .unwrap_or_default();
    HomeVm {
        greeting: format!("Welcome, {name}"),
        entries: vec![
            (
                Route::ScriptTransformer,
                "Rewrite a screenplay in another genre from pasted text or a PDF.",
            ),
            (
                Route::VideoAnalyzer,
                "Check whether a performance video conveys the emotion you intended.",
            ),
        ],
    }
}
