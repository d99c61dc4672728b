use std::path::{Path, PathBuf};

use bytes::Bytes;
use thiserror::Error;

use crate::error::SubmissionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowKind {
    Transformation,
    Analysis,
}

impl WorkflowKind {
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowKind::Transformation => "transformation",
            WorkflowKind::Analysis => "analysis",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Genre {
    #[default]
    Comedy,
    Drama,
    Thriller,
    Romance,
    Action,
}

impl Genre {
    pub const ALL: [Genre; 5] = [
        Genre::Comedy,
        Genre::Drama,
        Genre::Thriller,
        Genre::Romance,
        Genre::Action,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Thriller => "Thriller",
            Genre::Romance => "Romance",
            Genre::Action => "Action",
        }
    }

    pub fn parse(label: &str) -> Option<Genre> {
        Genre::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum BlobError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} has no file name")]
    NoFileName(PathBuf),
}

/// An uploaded file held in memory. Cloning shares the underlying bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryBlob {
    pub name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl BinaryBlob {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, inferring the content type from its extension.
    pub fn from_path(path: &Path) -> Result<Self, BlobError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| BlobError::NoFileName(path.to_path_buf()))?;
        let bytes = std::fs::read(path).map_err(|source| BlobError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content_type = content_type_for(&name);
        Ok(Self::new(name, content_type, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ClipWindowError {
    #[error("Clip times must be numbers of seconds.")]
    NotFinite,
    #[error("Clip times cannot be negative.")]
    Negative,
    #[error("The clip end time must be after its start time.")]
    EndBeforeStart,
}

/// Optional slice of a video, in seconds, that the analysis should look at.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClipWindow {
    pub start: Option<f64>,
    pub end: Option<f64>,
}

impl ClipWindow {
    pub fn validate(&self) -> Result<(), ClipWindowError> {
        for v in [self.start, self.end].into_iter().flatten() {
            if !v.is_finite() {
                return Err(ClipWindowError::NotFinite);
            }
            if v < 0.0 {
                return Err(ClipWindowError::Negative);
            }
        }
        if let (Some(start), Some(end)) = (self.start, self.end) {
            if end <= start {
                return Err(ClipWindowError::EndBeforeStart);
            }
        }
        Ok(())
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Parameters that travel alongside the primary payload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Auxiliary {
    pub genre: Genre,
    pub hint: String,
    pub clip: ClipWindow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    File,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    File(BinaryBlob),
}

/// The frozen inputs of a single submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBundle {
    kind: WorkflowKind,
    payload: Payload,
    genre: Option<Genre>,
    hint: Option<String>,
    clip: ClipWindow,
}

impl InputBundle {
    pub fn transformation_text(text: impl Into<String>, genre: Genre) -> Self {
        Self {
            kind: WorkflowKind::Transformation,
            payload: Payload::Text(text.into()),
            genre: Some(genre),
            hint: None,
            clip: ClipWindow::default(),
        }
    }

    pub fn transformation_file(file: BinaryBlob, genre: Genre) -> Self {
        Self {
            kind: WorkflowKind::Transformation,
            payload: Payload::File(file),
            genre: Some(genre),
            hint: None,
            clip: ClipWindow::default(),
        }
    }

    pub fn analysis(file: BinaryBlob, intended_emotion: impl Into<String>) -> Self {
        Self {
            kind: WorkflowKind::Analysis,
            payload: Payload::File(file),
            genre: None,
            hint: Some(intended_emotion.into()),
            clip: ClipWindow::default(),
        }
    }

    pub fn with_clip(mut self, clip: ClipWindow) -> Self {
        self.clip = clip;
        self
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn mode(&self) -> InputMode {
        match self.payload {
            Payload::Text(_) => InputMode::Text,
            Payload::File(_) => InputMode::File,
        }
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn file(&self) -> Option<&BinaryBlob> {
        match &self.payload {
            Payload::File(blob) => Some(blob),
            Payload::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            Payload::File(_) => None,
        }
    }

    /// Category label; only the transformation workflow carries one.
    pub fn genre(&self) -> Option<Genre> {
        self.genre
    }

    /// Trimmed free-text hint (the declared emotion for analysis).
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref().map(str::trim)
    }

    pub fn clip(&self) -> ClipWindow {
        self.clip
    }

    pub fn validate(&self) -> Result<(), SubmissionError> {
        match self.kind {
            WorkflowKind::Transformation => match &self.payload {
                Payload::File(_) => Ok(()),
                Payload::Text(text) if !text.trim().is_empty() => Ok(()),
                Payload::Text(_) => Err(SubmissionError::validation(self.kind)),
            },
            WorkflowKind::Analysis => {
                let has_hint = self.hint().is_some_and(|h| !h.is_empty());
                if self.file().is_none() || !has_hint {
                    return Err(SubmissionError::validation(self.kind));
                }
                self.clip
                    .validate()
                    .map_err(|e| SubmissionError::Validation(e.to_string()))
            }
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Holds whatever the user has entered so far for one workflow.
///
/// Text and file may both be resident; the file wins whenever a bundle is
/// produced.
#[derive(Debug, Clone)]
pub struct InputSelector {
    kind: WorkflowKind,
    text: String,
    file: Option<BinaryBlob>,
    aux: Auxiliary,
}

impl InputSelector {
    pub fn new(kind: WorkflowKind) -> Self {
        Self {
            kind,
            text: String::new(),
            file: None,
            aux: Auxiliary::default(),
        }
    }

    pub fn transformation() -> Self {
        Self::new(WorkflowKind::Transformation)
    }

    pub fn analysis() -> Self {
        Self::new(WorkflowKind::Analysis)
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_file(&mut self, file: BinaryBlob) {
        self.file = Some(file);
    }

    pub fn clear_file(&mut self) {
        self.file = None;
    }

    pub fn set_auxiliary(&mut self, aux: Auxiliary) {
        self.aux = aux;
    }

    pub fn set_genre(&mut self, genre: Genre) {
        self.aux.genre = genre;
    }

    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.aux.hint = hint.into();
    }

    pub fn set_clip(&mut self, clip: ClipWindow) {
        self.aux.clip = clip;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn hint_mut(&mut self) -> &mut String {
        &mut self.aux.hint
    }

    pub fn file(&self) -> Option<&BinaryBlob> {
        self.file.as_ref()
    }

    pub fn auxiliary(&self) -> &Auxiliary {
        &self.aux
    }

    pub fn is_valid(&self) -> bool {
        self.current_bundle().is_valid()
    }

    pub fn current_bundle(&self) -> InputBundle {
        let payload = match &self.file {
            Some(file) => Payload::File(file.clone()),
            None => Payload::Text(self.text.clone()),
        };
        let (genre, hint) = match self.kind {
            WorkflowKind::Transformation => (Some(self.aux.genre), None),
            WorkflowKind::Analysis => (None, Some(self.aux.hint.clone())),
        };
        InputBundle {
            kind: self.kind,
            payload,
            genre,
            hint,
            clip: self.aux.clip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> BinaryBlob {
        BinaryBlob::new("draft.pdf", "application/pdf", b"%PDF-1.4".to_vec())
    }

    fn video() -> BinaryBlob {
        BinaryBlob::new("take.mp4", "video/mp4", vec![0u8; 16])
    }

    #[test]
    fn file_takes_precedence_over_text() {
        let mut selector = InputSelector::transformation();
        selector.set_text("INT. ROOM");
        selector.set_file(pdf());

        let bundle = selector.current_bundle();
        assert_eq!(bundle.mode(), InputMode::File);
        assert_eq!(bundle.file().map(|f| f.name.as_str()), Some("draft.pdf"));
        assert!(bundle.text().is_none());

        // Setting text again does not evict the file.
        selector.set_text("EXT. STREET");
        assert_eq!(selector.current_bundle().mode(), InputMode::File);

        selector.clear_file();
        assert_eq!(
            selector.current_bundle().text(),
            Some("EXT. STREET"),
            "text becomes the payload once the file is cleared"
        );
    }

    #[test]
    fn transformation_validity() {
        let mut selector = InputSelector::transformation();
        assert!(!selector.is_valid());

        selector.set_text("   \n\t ");
        assert!(!selector.is_valid());

        selector.set_text("FADE IN:");
        assert!(selector.is_valid());

        selector.set_text("");
        selector.set_file(pdf());
        assert!(selector.is_valid());
        assert_eq!(selector.current_bundle().genre(), Some(Genre::Comedy));
    }

    #[test]
    fn analysis_requires_file_and_hint() {
        let mut selector = InputSelector::analysis();
        selector.set_hint("joy");
        assert!(!selector.is_valid(), "hint alone is not enough");

        selector.set_file(video());
        selector.set_hint("  ");
        assert!(!selector.is_valid(), "blank hint is rejected");

        selector.set_hint(" joy ");
        assert!(selector.is_valid());
        let bundle = selector.current_bundle();
        assert_eq!(bundle.hint(), Some("joy"));
        assert_eq!(bundle.genre(), None);
    }

    #[test]
    fn analysis_validation_message_differs_from_transformation() {
        let t = InputSelector::transformation().current_bundle().validate();
        let a = InputSelector::analysis().current_bundle().validate();
        assert_ne!(t.unwrap_err().to_string(), a.unwrap_err().to_string());
    }

    #[test]
    fn clip_window_rules() {
        assert!(ClipWindow::default().validate().is_ok());
        assert_eq!(
            ClipWindow {
                start: Some(-1.0),
                end: None
            }
            .validate(),
            Err(ClipWindowError::Negative)
        );
        assert_eq!(
            ClipWindow {
                start: Some(5.0),
                end: Some(5.0)
            }
            .validate(),
            Err(ClipWindowError::EndBeforeStart)
        );
        assert_eq!(
            ClipWindow {
                start: None,
                end: Some(f64::NAN)
            }
            .validate(),
            Err(ClipWindowError::NotFinite)
        );

        let mut selector = InputSelector::analysis();
        selector.set_file(video());
        selector.set_hint("anger");
        selector.set_clip(ClipWindow {
            start: Some(10.0),
            end: Some(2.0),
        });
        let err = selector.current_bundle().validate().unwrap_err();
        assert_eq!(err.to_string(), ClipWindowError::EndBeforeStart.to_string());
    }

    #[test]
    fn genre_labels_match_configured_list() {
        let labels: Vec<&str> = Genre::ALL.iter().map(Genre::as_str).collect();
        assert_eq!(labels, stagehand_config::GENRES);
        assert_eq!(Genre::default().as_str(), stagehand_config::DEFAULT_GENRE);
        assert_eq!(Genre::parse("thriller"), Some(Genre::Thriller));
        assert_eq!(Genre::parse("western"), None);
    }

    #[test]
    fn blob_from_path_infers_content_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Scene.PDF");
        std::fs::write(&path, b"%PDF").unwrap();

        let blob = BinaryBlob::from_path(&path).unwrap();
        assert_eq!(blob.name, "Scene.PDF");
        assert_eq!(blob.content_type, "application/pdf");
        assert_eq!(blob.len(), 4);

        let missing = BinaryBlob::from_path(&dir.path().join("nope.mp4"));
        assert!(matches!(missing, Err(BlobError::Io { .. })));
    }
}
