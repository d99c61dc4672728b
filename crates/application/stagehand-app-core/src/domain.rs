use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Signup,
    Home,
    ScriptTransformer,
    VideoAnalyzer,
}

impl Route {
    pub fn requires_session(self) -> bool {
        matches!(
            self,
            Route::Home | Route::ScriptTransformer | Route::VideoAnalyzer
        )
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Login => "Log in",
            Route::Signup => "Sign up",
            Route::Home => "Home",
            Route::ScriptTransformer => "Script Transformer",
            Route::VideoAnalyzer => "Video Emotion Analyzer",
        }
    }
}

/// Outcome of the last export, shown under the result panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportNotice {
    Saved(PathBuf),
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub export_notice: Option<ExportNotice>,
}
