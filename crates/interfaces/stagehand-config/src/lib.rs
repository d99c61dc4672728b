//! Central configuration constants for remote services, wire field names and export defaults.

/// Default base URL of the script transformation service.
pub const DEFAULT_SCRIPT_API_URL: &str = "https://Arjun9036-script-writer-api.hf.space";

/// Default base URL of the emotion analysis service.
pub const DEFAULT_EMOTION_API_URL: &str = "https://arjun9036-multimodal-emotion-backend.hf.space";

/// Default base URL of the identity service.
pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:5000";

pub const SCRIPT_API_URL_ENV: &str = "STAGEHAND_SCRIPT_API_URL";
pub const EMOTION_API_URL_ENV: &str = "STAGEHAND_EMOTION_API_URL";
pub const AUTH_API_URL_ENV: &str = "STAGEHAND_AUTH_API_URL";

pub const SCRIPT_TEXT_PATH: &str = "/generate-script/";
pub const SCRIPT_DOCUMENT_PATH: &str = "/generate-script-from-pdf/";
pub const EMOTION_PREDICT_PATH: &str = "/predict";
pub const AUTH_LOGIN_PATH: &str = "/api/auth/login";
pub const AUTH_SIGNUP_PATH: &str = "/api/auth/signup";

/// Multipart / JSON field names used by the remote services.
pub mod fields {
    pub const ORIGINAL_SCRIPT: &str = "original_script";
    pub const GENRE: &str = "genre";
    pub const DOCUMENT: &str = "file";
    pub const VIDEO: &str = "video";
    pub const USER_EMOTION: &str = "user_emotion";
    pub const START_TIME: &str = "start_time";
    pub const END_TIME: &str = "end_time";
}

/// Genres offered by the transformation workflow, in display order.
pub const GENRES: [&str; 5] = ["Comedy", "Drama", "Thriller", "Romance", "Action"];

pub const DEFAULT_GENRE: &str = "Comedy";

pub const DOCUMENT_NAME_PREFIX: &str = "Transformed_";
pub const DOCUMENT_NAME_SUFFIX: &str = "_Script.docx";
pub const REPORT_FILE_NAME: &str = "Video_Emotion_Report.txt";

/// The emotion service never analyses more than this many seconds of a clip.
pub const MAX_CLIP_SECONDS: f64 = 300.0;

/// Connect timeout for the shared HTTP client. Requests themselves are unbounded.
pub const CONNECT_TIMEOUT_SECS: u64 = 15;

/// Base URLs of every remote collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub script_api: String,
    pub emotion_api: String,
    pub auth_api: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            script_api: DEFAULT_SCRIPT_API_URL.to_string(),
            emotion_api: DEFAULT_EMOTION_API_URL.to_string(),
            auth_api: DEFAULT_AUTH_API_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Defaults, with each base URL overridable from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let pick = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .map(|v| normalize_base(&v))
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            script_api: pick(SCRIPT_API_URL_ENV, DEFAULT_SCRIPT_API_URL),
            emotion_api: pick(EMOTION_API_URL_ENV, DEFAULT_EMOTION_API_URL),
            auth_api: pick(AUTH_API_URL_ENV, DEFAULT_AUTH_API_URL),
        }
    }

    /// Every base pointed at one host, used by tests and local stacks.
    pub fn single_host(base: &str) -> Self {
        let base = normalize_base(base);
        Self {
            script_api: base.clone(),
            emotion_api: base.clone(),
            auth_api: base,
        }
    }

    pub fn script_text_url(&self) -> String {
        join(&self.script_api, SCRIPT_TEXT_PATH)
    }

    pub fn script_document_url(&self) -> String {
        join(&self.script_api, SCRIPT_DOCUMENT_PATH)
    }

    pub fn emotion_predict_url(&self) -> String {
        join(&self.emotion_api, EMOTION_PREDICT_PATH)
    }

    pub fn login_url(&self) -> String {
        join(&self.auth_api, AUTH_LOGIN_PATH)
    }

    pub fn signup_url(&self) -> String {
        join(&self.auth_api, AUTH_SIGNUP_PATH)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

fn join(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Suggested file name of an exported transformation document.
pub fn document_file_name(genre: &str) -> String {
    format!("{DOCUMENT_NAME_PREFIX}{genre}{DOCUMENT_NAME_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_trim_trailing_slash_and_ignore_blank_values() {
        let endpoints = Endpoints::from_lookup(|key| match key {
            SCRIPT_API_URL_ENV => Some("http://127.0.0.1:9000/".into()),
            EMOTION_API_URL_ENV => Some("   ".into()),
            _ => None,
        });

        assert_eq!(endpoints.script_api, "http://127.0.0.1:9000");
        assert_eq!(endpoints.emotion_api, DEFAULT_EMOTION_API_URL);
        assert_eq!(endpoints.auth_api, DEFAULT_AUTH_API_URL);
        assert_eq!(
            endpoints.script_text_url(),
            "http://127.0.0.1:9000/generate-script/"
        );
    }

    #[test]
    fn document_name_embeds_genre() {
        assert_eq!(document_file_name("Drama"), "Transformed_Drama_Script.docx");
    }
}
