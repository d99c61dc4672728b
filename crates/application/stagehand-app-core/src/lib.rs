pub mod app;
pub mod app_core;
mod async_runtime;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod ports;
pub mod session;
pub mod viewmodel;

pub use app::StudioApplication;
pub use app_core::*;
pub use controller::{execute, SubmissionController, SubmitOutcome};
pub use domain::{AppState, ExportNotice, Route};
pub use gateway::{DirectoryArtifactSink, HttpIdentityPort, HttpInferenceGateway};
pub use ports::*;
pub use session::{AuthController, AuthOutcome, AuthState, SessionStore};
pub use viewmodel::*;
