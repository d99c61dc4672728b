pub mod error;
pub mod export;
pub mod identity;
pub mod input;
pub mod request;
pub mod result;
pub mod workflow;

pub use error::{SubmissionError, SubmissionErrorKind};
pub use export::{export_document, export_report, Artifact, ExportError, ReportMeta};
pub use identity::{
    AuthResponse, Credentials, IdentityErrorBody, SessionContext, SignupRequest, UserProfile,
};
pub use input::{
    Auxiliary, BinaryBlob, BlobError, ClipWindow, ClipWindowError, Genre, InputBundle, InputMode,
    InputSelector, Payload, WorkflowKind,
};
pub use request::{MultipartForm, RawResponse, RequestBody, SubmissionRequest};
pub use result::{AnalysisResult, Recommendations, ReviewOutcome, TransformResult};
pub use workflow::{AnalysisWorkflow, TransformWorkflow, Workflow};
