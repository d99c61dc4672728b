pub mod events;
pub mod reducer;
pub mod store;

pub use events::{RunId, SubmissionEvent, SubmissionState};
pub use reducer::reduce;
pub use store::SubmissionStore;
