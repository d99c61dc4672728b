pub mod identity;
pub mod net;
pub mod save;

// Re-exports for convenience
pub use identity::{IdentityClient, IdentityError};
pub use net::{default_http_client, HttpGateway, TransportError};
pub use save::{write_artifact, write_artifact_to, SaveError};
