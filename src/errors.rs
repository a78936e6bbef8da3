use thiserror::Error;
use uuid::Uuid;

/// Error type that captures record-store failures.
///
/// The store is a host collaborator; anything the host's client surfaces
/// (timeouts included) arrives here as a `Backend` message. A missing price
/// level is never an error; resolution reports that as an empty result.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    RecordNotFound(Uuid),
    #[error("Backend error: {0}")]
    Backend(String),
}
