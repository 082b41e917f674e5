use thiserror::Error;

/// Faults raised by the remote persistence service.
///
/// The page controller collapses these into generic user-facing messages;
/// the structured variants exist for logging and tests.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed (connection, DNS, timeout, ...)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The service answered with a non-success status
    #[error("service returned status {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
