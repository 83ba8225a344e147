use thiserror::Error;

use hz_core::HzError;
use hz_store::StoreError;

/// Errors that stop a session from starting.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session configuration: {0}")]
    Config(#[from] HzError),

    /// The boundary file could not be fetched or parsed.
    #[error("hazard store error: {0}")]
    Store(#[from] StoreError),
}

pub type SessionResult<T> = Result<T, SessionError>;

/// A failed notification attempt.  Caught and logged by the dispatcher,
/// never surfaced to the user.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The service answered but refused the request.
    #[error("notification rejected: {0}")]
    Rejected(String),

    #[error("notification service unreachable: {0}")]
    Unavailable(String),
}
