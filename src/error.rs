//! Countdown error types

use axum::http::StatusCode;

/// Result type alias for countdown operations
pub type Result<T> = std::result::Result<T, CountdownError>;

/// Precondition violations reported when starting a countdown
#[derive(Debug, thiserror::Error)]
pub enum CountdownError {
    /// The starting value was below zero.
    #[error("countdown cannot start from a negative value: {0}")]
    NegativeStart(i64),

    /// The tick period was zero.
    #[error("countdown tick period must be non-zero")]
    ZeroPeriod,

    /// No display target is registered under the requested id.
    #[error("no display target registered as '{0}'")]
    MissingDisplay(String),

    /// A countdown is still running on the page.
    #[error("a countdown is already running")]
    AlreadyRunning,

    /// A state lock was poisoned by a panicking holder.
    #[error("failed to lock {0}")]
    StatePoisoned(String),
}

impl CountdownError {
    /// HTTP status code an API client should see for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CountdownError::NegativeStart(_) => StatusCode::BAD_REQUEST,
            CountdownError::ZeroPeriod => StatusCode::BAD_REQUEST,
            CountdownError::MissingDisplay(_) => StatusCode::NOT_FOUND,
            CountdownError::AlreadyRunning => StatusCode::CONFLICT,
            CountdownError::StatePoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
