//! Schedule client error types

use thiserror::Error;

/// Failures talking to the schedule backend.
///
/// Application-level rejections (`{"status": "error"}`) are not errors: the
/// controller reports them to the user and returns a normal outcome.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// The request never completed (connection refused, timeout, ...)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::Decode(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ScheduleError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ScheduleError::Decode(err.to_string())
        } else {
            ScheduleError::Transport(err.to_string())
        }
    }
}

/// Result type alias for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;
