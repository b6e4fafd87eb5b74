use thiserror::Error;

use crate::{activity::MalformedEventError, backends::github::FetchError};

/// Terminal condition of a run, printed instead of the activity report.
#[derive(Debug, Error)]
pub enum ErrorCode {
    #[error("Error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Error: {0}")]
    MalformedEvent(#[from] MalformedEventError),
}

impl ErrorCode {
    /// Stable identifier attached to log records.
    pub fn internal_code(&self) -> u32 {
        match self {
            Self::Fetch(FetchError::NotFound { .. }) => 1,
            Self::Fetch(FetchError::RateLimited) => 2,
            Self::Fetch(FetchError::HttpError(_)) => 3,
            Self::Fetch(FetchError::TransportError(_)) => 4,
            Self::MalformedEvent(_) => 5,
        }
    }
}
