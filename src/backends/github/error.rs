use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("User '{username}' not found.")]
    NotFound { username: String },

    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Unable to fetch data (HTTP {0})")]
    HttpError(u16),

    #[error("{0}")]
    TransportError(String),
}
