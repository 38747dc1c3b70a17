use std::time::Duration;

use thiserror::Error;

/// Errors that can occur when talking to the trivia service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request timed out.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The service answered with a non-success HTTP status.
    #[error("HTTP {0}")]
    Status(u16),

    /// Transport failure or an unparseable body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}
