use std::io;

use thiserror::Error;

use crate::api::ApiError;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The trivia service client could not be set up.
    #[error("failed to set up trivia client: {0}")]
    Api(#[from] ApiError),

    /// Reading from or writing to the terminal failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Standard input ended while waiting for an answer.
    #[error("input closed")]
    InputClosed,
}
