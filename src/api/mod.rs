//! Access to the Open Trivia DB web service.

mod client;
mod error;
mod query;

use async_trait::async_trait;

use crate::models::{Category, RawQuestion};

pub use client::{DEFAULT_BASE_URL, TriviaClient};
pub use error::ApiError;
pub use query::{MAX_AMOUNT, MIN_AMOUNT, QuestionQuery};

/// A provider of categories and questions.
///
/// Both calls degrade to an empty list on failure; callers treat "empty"
/// and "unavailable" the same way.
#[async_trait]
pub trait TriviaSource {
    async fn categories(&self) -> Vec<Category>;

    async fn questions(&self, query: &QuestionQuery) -> Vec<RawQuestion>;
}
