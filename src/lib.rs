//! # trivia-quiz
//!
//! A command-line trivia quiz backed by the Open Trivia DB.
//!
//! The player names a topic, which is fuzzy-matched against the service's
//! category list, picks how many questions to answer and optionally a
//! difficulty and question type. Questions are fetched with progressively
//! broader filters and, if the service has nothing to offer, a small
//! built-in set is used instead.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use trivia_quiz::{DEFAULT_BASE_URL, QuizError, TriviaClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let client = TriviaClient::new(DEFAULT_BASE_URL)?;
//!     let mut terminal = trivia_quiz::terminal::stdio();
//!     let mut rng = StdRng::from_entropy();
//!
//!     let summary = trivia_quiz::run(&client, &mut terminal, &mut rng).await?;
//!     println!("{} of {} correct", summary.score, summary.total);
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod error;
mod matcher;
mod models;
mod normalize;
mod runner;
pub mod api;
pub mod terminal;
mod ui;

pub use api::{ApiError, DEFAULT_BASE_URL, QuestionQuery, TriviaClient, TriviaSource};
pub use app::{DEFAULT_AMOUNT, FetchStrategy, Settings, fetch_with_fallback, prompt_settings, run};
pub use data::offline_questions;
pub use error::QuizError;
pub use matcher::{SIMILARITY_CUTOFF, closest_match, match_category, similarity};
pub use models::{Category, Difficulty, NormalizedQuestion, QuestionType, RawQuestion};
pub use normalize::normalize_question;
pub use runner::{Grade, QuizSummary, run_quiz};
