//! reqwest-backed client for the Open Trivia DB endpoints.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::models::{Category, RawQuestion};

use super::{ApiError, QuestionQuery, TriviaSource};

pub const DEFAULT_BASE_URL: &str = "https://opentdb.com";
const CATEGORIES_PATH: &str = "/api_category.php";
const QUESTIONS_PATH: &str = "/api.php";
const CATEGORIES_TIMEOUT: Duration = Duration::from_secs(10);
const QUESTIONS_TIMEOUT: Duration = Duration::from_secs(15);
const RESPONSE_SUCCESS: i64 = 0;
const RESPONSE_NO_RESULTS: i64 = 1;

#[derive(Deserialize)]
struct CategoriesResponse {
    #[serde(default)]
    trivia_categories: Vec<Category>,
}

fn default_response_code() -> i64 {
    RESPONSE_NO_RESULTS
}

#[derive(Deserialize)]
struct QuestionsResponse {
    #[serde(default = "default_response_code")]
    response_code: i64,
    #[serde(default)]
    results: Vec<RawQuestion>,
}

/// Client for an Open Trivia DB compatible service.
pub struct TriviaClient {
    base_url: String,
    client: reqwest::Client,
    categories_timeout: Duration,
    questions_timeout: Duration,
}

impl TriviaClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("trivia-quiz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            categories_timeout: CATEGORIES_TIMEOUT,
            questions_timeout: QUESTIONS_TIMEOUT,
        })
    }

    #[cfg(test)]
    fn with_timeouts(self, categories: Duration, questions: Duration) -> Self {
        Self {
            categories_timeout: categories,
            questions_timeout: questions,
            ..self
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&'static str, String)],
        timeout: Duration,
    ) -> Result<T, ApiError> {
        let timeout_err = move |err: reqwest::Error| {
            if err.is_timeout() {
                ApiError::Timeout(timeout)
            } else {
                ApiError::Network(err)
            }
        };

        let mut request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .timeout(timeout);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(timeout_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(timeout_err)
    }

    /// Fetch the category list, surfacing any failure.
    #[instrument(skip(self))]
    pub async fn try_categories(&self) -> Result<Vec<Category>, ApiError> {
        let body: CategoriesResponse = self
            .get_json(CATEGORIES_PATH, &[], self.categories_timeout)
            .await?;
        debug!(count = body.trivia_categories.len(), "fetched categories");
        Ok(body.trivia_categories)
    }

    /// Fetch one batch of questions. Any nonzero response code means
    /// "no results" and yields an empty list rather than an error.
    #[instrument(skip(self))]
    pub async fn try_questions(&self, query: &QuestionQuery) -> Result<Vec<RawQuestion>, ApiError> {
        let body: QuestionsResponse = self
            .get_json(QUESTIONS_PATH, &query.params(), self.questions_timeout)
            .await?;

        if body.response_code != RESPONSE_SUCCESS {
            debug!(response_code = body.response_code, "service returned no questions");
            return Ok(Vec::new());
        }

        debug!(count = body.results.len(), "fetched questions");
        Ok(body.results)
    }
}

#[async_trait]
impl TriviaSource for TriviaClient {
    async fn categories(&self) -> Vec<Category> {
        self.try_categories().await.unwrap_or_else(|e| {
            warn!("⚠ Could not fetch categories: {}", e);
            Vec::new()
        })
    }

    async fn questions(&self, query: &QuestionQuery) -> Vec<RawQuestion> {
        self.try_questions(query).await.unwrap_or_else(|e| {
            warn!("⚠ Could not fetch questions: {}", e);
            Vec::new()
        })
    }
}
