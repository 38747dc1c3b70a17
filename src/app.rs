//! One quiz session: settings prompts, topic matching, question retrieval
//! with fallbacks, then the quiz itself.

use std::io::Write;

use rand::Rng;
use rand::seq::SliceRandom;
use tokio::io::AsyncBufRead;
use tracing::{debug, info};

use crate::api::{MAX_AMOUNT, MIN_AMOUNT, QuestionQuery, TriviaSource};
use crate::data::offline_questions;
use crate::error::QuizError;
use crate::matcher::match_category;
use crate::models::RawQuestion;
use crate::normalize::normalize_question;
use crate::runner::{QuizSummary, run_quiz};
use crate::terminal::Terminal;
use crate::ui;

pub const DEFAULT_AMOUNT: u32 = 10;
const ANY: &str = "any";
const DIFFICULTY_CHOICES: [&str; 4] = [ANY, "easy", "medium", "hard"];
const TYPE_CHOICES: [&str; 3] = [ANY, "multiple", "boolean"];

/// What the player asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub topic: String,
    pub amount: u32,
    pub difficulty: String,
    pub kind: String,
}

impl Settings {
    /// The question query for these settings, restricted to `category`.
    pub fn query(&self, category: Option<u32>) -> QuestionQuery {
        let filter = |value: &str| Some(value.to_string()).filter(|v| v != ANY);
        QuestionQuery::from_filters(
            self.amount,
            category,
            filter(&self.difficulty).as_deref(),
            filter(&self.kind).as_deref(),
        )
    }
}

pub async fn prompt_settings<R, W>(terminal: &mut Terminal<R, W>) -> Result<Settings, QuizError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let topic = terminal
        .ask("Enter a topic (e.g., 'history', 'science', 'sports', or leave blank for random): ")
        .await?;
    let amount = terminal
        .ask_int("How many questions? (1–50)", DEFAULT_AMOUNT, MIN_AMOUNT, MAX_AMOUNT)
        .await?;
    let difficulty = terminal
        .ask_choice("Difficulty?", &DIFFICULTY_CHOICES, ANY)
        .await?;
    let kind = terminal.ask_choice("Type?", &TYPE_CHOICES, ANY).await?;

    Ok(Settings {
        topic,
        amount,
        difficulty,
        kind,
    })
}

/// One attempt in the question retrieval chain, from most to least specific.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStrategy {
    AsRequested,
    WithoutCategory,
    Unfiltered,
}

impl FetchStrategy {
    pub const CHAIN: [FetchStrategy; 3] = [
        FetchStrategy::AsRequested,
        FetchStrategy::WithoutCategory,
        FetchStrategy::Unfiltered,
    ];

    pub fn query(&self, requested: QuestionQuery) -> QuestionQuery {
        match self {
            FetchStrategy::AsRequested => requested,
            FetchStrategy::WithoutCategory => requested.without_category(),
            FetchStrategy::Unfiltered => requested.unfiltered(),
        }
    }

    /// Line shown to the player before this attempt runs.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            FetchStrategy::AsRequested => None,
            FetchStrategy::WithoutCategory => {
                Some("⚠ No questions found for that selection. Trying broader search...")
            }
            FetchStrategy::Unfiltered => Some("⚠ Still no questions. Trying fully random..."),
        }
    }
}

const OFFLINE_NOTICE: &str = "❌ Could not fetch questions from the API. Using a tiny offline set.";

/// Walk [`FetchStrategy::CHAIN`] until one attempt returns questions,
/// ending with the built-in offline set.
pub async fn fetch_with_fallback<S, R, W>(
    source: &S,
    terminal: &mut Terminal<R, W>,
    requested: QuestionQuery,
) -> Result<Vec<RawQuestion>, QuizError>
where
    S: TriviaSource + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    for strategy in FetchStrategy::CHAIN {
        if let Some(notice) = strategy.notice() {
            terminal.say(notice)?;
        }
        let questions = source.questions(&strategy.query(requested)).await;
        if !questions.is_empty() {
            debug!(?strategy, count = questions.len(), "questions fetched");
            return Ok(questions);
        }
    }

    info!("falling back to offline questions");
    terminal.say(OFFLINE_NOTICE)?;
    Ok(offline_questions())
}

/// Run a full interactive session against `source`.
pub async fn run<S, R, W, G>(
    source: &S,
    terminal: &mut Terminal<R, W>,
    rng: &mut G,
) -> Result<QuizSummary, QuizError>
where
    S: TriviaSource + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
    G: Rng + ?Sized,
{
    ui::render_welcome(terminal.writer())?;
    let settings = prompt_settings(terminal).await?;

    let categories = source.categories().await;
    let matched = if settings.topic.is_empty() {
        None
    } else {
        match_category(&settings.topic, &categories)
    };

    match matched {
        Some(category) => terminal.say(format!(
            "🔎 Matched topic to category: {} (id {})",
            category.name, category.id
        ))?,
        None if !settings.topic.is_empty() => {
            terminal.say("ℹ No close category found. Using random categories instead.")?
        }
        None => terminal.say("ℹ Random topic selected.")?,
    }

    let requested = settings.query(matched.map(|category| category.id));
    let raw = fetch_with_fallback(source, terminal, requested).await?;

    let mut questions: Vec<_> = raw.iter().map(|q| normalize_question(q, rng)).collect();
    questions.shuffle(rng);

    run_quiz(terminal, &questions).await
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::models::{Category, Difficulty, QuestionType};

    struct StubSource {
        categories: Vec<Category>,
        responses: Mutex<VecDeque<Vec<RawQuestion>>>,
        queries: Mutex<Vec<QuestionQuery>>,
    }

    impl StubSource {
        fn new(categories: Vec<Category>, responses: Vec<Vec<RawQuestion>>) -> Self {
            Self {
                categories,
                responses: Mutex::new(responses.into()),
                queries: Mutex::new(Vec::new()),
            }
        }

        fn queries(&self) -> Vec<QuestionQuery> {
            self.queries.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TriviaSource for StubSource {
        async fn categories(&self) -> Vec<Category> {
            self.categories.clone()
        }

        async fn questions(&self, query: &QuestionQuery) -> Vec<RawQuestion> {
            self.queries.lock().unwrap().push(*query);
            self.responses.lock().unwrap().pop_front().unwrap_or_default()
        }
    }

    fn history() -> Vec<Category> {
        vec![
            Category {
                id: 9,
                name: "General Knowledge".to_string(),
            },
            Category {
                id: 23,
                name: "History".to_string(),
            },
        ]
    }

    fn history_question() -> RawQuestion {
        RawQuestion {
            category: "History".to_string(),
            kind: QuestionType::Boolean,
            difficulty: Difficulty::Hard,
            question: "The Magna Carta was sealed in 1215.".to_string(),
            correct_answer: "True".to_string(),
            incorrect_answers: vec!["False".to_string()],
        }
    }

    async fn session(source: &StubSource, input: &str) -> (QuizSummary, String) {
        let mut terminal = Terminal::new(input.as_bytes(), Vec::new());
        let mut rng = StdRng::seed_from_u64(2024);
        let summary = run(source, &mut terminal, &mut rng).await.unwrap();
        (summary, String::from_utf8(terminal.into_writer()).unwrap())
    }

    #[test]
    fn test_strategy_queries() {
        let requested = QuestionQuery::from_filters(5, Some(23), Some("hard"), Some("boolean"));

        let queries: Vec<_> = FetchStrategy::CHAIN
            .iter()
            .map(|strategy| strategy.query(requested))
            .collect();

        assert_eq!(queries[0], requested);
        assert_eq!(queries[1].category, None);
        assert_eq!(queries[1].difficulty, Some(Difficulty::Hard));
        assert_eq!(queries[1].kind, Some(QuestionType::Boolean));
        assert_eq!(queries[2], QuestionQuery::new(5));
    }

    #[test]
    fn test_settings_any_means_unfiltered() {
        let settings = Settings {
            topic: String::new(),
            amount: 12,
            difficulty: "any".to_string(),
            kind: "any".to_string(),
        };
        assert_eq!(settings.query(None), QuestionQuery::new(12));
    }

    #[tokio::test]
    async fn test_prompts_use_defaults() {
        let mut terminal = Terminal::new("\n\n\n\n".as_bytes(), Vec::new());
        let settings = prompt_settings(&mut terminal).await.unwrap();

        assert_eq!(
            settings,
            Settings {
                topic: String::new(),
                amount: DEFAULT_AMOUNT,
                difficulty: "any".to_string(),
                kind: "any".to_string(),
            }
        );

        let out = String::from_utf8(terminal.into_writer()).unwrap();
        assert!(out.contains("How many questions? (1–50) [10]: "));
        assert!(out.contains("Difficulty? ['any', 'easy', 'medium', 'hard'] [any]: "));
        assert!(out.contains("Type? ['any', 'multiple', 'boolean'] [any]: "));
    }

    #[tokio::test]
    async fn test_matched_topic_filters_by_category() {
        let source = StubSource::new(history(), vec![vec![history_question()]]);
        let (summary, out) = session(&source, "history\n3\nhard\nBoolean\n1\n").await;

        assert!(out.contains("🔎 Matched topic to category: History (id 23)"));
        assert_eq!(summary.total, 1);

        let queries = source.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(
            queries[0],
            QuestionQuery::from_filters(3, Some(23), Some("hard"), Some("boolean"))
        );
    }

    #[tokio::test]
    async fn test_broader_search_keeps_difficulty_and_type() {
        let source = StubSource::new(history(), vec![vec![], vec![history_question()]]);
        let (summary, out) = session(&source, "history\n\nhard\nboolean\n2\n").await;

        assert!(out.contains("Trying broader search..."));
        assert!(!out.contains("Trying fully random..."));
        assert_eq!(summary.total, 1);

        let queries = source.queries();
        assert_eq!(queries.len(), 2);
        assert_eq!(
            queries[1],
            QuestionQuery::from_filters(10, None, Some("hard"), Some("boolean"))
        );
    }

    #[tokio::test]
    async fn test_unmatched_topic_is_reported() {
        let source = StubSource::new(history(), vec![vec![history_question()]]);
        let (_, out) = session(&source, "underwater basket weaving\n\n\n\n1\n").await;

        assert!(out.contains("ℹ No close category found. Using random categories instead."));
        assert_eq!(source.queries()[0].category, None);
    }

    #[tokio::test]
    async fn test_blank_topic_is_random() {
        let source = StubSource::new(history(), vec![vec![history_question()]]);
        let (_, out) = session(&source, "\n\n\n\n1\n").await;

        assert!(out.contains("ℹ Random topic selected."));
    }

    #[tokio::test]
    async fn test_offline_set_when_every_fetch_is_empty() {
        let source = StubSource::new(Vec::new(), Vec::new());
        let (summary, out) = session(&source, "science\n5\neasy\nmultiple\n1\n1\n").await;

        assert_eq!(summary.total, 2);
        assert!(summary.score <= 2);
        assert!(out.contains(OFFLINE_NOTICE));
        assert!(out.contains("What is the capital of France?"));
        assert!(out.contains("The chemical symbol for Gold is Au."));
        assert!(out.contains(&format!("Your Score: {}/2", summary.score)));

        let queries = source.queries();
        assert_eq!(queries.len(), 3);
        assert_eq!(queries[2], QuestionQuery::new(5));
    }

    #[tokio::test]
    async fn test_questions_are_decoded_before_display() {
        let mut encoded = history_question();
        encoded.question = "&quot;Veni, vidi, vici&quot; was said by Caesar.".to_string();
        let source = StubSource::new(history(), vec![vec![encoded]]);
        let (_, out) = session(&source, "\n\n\n\n1\n").await;

        assert!(out.contains("\"Veni, vidi, vici\" was said by Caesar."));
    }
}
