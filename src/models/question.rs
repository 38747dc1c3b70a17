use std::fmt;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Difficulty {
    pub const FILTERS: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Parse a user-supplied filter value. Anything other than
    /// easy/medium/hard (in any case) means "no filter".
    pub fn parse_filter(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::FILTERS
            .into_iter()
            .find(|difficulty| difficulty.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Boolean,
    #[default]
    #[serde(other)]
    Multiple,
}

impl QuestionType {
    pub const FILTERS: [QuestionType; 2] = [QuestionType::Multiple, QuestionType::Boolean];

    pub fn parse_filter(value: &str) -> Option<Self> {
        let value = value.trim().to_lowercase();
        Self::FILTERS.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Multiple => "multiple",
            QuestionType::Boolean => "boolean",
        }
    }
}

fn default_category() -> String {
    "General".to_string()
}

/// A question as the trivia service sends it. Text fields are still
/// HTML-entity encoded.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawQuestion {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(rename = "type", default)]
    pub kind: QuestionType,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

/// A decoded question ready for display. `answer` appears exactly once
/// in `options`.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub kind: QuestionType,
    pub difficulty: Difficulty,
    pub category: String,
}

impl NormalizedQuestion {
    /// Whether the 1-based option `choice` is the right answer.
    pub fn is_correct(&self, choice: usize) -> bool {
        choice
            .checked_sub(1)
            .and_then(|index| self.options.get(index))
            .is_some_and(|option| *option == self.answer)
    }
}
