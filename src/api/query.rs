use crate::models::{Difficulty, QuestionType};

pub const MIN_AMOUNT: u32 = 1;
pub const MAX_AMOUNT: u32 = 50;

/// Filters for one question request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestionQuery {
    amount: u32,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub kind: Option<QuestionType>,
}

impl QuestionQuery {
    /// An unfiltered query. `amount` is clamped to the range the service
    /// accepts.
    pub fn new(amount: u32) -> Self {
        Self {
            amount: amount.clamp(MIN_AMOUNT, MAX_AMOUNT),
            category: None,
            difficulty: None,
            kind: None,
        }
    }

    /// Build a query from loosely typed filters. Unrecognised difficulty or
    /// type values and a category id of 0 are treated as unset.
    pub fn from_filters(
        amount: u32,
        category: Option<u32>,
        difficulty: Option<&str>,
        kind: Option<&str>,
    ) -> Self {
        Self {
            category: category.filter(|id| *id != 0),
            difficulty: difficulty.and_then(Difficulty::parse_filter),
            kind: kind.and_then(QuestionType::parse_filter),
            ..Self::new(amount)
        }
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn without_category(self) -> Self {
        Self {
            category: None,
            ..self
        }
    }

    pub fn unfiltered(self) -> Self {
        Self::new(self.amount)
    }

    /// Query-string pairs for the recognised, non-empty filters.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("amount", self.amount.to_string())];
        if let Some(category) = self.category.filter(|id| *id != 0) {
            params.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty.filter(|d| *d != Difficulty::Unknown) {
            params.push(("difficulty", difficulty.as_str().to_string()));
        }
        if let Some(kind) = self.kind {
            params.push(("type", kind.as_str().to_string()));
        }
        params
    }
}
