use serde::Deserialize;

/// A topic grouping published by the trivia service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}
