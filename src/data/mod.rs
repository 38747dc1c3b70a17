mod offline;

pub use offline::offline_questions;
