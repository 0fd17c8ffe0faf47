//! Domain errors surfaced to the user (status bar) or the CLI.

use thiserror::Error;

use super::vocabulary::CategoryFilter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudyError {
    /// The selected topic has no words, so there is nothing to study.
    #[error("no words available for {}", .category.label())]
    EmptySelection { category: CategoryFilter },

    #[error("unknown topic `{0}` (expected all, climate or labor)")]
    UnknownCategory(String),

    #[error("unknown study mode `{0}` (expected flashcards, mcq or writing)")]
    UnknownMode(String),
}
