//! Core study logic – vocabulary table, question generation, answer
//! evaluation, quiz sessions and flashcard navigation.
//!
//! Nothing in this module depends on any TUI or rendering crate.

pub mod answer;
pub mod error;
pub mod flashcards;
pub mod quiz;
pub mod session;
pub mod vocabulary;
