//! quizrun-core — Question files, questionnaire sessions, and result history.
//!
//! This crate holds everything the `quizrun` binary needs apart from argument
//! parsing and rendering: the question-file parser, the interactive session
//! and its scoring predicates, and the JSON-backed result store.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod session;
pub mod statistics;
pub mod store;
pub mod traits;

pub use error::QuizError;
