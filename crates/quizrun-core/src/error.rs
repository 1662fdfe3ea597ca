//! Error types for question loading, sessions, and result persistence.
//!
//! Corrupt result-store *content* is deliberately absent from this enum: it is
//! repaired in place and reported through [`crate::store::LoadStatus`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by quizrun-core.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The question file is missing or unreadable.
    #[error("cannot read question file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The question file has no questions once the header is removed.
    #[error("malformed question file {}: {reason}", .path.display())]
    MalformedQuestionFile { path: PathBuf, reason: String },

    /// The result store could not be read or written.
    #[error("cannot persist results to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A result that would fail the store's own schema check.
    #[error("refusing to store inconsistent result: score {score} of {total}")]
    InvalidResult { score: u32, total: u32 },

    /// A question slot was answered a second time.
    #[error("question {0} has already been answered")]
    AlreadyAnswered(usize),

    /// An answer was given for a question that does not exist.
    #[error("no question at position {index} (questionnaire has {len})")]
    NoSuchQuestion { index: usize, len: usize },

    /// A score was requested before every question was answered.
    #[error("questionnaire incomplete: {answered} of {total} questions answered")]
    Incomplete { answered: usize, total: usize },

    /// Input ended while waiting for an answer.
    #[error("input closed before question {0} was answered")]
    InputClosed(usize),

    /// Reading from or writing to the console failed.
    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

impl QuizError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: io::Error) -> Self {
        QuizError::Persistence {
            path: path.into(),
            source,
        }
    }
}
