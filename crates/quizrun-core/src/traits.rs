//! Trait definitions for answer sources and scoring predicates.
//!
//! A session asks an [`AnswerSource`] for one answer per question and uses a
//! [`Scorer`] to decide which answers earn a point.

use serde::{Deserialize, Serialize};

use crate::error::QuizError;
use crate::model::{Answer, Question};

// ---------------------------------------------------------------------------
// Answer source
// ---------------------------------------------------------------------------

/// Something that can answer questions: an interactive console, a script,
/// a test double.
pub trait AnswerSource {
    /// Present `question` (the `position`-th, zero-based) and return its answer.
    ///
    /// Implementations decide how to handle unrecognized input; the console
    /// source re-prompts until it gets a valid answer or input ends.
    fn ask(&mut self, position: usize, question: &Question) -> Result<Answer, QuizError>;
}

/// A fixed list of answers, handed out in order. Running out of answers
/// behaves like a closed input stream.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: std::collections::VecDeque<Answer>,
}

impl ScriptedAnswers {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&mut self, position: usize, _question: &Question) -> Result<Answer, QuizError> {
        self.answers
            .pop_front()
            .ok_or(QuizError::InputClosed(position))
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Decides whether an answer to a question earns a point.
pub trait Scorer {
    fn awards_point(&self, question: &Question, answer: Answer) -> bool;
}

impl<F> Scorer for F
where
    F: Fn(&Question, Answer) -> bool,
{
    fn awards_point(&self, question: &Question, answer: Answer) -> bool {
        self(question, answer)
    }
}

/// Built-in scoring convention: one point for every answer matching the
/// chosen side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreOn {
    /// "Yes" earns a point.
    #[default]
    Yes,
    /// "No" earns a point.
    No,
}

impl Scorer for ScoreOn {
    fn awards_point(&self, _question: &Question, answer: Answer) -> bool {
        match self {
            ScoreOn::Yes => answer == Answer::Yes,
            ScoreOn::No => answer == Answer::No,
        }
    }
}

impl std::fmt::Display for ScoreOn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreOn::Yes => write!(f, "yes"),
            ScoreOn::No => write!(f, "no"),
        }
    }
}

impl std::str::FromStr for ScoreOn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" | "y" => Ok(ScoreOn::Yes),
            "no" | "n" => Ok(ScoreOn::No),
            other => Err(format!("unknown scoring convention: {other} (expected yes or no)")),
        }
    }
}
