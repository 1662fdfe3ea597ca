//! Core data model types for quizrun.
//!
//! Questions and answers only live for the duration of a session; the
//! [`QuizResult`] is the only type that is ever persisted.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single yes/no prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The prompt text as it appeared in the question file.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// An ordered, non-empty list of questions with the title from the file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    /// First line of the question file.
    pub title: String,
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Build a set from already-validated parts. The parser guarantees
    /// `questions` is non-empty.
    pub(crate) fn new(title: String, questions: Vec<Question>) -> Self {
        Self { title, questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

/// A response to one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn is_yes(self) -> bool {
        self == Answer::Yes
    }
}

impl From<bool> for Answer {
    fn from(yes: bool) -> Self {
        if yes {
            Answer::Yes
        } else {
            Answer::No
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => write!(f, "Y"),
            Answer::No => write!(f, "N"),
        }
    }
}

impl FromStr for Answer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yes" | "t" | "true" | "on" | "1" => Ok(Answer::Yes),
            "n" | "no" | "f" | "false" | "off" | "0" => Ok(Answer::No),
            other => Err(format!("unrecognized answer: {other:?}")),
        }
    }
}

/// The outcome of one completed questionnaire run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizResult {
    /// Unique record identifier.
    pub id: Uuid,
    /// When the questionnaire was completed.
    pub taken_at: DateTime<Utc>,
    /// Number of answers that earned a point.
    pub score: u32,
    /// Number of questions asked.
    pub total: u32,
}

impl QuizResult {
    /// Create a new result stamped with a fresh id and the current time.
    pub fn new(score: u32, total: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            score,
            total,
        }
    }

    /// Score as a percentage of the total, rounded to two decimal places.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round2(f64::from(self.score) / f64::from(self.total) * 100.0)
    }

    /// Whether the record is internally consistent.
    pub(crate) fn is_well_formed(&self) -> bool {
        self.total >= 1 && self.score <= self.total
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_parse() {
        for yes in ["y", "Y", "yes", " YES ", "t", "true", "on", "1"] {
            assert_eq!(yes.parse::<Answer>().unwrap(), Answer::Yes, "{yes}");
        }
        for no in ["n", "N", "no", "f", "False", "off", "0"] {
            assert_eq!(no.parse::<Answer>().unwrap(), Answer::No, "{no}");
        }
        assert!("maybe".parse::<Answer>().is_err());
        assert!("".parse::<Answer>().is_err());
        assert!("yy".parse::<Answer>().is_err());
    }

    #[test]
    fn percentage_rounds_to_two_places() {
        let result = QuizResult::new(1, 3);
        assert_eq!(result.percentage(), 33.33);
        assert_eq!(QuizResult::new(2, 2).percentage(), 100.0);
        assert_eq!(QuizResult::new(0, 4).percentage(), 0.0);
    }

    #[test]
    fn well_formed_records() {
        assert!(QuizResult::new(2, 2).is_well_formed());
        assert!(!QuizResult::new(3, 2).is_well_formed());
        assert!(!QuizResult::new(0, 0).is_well_formed());
    }

    #[test]
    fn result_rejects_unknown_fields() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000000",
            "taken_at": "2025-01-01T00:00:00Z",
            "score": 1,
            "total": 2,
            "extra": true
        }"#;
        assert!(serde_json::from_str::<QuizResult>(json).is_err());
    }
}
