//! Question file parser.
//!
//! A question file is plain text:
//!
//! ```text
//! Questionnaire Title
//! ---------------------------
//! Question 1?
//! Question 2?
//! ```
//!
//! The first two lines are discarded unconditionally. Every remaining
//! non-blank line is one question, in file order. Blank lines anywhere after
//! the header are skipped, and trailing whitespace (including `\r`) is
//! trimmed from each question.

use std::path::Path;

use crate::error::QuizError;
use crate::model::{Question, QuestionSet};

/// Number of header lines (title + separator) at the top of a question file.
const HEADER_LINES: usize = 2;

/// Read and parse a question file.
pub fn load_questions(path: &Path) -> Result<QuestionSet, QuizError> {
    let content = std::fs::read_to_string(path).map_err(|source| QuizError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let set = parse_questions_str(&content, path)?;
    tracing::debug!(
        "loaded {} questions from {} ({})",
        set.len(),
        path.display(),
        set.title
    );
    Ok(set)
}

/// Parse question-file content (useful for testing). `source_path` is only
/// used in error messages.
pub fn parse_questions_str(content: &str, source_path: &Path) -> Result<QuestionSet, QuizError> {
    let mut lines = content.lines();

    let title = lines.next();
    let separator = lines.next();
    let title = match (title, separator) {
        (Some(title), Some(_)) => title.trim().to_string(),
        _ => {
            return Err(QuizError::MalformedQuestionFile {
                path: source_path.to_path_buf(),
                reason: format!("expected at least {HEADER_LINES} header lines (title and separator)"),
            })
        }
    };

    let questions: Vec<Question> = lines
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(Question::new)
        .collect();

    if questions.is_empty() {
        return Err(QuizError::MalformedQuestionFile {
            path: source_path.to_path_buf(),
            reason: "no questions after the header".into(),
        });
    }

    Ok(QuestionSet::new(title, questions))
}

/// A warning from question set validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// Zero-based position of the offending question.
    pub position: usize,
    /// Warning message.
    pub message: String,
}

/// Check a question set for issues that do not prevent a run.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen = std::collections::HashSet::new();
    for (position, question) in set.iter().enumerate() {
        if !seen.insert(question.text()) {
            warnings.push(ValidationWarning {
                position,
                message: format!("duplicate question: {question}"),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<QuestionSet, QuizError> {
        parse_questions_str(content, &PathBuf::from("questions.txt"))
    }

    fn texts(set: &QuestionSet) -> Vec<&str> {
        set.iter().map(Question::text).collect()
    }

    #[test]
    fn parse_quiz_scenario() {
        let set = parse("Quiz\n---\nQ1?\nQ2?\n").unwrap();
        assert_eq!(set.title, "Quiz");
        assert_eq!(texts(&set), vec!["Q1?", "Q2?"]);
    }

    #[test]
    fn keeps_file_order() {
        let content = "Title\n=====\nthird?\nfirst?\nsecond?";
        let set = parse(content).unwrap();
        assert_eq!(texts(&set), vec!["third?", "first?", "second?"]);
    }

    #[test]
    fn separator_is_not_checked() {
        let set = parse("Title\nnot a separator at all\nQ?").unwrap();
        assert_eq!(texts(&set), vec!["Q?"]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let set = parse("Title\n---\nQ1?\n\n   \nQ2?\n\n\n").unwrap();
        assert_eq!(texts(&set), vec!["Q1?", "Q2?"]);
    }

    #[test]
    fn crlf_line_endings() {
        let set = parse("Title\r\n---\r\nQ1?\r\nQ2?  \r\n").unwrap();
        assert_eq!(set.title, "Title");
        assert_eq!(texts(&set), vec!["Q1?", "Q2?"]);
    }

    #[test]
    fn fewer_than_two_lines_is_malformed() {
        for content in ["", "Only a title", "Only a title\n"] {
            let err = parse(content).unwrap_err();
            assert!(
                matches!(err, QuizError::MalformedQuestionFile { .. }),
                "{content:?}: {err}"
            );
        }
    }

    #[test]
    fn header_only_is_malformed() {
        let err = parse("Title\n---\n\n").unwrap_err();
        assert!(matches!(err, QuizError::MalformedQuestionFile { .. }));
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn missing_file_is_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = load_questions(&path).unwrap_err();
        assert!(matches!(err, QuizError::FileAccess { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.txt");
        std::fs::write(&path, "Health\n------\nDo you sleep well?\nDo you exercise?\n").unwrap();

        let set = load_questions(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.questions()[1].text(), "Do you exercise?");
    }

    #[test]
    fn validate_duplicates() {
        let set = parse("T\n-\nSame?\nOther?\nSame?").unwrap();
        let warnings = validate_question_set(&set);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].position, 2);
        assert!(warnings[0].message.contains("duplicate"));
    }
}
