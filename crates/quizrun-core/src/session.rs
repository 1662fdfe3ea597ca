//! Questionnaire sessions.
//!
//! A [`Questionnaire`] tracks one answer slot per question. [`run`] drives a
//! whole session against an [`AnswerSource`] and returns the scored result.

use crate::error::QuizError;
use crate::model::{Answer, QuestionSet, QuizResult};
use crate::traits::{AnswerSource, Scorer};

/// Answer state for a question set.
#[derive(Debug, Clone)]
pub struct Questionnaire<'a> {
    set: &'a QuestionSet,
    answers: Vec<Option<Answer>>,
}

impl<'a> Questionnaire<'a> {
    pub fn new(set: &'a QuestionSet) -> Self {
        Self {
            set,
            answers: vec![None; set.len()],
        }
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Whether every question has been answered.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(Option::is_some)
    }

    /// The recorded answer for `position`, if any.
    pub fn answer_at(&self, position: usize) -> Option<Answer> {
        self.answers.get(position).copied().flatten()
    }

    /// Record the answer for `position`. Each question can be answered once.
    pub fn answer(&mut self, position: usize, answer: Answer) -> Result<(), QuizError> {
        let len = self.answers.len();
        let slot = self
            .answers
            .get_mut(position)
            .ok_or(QuizError::NoSuchQuestion { index: position, len })?;
        if slot.is_some() {
            return Err(QuizError::AlreadyAnswered(position));
        }
        *slot = Some(answer);
        Ok(())
    }

    /// Score a completed questionnaire.
    pub fn score(&self, scorer: &dyn Scorer) -> Result<QuizResult, QuizError> {
        if !self.is_complete() {
            return Err(QuizError::Incomplete {
                answered: self.answered(),
                total: self.len(),
            });
        }

        let points = self
            .set
            .iter()
            .zip(&self.answers)
            .filter(|(question, answer)| {
                answer.is_some_and(|answer| scorer.awards_point(question, answer))
            })
            .count();

        Ok(QuizResult::new(points as u32, self.len() as u32))
    }
}

/// Ask every question in order and score the answers.
pub fn run(
    set: &QuestionSet,
    source: &mut dyn AnswerSource,
    scorer: &dyn Scorer,
) -> Result<QuizResult, QuizError> {
    let mut questionnaire = Questionnaire::new(set);

    for (position, question) in set.iter().enumerate() {
        let answer = source.ask(position, question)?;
        tracing::debug!("question {position} answered {answer}");
        questionnaire.answer(position, answer)?;
    }

    let result = questionnaire.score(scorer)?;
    tracing::info!(
        score = result.score,
        total = result.total,
        "questionnaire completed"
    );
    Ok(result)
}
