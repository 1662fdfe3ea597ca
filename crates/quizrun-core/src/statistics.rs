//! Aggregate statistics over stored results.

use serde::{Deserialize, Serialize};

use crate::model::{round2, QuizResult};

/// Summary of a result history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryStats {
    /// Number of stored results.
    pub count: usize,
    /// Mean percentage score, rounded to two decimals. Zero when empty.
    pub average: f64,
}

impl HistoryStats {
    pub fn compute(results: &[QuizResult]) -> Self {
        if results.is_empty() {
            return Self {
                count: 0,
                average: 0.0,
            };
        }

        let sum: f64 = results.iter().map(QuizResult::percentage).sum();
        Self {
            count: results.len(),
            average: round2(sum / results.len() as f64),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
