//! JSON-file result store with corruption recovery.
//!
//! The store document looks like:
//!
//! ```json
//! {
//!   "results": [
//!     { "id": "…", "taken_at": "2025-01-01T00:00:00Z", "score": 2, "total": 2 }
//!   ]
//! }
//! ```
//!
//! Content that fails the schema check is treated as corruption: the file is
//! rewritten to an empty history and the load succeeds with
//! [`LoadStatus::Recovered`]. I/O failures are never swallowed; they surface
//! as [`QuizError::Persistence`].

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::QuizConfig;
use crate::error::QuizError;
use crate::model::QuizResult;
use crate::statistics::HistoryStats;

/// The ordered sequence of stored results, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResultHistory {
    results: Vec<QuizResult>,
}

impl ResultHistory {
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The most recently saved result.
    pub fn last(&self) -> Option<&QuizResult> {
        self.results.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuizResult> {
        self.results.iter()
    }

    pub fn stats(&self) -> HistoryStats {
        HistoryStats::compute(&self.results)
    }

    /// Parse and schema-check a stored document.
    fn parse(bytes: &[u8]) -> Result<Self, String> {
        let value: serde_json::Value =
            serde_json::from_slice(bytes).map_err(|e| format!("invalid JSON: {e}"))?;

        // serde would also accept arrays in place of these objects.
        let records = value
            .get("results")
            .and_then(serde_json::Value::as_array)
            .ok_or("expected an object with a \"results\" list")?;
        if let Some(index) = records.iter().position(|r| !r.is_object()) {
            return Err(format!("record {index} is not an object"));
        }

        let history: ResultHistory =
            serde_json::from_value(value).map_err(|e| format!("invalid document: {e}"))?;

        if let Some((index, record)) = history
            .results
            .iter()
            .enumerate()
            .find(|(_, r)| !r.is_well_formed())
        {
            return Err(format!(
                "record {index} has score {} of total {}",
                record.score, record.total
            ));
        }

        Ok(history)
    }
}

impl<'a> IntoIterator for &'a ResultHistory {
    type Item = &'a QuizResult;
    type IntoIter = std::slice::Iter<'a, QuizResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// How the on-disk document looked when it was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No store file yet; treated as an empty history.
    Missing,
    /// The document parsed and passed the schema check.
    Intact,
    /// The document was corrupt and has been reset. Holds the reason.
    Recovered(String),
}

impl LoadStatus {
    pub fn is_recovered(&self) -> bool {
        matches!(self, LoadStatus::Recovered(_))
    }
}

/// A loaded history together with how it was obtained.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub history: ResultHistory,
    pub status: LoadStatus,
}

/// Owns the result store file and every read and write of it.
#[derive(Debug, Clone)]
pub struct ResultStore {
    path: PathBuf,
}

impl ResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &QuizConfig) -> Self {
        Self::new(&config.results_path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored history.
    ///
    /// A missing file yields an empty history. A corrupt file is reset to the
    /// empty document before returning.
    pub fn load(&self) -> Result<Loaded, QuizError> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no result store at {}, starting empty", self.path.display());
                return Ok(Loaded {
                    history: ResultHistory::default(),
                    status: LoadStatus::Missing,
                });
            }
            Err(e) => return Err(QuizError::persistence(&self.path, e)),
        };

        match ResultHistory::parse(&bytes) {
            Ok(history) => Ok(Loaded {
                history,
                status: LoadStatus::Intact,
            }),
            Err(reason) => {
                tracing::warn!(
                    "result store {} is corrupt ({reason}), resetting",
                    self.path.display()
                );
                let history = ResultHistory::default();
                self.write(&history)?;
                Ok(Loaded {
                    history,
                    status: LoadStatus::Recovered(reason),
                })
            }
        }
    }

    /// Append `result` to the stored history and write it back.
    ///
    /// Returns the history as written, with the status of the document it
    /// replaced. A `Recovered` status means earlier results were discarded.
    pub fn save(&self, result: QuizResult) -> Result<Loaded, QuizError> {
        if !result.is_well_formed() {
            return Err(QuizError::InvalidResult {
                score: result.score,
                total: result.total,
            });
        }

        let Loaded {
            mut history,
            status,
        } = self.load()?;
        history.results.push(result);
        self.write(&history)?;
        tracing::info!(
            "saved result to {} ({} stored)",
            self.path.display(),
            history.len()
        );
        Ok(Loaded { history, status })
    }

    /// Discard all stored results.
    pub fn reset(&self) -> Result<(), QuizError> {
        self.write(&ResultHistory::default())?;
        tracing::info!("reset result store {}", self.path.display());
        Ok(())
    }

    /// Write the whole document to a sibling temp file, then rename it over
    /// the store so a crash never leaves a half-written document.
    fn write(&self, history: &ResultHistory) -> Result<(), QuizError> {
        let fail = |e: io::Error| QuizError::persistence(&self.path, e);

        let json = serde_json::to_string_pretty(history).map_err(|e| fail(e.into()))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(fail)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(fail)?;
        tmp.write_all(json.as_bytes()).map_err(fail)?;
        tmp.write_all(b"\n").map_err(fail)?;
        tmp.as_file().sync_all().map_err(fail)?;
        tmp.persist(&self.path).map_err(|e| fail(e.error))?;
        Ok(())
    }
}
