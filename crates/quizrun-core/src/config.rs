//! Run configuration.
//!
//! Paths are passed explicitly to the loader and the store; nothing here is
//! global.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::traits::ScoreOn;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "quizrun.toml";

/// Top-level quizrun configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizConfig {
    /// Question file to run.
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,
    /// JSON document holding the result history.
    #[serde(default = "default_results_path")]
    pub results_path: PathBuf,
    /// Which answer earns a point.
    #[serde(default)]
    pub score_on: ScoreOn,
}

fn default_questions_path() -> PathBuf {
    PathBuf::from("data/questions.txt")
}

fn default_results_path() -> PathBuf {
    PathBuf::from("results.json")
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            results_path: default_results_path(),
            score_on: ScoreOn::default(),
        }
    }
}

/// Load config from an explicit path (which must exist), or search the
/// default location.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => Some(PathBuf::from(CONFIG_FILE_NAME)).filter(|p| p.exists()),
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(QuizConfig::default()),
    }
}
