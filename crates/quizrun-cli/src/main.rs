//! quizrun CLI — asks a Y/N questionnaire, stores the score, shows history.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use quizrun_core::config::{load_config_from, QuizConfig};
use quizrun_core::traits::ScoreOn;

mod commands;
mod render;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Offline Y/N questionnaire runner")]
struct Cli {
    /// Delete all stored results instead of running the questionnaire
    #[arg(long, conflicts_with = "history")]
    reset: bool,

    /// Skip the reset confirmation prompt
    #[arg(long, short = 'y', requires = "reset")]
    yes: bool,

    /// Show stored results without running the questionnaire
    #[arg(long)]
    history: bool,

    /// Config file path (default: ./quizrun.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Question file to run
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Result store (JSON)
    #[arg(long)]
    results: Option<PathBuf>,

    /// Which answer earns a point: yes or no
    #[arg(long)]
    score_on: Option<ScoreOn>,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<QuizConfig> {
        let mut config = load_config_from(self.config.as_deref())?;
        if let Some(questions) = &self.questions {
            config.questions_path = questions.clone();
        }
        if let Some(results) = &self.results {
            config.results_path = results.clone();
        }
        if let Some(score_on) = self.score_on {
            config.score_on = score_on;
        }
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = cli.resolve_config().and_then(|config| {
        tracing::debug!(?config, "resolved configuration");
        if cli.reset {
            commands::reset::execute(&config, cli.yes)
        } else if cli.history {
            commands::history::execute(&config)
        } else {
            commands::run::execute(&config)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
