//! History mode: show stored results without running the questionnaire.

use anyhow::Result;

use quizrun_core::config::QuizConfig;
use quizrun_core::store::ResultStore;

use super::load_history;
use crate::render;

pub fn execute(config: &QuizConfig) -> Result<()> {
    let store = ResultStore::from_config(config);
    let history = load_history(&store)?;

    if history.is_empty() {
        println!("No results stored yet.");
        return Ok(());
    }

    let stats = history.stats();
    println!("{}", render::history_table(&history));
    println!(
        "{} result(s), average {}",
        stats.count,
        render::percent(stats.average)
    );

    Ok(())
}
