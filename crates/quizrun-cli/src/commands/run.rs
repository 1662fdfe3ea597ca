//! Default mode: run the questionnaire, save the result, show history.

use std::io;

use anyhow::Result;

use quizrun_core::config::QuizConfig;
use quizrun_core::parser::{load_questions, validate_question_set};
use quizrun_core::prompt::ConsolePrompter;
use quizrun_core::session;
use quizrun_core::store::ResultStore;

use super::{load_history, REPLACED_NOTICE};
use crate::render;

pub fn execute(config: &QuizConfig) -> Result<()> {
    let set = load_questions(&config.questions_path)?;
    for w in validate_question_set(&set) {
        tracing::warn!("question {}: {}", w.position + 1, w.message);
    }

    // Loaded up front so a corrupt store is reported before any questions.
    let store = ResultStore::from_config(config);
    let previous = load_history(&store)?.stats();

    println!("{}", set.title);
    println!();

    let stdin = io::stdin();
    let mut prompter = ConsolePrompter::new(stdin.lock(), io::stdout());
    let result = session::run(&set, &mut prompter, &config.score_on)?;
    println!();

    render::print_result(&result, &previous);

    let saved = store.save(result)?;
    if saved.status.is_recovered() {
        println!("{REPLACED_NOTICE}");
    }
    println!();
    println!("{}", render::history_table(&saved.history));

    Ok(())
}
