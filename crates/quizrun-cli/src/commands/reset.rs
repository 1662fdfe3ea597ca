//! Reset mode: wipe the result store after confirmation.

use std::io;

use anyhow::Result;

use quizrun_core::config::QuizConfig;
use quizrun_core::prompt::ConsolePrompter;
use quizrun_core::store::ResultStore;
use quizrun_core::QuizError;

const RESET_PROMPT: &str = "Are you sure you want to reset/delete stored data?";

pub fn execute(config: &QuizConfig, assume_yes: bool) -> Result<()> {
    let store = ResultStore::from_config(config);

    let confirmed = assume_yes || {
        let stdin = io::stdin();
        let mut prompter = ConsolePrompter::new(stdin.lock(), io::stdout());
        match prompter.confirm(RESET_PROMPT) {
            Ok(answer) => answer.is_yes(),
            // No answer means no consent.
            Err(QuizError::InputClosed(_)) => false,
            Err(e) => return Err(e.into()),
        }
    };

    if confirmed {
        store.reset()?;
        println!("Data has been reset/deleted!");
    } else {
        println!("Data has NOT been reset/deleted!");
    }

    Ok(())
}
