pub mod history;
pub mod reset;
pub mod run;

use anyhow::Result;

use quizrun_core::store::{ResultHistory, ResultStore};

/// Shown when the store had to be reset because its content was corrupt.
pub const CORRUPTION_NOTICE: &str = "Result data was corrupted and had to be deleted/reset";

/// Shown when the store went corrupt while the questionnaire was running, so
/// the new result replaced whatever was there.
pub const REPLACED_NOTICE: &str = "Data was corrupted and had to be deleted and replaced";

/// Load the stored history, telling the user if it had to be reset.
fn load_history(store: &ResultStore) -> Result<ResultHistory> {
    let loaded = store.load()?;
    if loaded.status.is_recovered() {
        println!("{CORRUPTION_NOTICE}");
        println!();
    }
    Ok(loaded.history)
}
