//! Console rendering of results and history.

use comfy_table::{Cell, CellAlignment, Table};

use quizrun_core::model::QuizResult;
use quizrun_core::statistics::HistoryStats;
use quizrun_core::store::ResultHistory;

pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Print the new score next to the stats of the results before it.
pub fn print_result(result: &QuizResult, previous: &HistoryStats) {
    println!("Your result: {}", percent(result.percentage()));
    if previous.is_empty() {
        println!("You are the first to take this questionnaire");
        println!("There are no previous results");
    } else {
        println!(
            "The average result so far (not including yours) is: {}",
            percent(previous.average)
        );
        println!("Total previous results: {}", previous.count);
    }
}

pub fn history_table(history: &ResultHistory) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Taken at", "Score", "Total", "Percent"]);

    for (i, result) in history.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(result.taken_at.format("%Y-%m-%d %H:%M:%S UTC")),
            Cell::new(result.score).set_alignment(CellAlignment::Right),
            Cell::new(result.total).set_alignment(CellAlignment::Right),
            Cell::new(percent(result.percentage())).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}
