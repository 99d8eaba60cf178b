//! Terminal rendering with comfy-table.

use comfy_table::{Cell, Table as TextTable};

use studydesk_core::grid::{BlankSet, Coord, Expected, GradeResult, Table};
use studydesk_core::leaderboard::Leaderboard;

/// Label for the n-th blank (1-based), shown in the table and the prompts.
pub fn blank_label(index: usize) -> String {
    format!("__ ({})", index + 1)
}

/// The quiz grid as the player sees it.
pub fn quiz_table(display: &Table, blanks: &BlankSet) -> TextTable {
    let mut out = TextTable::new();
    out.set_header(display.header().iter().map(Cell::new));

    for (row, cells) in display.rows().iter().enumerate().skip(1) {
        out.add_row(cells.iter().enumerate().map(|(col, text)| {
            match blanks.iter().position(|c| *c == Coord::new(row, col)) {
                Some(i) => Cell::new(blank_label(i)),
                None => Cell::new(text),
            }
        }));
    }
    out
}

/// The original grid with each blank marked right or wrong.
pub fn graded_table(original: &Table, result: &GradeResult) -> TextTable {
    let mut out = TextTable::new();
    out.set_header(original.header().iter().map(Cell::new));

    for (row, cells) in original.rows().iter().enumerate().skip(1) {
        out.add_row(cells.iter().enumerate().map(|(col, text)| {
            match result.outcome(Coord::new(row, col)) {
                Some(o) if o.correct => {
                    Cell::new(format!("{} ok", o.submitted.as_deref().unwrap_or("").trim()))
                }
                Some(o) => {
                    let expected = match &o.expected {
                        Expected::AnyBoolean => "T/F".to_string(),
                        Expected::Literal(v) => v.clone(),
                    };
                    let given = o.submitted.as_deref().map(str::trim).unwrap_or("-");
                    Cell::new(format!("{given} wrong ({expected})"))
                }
                None => Cell::new(text),
            }
        }));
    }
    out
}

/// One leaderboard as a table.
pub fn leaderboard_table(board: &Leaderboard) -> TextTable {
    let mut out = TextTable::new();
    out.set_header(vec!["#", "Player", "Score", "Time"]);
    for (i, r) in board.entries.iter().enumerate() {
        out.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&r.player),
            Cell::new(r.score),
            Cell::new(&r.time),
        ]);
    }
    out
}
