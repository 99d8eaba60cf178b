//! The `studydesk review` and `studydesk history` commands.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};
use rand::rngs::StdRng;
use rand::SeedableRng;

use studydesk_core::review::{validate_card_set, CardOrder, ReviewSession};
use studydesk_core::traits::{CardSetStore, ReviewHistoryStore};
use studydesk_store::config::load_config_from;

use crate::input::{prompt, InputLines};

pub async fn execute(
    set_name: String,
    seed: Option<u64>,
    no_shuffle: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let set = config.card_sets().read(&set_name)?;

    for w in validate_card_set(&set) {
        let prefix = w
            .card
            .map(|i| format!("[card {}] ", i + 1))
            .unwrap_or_default();
        eprintln!("{prefix}WARNING: {}", w.message);
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let order = if no_shuffle || !config.shuffle_cards {
        CardOrder::AsStored
    } else {
        CardOrder::Shuffled(&mut rng)
    };
    let mut session = ReviewSession::start(set, order)?;

    println!("Reviewing '{}'", session.set_name());
    let mut input = InputLines::stdin();

    while let Some(card) = session.current() {
        let (done, total) = session.progress();
        println!("\n({}/{total}) {}", done + 1, card.question);
        prompt("> ");
        let Some(line) = input.next_line().await else {
            println!("\nReview stopped early, progress not saved.");
            return Ok(());
        };
        let verdict = session.answer(&line)?;
        println!("{verdict}");
    }

    let score = session.score();
    let record = session.finish(chrono::Local::now())?;
    println!("\nScore: {score}/{}", record.total);

    if record.mistakes.is_empty() {
        println!("No mistakes. Well done!");
    } else {
        let mut table = Table::new();
        table.set_header(vec!["Question", "Your answer", "Correct answer"]);
        for m in &record.mistakes {
            table.add_row(vec![
                Cell::new(&m.question),
                Cell::new(&m.user_answer),
                Cell::new(&m.answer),
            ]);
        }
        println!("Mistakes:\n{table}");
    }

    let saved = config.review_history().save(&record)?;
    println!("Progress saved to {saved}");

    Ok(())
}

pub fn history(set_name: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let records = config.review_history().list(set_name.as_deref())?;

    if records.is_empty() {
        println!("No review history yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Set", "Score", "Mistakes", "When"]);
    for r in &records {
        table.add_row(vec![
            Cell::new(&r.set_name),
            Cell::new(format!("{}/{}", r.score, r.total)),
            Cell::new(r.mistakes.len()),
            Cell::new(r.timestamp.format("%Y-%m-%d %H:%M:%S")),
        ]);
    }
    println!("{table}");

    Ok(())
}
