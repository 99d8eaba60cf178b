//! The `studydesk play` command.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use studydesk_core::grid::{BlankSet, Submission, Table};
use studydesk_core::leaderboard::Leaderboard;
use studydesk_core::model::Difficulty;
use studydesk_core::session::{GradeTrigger, QuizSession};
use studydesk_core::timefmt::format_elapsed;
use studydesk_core::traits::{choose_table, ScoreStore};
use studydesk_store::config::load_config_from;
use studydesk_store::tables::read_table_file;
use studydesk_store::MemoryScoreStore;

use crate::input::{prompt, InputLines};
use crate::render::{blank_label, graded_table, leaderboard_table, quiz_table};

/// Typed instead of an answer to submit early.
const SUBMIT_COMMAND: &str = ":submit";

pub async fn execute(
    difficulty: Difficulty,
    player: Option<String>,
    seed: Option<u64>,
    table_path: Option<PathBuf>,
    dry_run: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let policy = config.blank_policy()?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (table_name, table) = match table_path {
        Some(path) => (path.display().to_string(), read_table_file(&path)?),
        None => {
            let catalog = config.table_catalog();
            match choose_table(&catalog, difficulty, &mut rng)? {
                Some(picked) => picked,
                None => {
                    println!(
                        "No tables available for {difficulty} level. Add .csv files to {}",
                        catalog.difficulty_dir(difficulty).display()
                    );
                    return Ok(());
                }
            }
        }
    };
    tracing::debug!(table = %table_name, "starting quiz");

    let time_limit = config.time_limits.for_difficulty(difficulty);
    let mut session = QuizSession::new(difficulty, table, time_limit);
    let blanking = session.start(&policy, &mut rng, Instant::now())?.clone();

    println!("{difficulty} LEVEL: {table_name}");
    println!("{}", quiz_table(&blanking.display, &blanking.blanks));
    println!(
        "Fill in {} blank(s) with T or F. Time limit {}. Type {SUBMIT_COMMAND} to submit early.",
        blanking.blanks.len(),
        format_elapsed(time_limit.as_secs())
    );

    let mut input = InputLines::stdin();
    let (submission, trigger) =
        collect_answers(&session, &blanking.display, &blanking.blanks, &mut input).await;

    let result = session
        .grade(&submission, trigger, Instant::now())?
        .cloned()
        .context("quiz was graded twice")?;

    println!("\n{}", graded_table(session.table(), &result));
    if result.all_correct() {
        println!("Congratulations! All answers are correct.");
    } else {
        println!("Oops! Some answers are incorrect.");
    }
    println!(
        "Score: {}/{}  Time taken: {}",
        result.correct,
        result.total(),
        format_elapsed(result.elapsed.as_secs())
    );

    let record = match player {
        Some(name) => session.finish(&name)?,
        None => loop {
            prompt("Please enter your name: ");
            let Some(name) = input.next_line().await else {
                anyhow::bail!("no player name given, score not saved");
            };
            match session.finish(&name) {
                Ok(record) => break record,
                Err(e) => println!("{e}"),
            }
        },
    };

    let store: Box<dyn ScoreStore> = if dry_run {
        Box::new(MemoryScoreStore::new())
    } else {
        Box::new(config.score_store())
    };
    store.append(difficulty, &record)?;
    if !dry_run {
        println!("Saved score for {}.", record.player);
    }

    let board = Leaderboard::load(store.as_ref(), difficulty)?;
    println!("\n{difficulty} LEADERBOARD");
    println!("{}", leaderboard_table(&board));

    Ok(())
}

/// Read one answer per blank until all are filled, the player submits, or
/// the countdown runs out.
async fn collect_answers(
    session: &QuizSession,
    display: &Table,
    blanks: &BlankSet,
    input: &mut InputLines,
) -> (Submission, GradeTrigger) {
    let mut submission = Submission::new();
    let deadline = tokio::time::sleep(session.time_limit());
    tokio::pin!(deadline);

    for (i, coord) in blanks.iter().enumerate() {
        let remaining = session
            .countdown_display(Instant::now())
            .unwrap_or_default();
        let column = display.column_name(coord.col).unwrap_or("?");
        prompt(&format!(
            "[{remaining}] {} row {}, {column}: ",
            blank_label(i),
            coord.row
        ));

        tokio::select! {
            _ = &mut deadline => {
                println!("\nTime's up!");
                return (submission, GradeTrigger::TimerExpired);
            }
            line = input.next_line() => match line {
                None => break,
                Some(line) if line.trim() == SUBMIT_COMMAND => break,
                Some(line) => {
                    submission.insert(*coord, line);
                }
            }
        }
    }

    (submission, GradeTrigger::Submitted)
}
