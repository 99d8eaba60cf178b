//! The `studydesk leaderboard` command.

use std::path::PathBuf;

use anyhow::Result;

use studydesk_core::leaderboard::Leaderboard;
use studydesk_core::model::Difficulty;
use studydesk_store::config::load_config_from;

use crate::render::leaderboard_table;

pub fn execute(
    difficulty: Option<Difficulty>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = config.score_store();

    let levels: Vec<Difficulty> = match difficulty {
        Some(d) => vec![d],
        None => Difficulty::ALL.to_vec(),
    };
    let boards = levels
        .into_iter()
        .map(|level| Leaderboard::load(&store, level))
        .collect::<Result<Vec<_>>>()?;

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&boards)?);
        }
        "markdown" | "md" => {
            let sections: Vec<String> = boards.iter().map(Leaderboard::to_markdown).collect();
            println!("{}", sections.join("\n"));
        }
        "text" => {
            for board in &boards {
                println!("{} LEVEL", board.difficulty);
                if board.is_empty() {
                    println!("  No games played yet.\n");
                } else {
                    println!("{}\n", leaderboard_table(board));
                }
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text, json, or markdown)"),
    }

    Ok(())
}
