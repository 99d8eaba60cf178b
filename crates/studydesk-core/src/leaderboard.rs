//! Leaderboard ranking.
//!
//! Scores rank highest first; ties go to the faster time.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Difficulty, ScoreRecord};
use crate::timefmt::parse_elapsed;
use crate::traits::ScoreStore;

/// Leaderboard order: score descending, then time ascending.
///
/// Times compare as durations. Unparsable times rank after every valid one.
pub fn compare_records(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| match (parse_elapsed(&a.time), parse_elapsed(&b.time)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.time.cmp(&b.time),
        })
}

/// Sort records into leaderboard order. Stable for full ties.
pub fn rank(records: &mut [ScoreRecord]) {
    records.sort_by(compare_records);
}

/// Ranked scores for one difficulty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    pub difficulty: Difficulty,
    pub entries: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new(difficulty: Difficulty, mut entries: Vec<ScoreRecord>) -> Self {
        rank(&mut entries);
        Self {
            difficulty,
            entries,
        }
    }

    /// Gather every entry a store holds for `difficulty`.
    pub fn load(store: &dyn ScoreStore, difficulty: Difficulty) -> Result<Self> {
        let mut records = Vec::new();
        for entry in store.list(difficulty)? {
            let rows = store
                .read(difficulty, &entry)
                .with_context(|| format!("failed to read score history '{entry}'"))?;
            records.extend(rows);
        }
        tracing::debug!(%difficulty, records = records.len(), "loaded leaderboard");
        Ok(Self::new(difficulty, records))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first `n` entries.
    pub fn top(&self, n: usize) -> &[ScoreRecord] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Render as a markdown section.
    pub fn to_markdown(&self) -> String {
        let mut md = format!("### {} LEVEL\n\n", self.difficulty);

        if self.entries.is_empty() {
            md.push_str("_No games played yet._\n");
            return md;
        }

        md.push_str("| # | Player | Score | Time |\n");
        md.push_str("|---|--------|-------|------|\n");
        for (i, r) in self.entries.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                i + 1,
                r.player,
                r.score,
                r.time
            ));
        }
        md
    }
}
