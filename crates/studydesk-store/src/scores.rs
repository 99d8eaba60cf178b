//! CSV score history.
//!
//! Layout: `<root>/<difficulty>/<DIFFICULTY>_<player>_<MM-SS>.csv`, each file
//! with a `Player,Score,Time` header followed by appended rows.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use studydesk_core::model::{Difficulty, ScoreRecord};
use studydesk_core::traits::ScoreStore;

use crate::{list_files, sanitize_file_component};

/// Score history stored as CSV files under a root directory.
#[derive(Debug, Clone)]
pub struct CsvScoreStore {
    root: PathBuf,
}

impl CsvScoreStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn difficulty_dir(&self, difficulty: Difficulty) -> PathBuf {
        self.root.join(difficulty.key())
    }

    /// File a record is appended to.
    pub fn file_name(difficulty: Difficulty, record: &ScoreRecord) -> String {
        format!(
            "{}_{}_{}.csv",
            difficulty,
            sanitize_file_component(&record.player),
            record.time.replace(':', "-")
        )
    }
}

impl ScoreStore for CsvScoreStore {
    fn list(&self, difficulty: Difficulty) -> Result<Vec<String>> {
        list_files(&self.difficulty_dir(difficulty), "csv")
    }

    fn read(&self, difficulty: Difficulty, entry: &str) -> Result<Vec<ScoreRecord>> {
        let path = self.difficulty_dir(difficulty).join(entry);
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)
            .with_context(|| format!("failed to open score history: {}", path.display()))?;

        reader
            .deserialize::<ScoreRecord>()
            .map(|row| {
                row.with_context(|| format!("malformed score history: {}", path.display()))
            })
            .collect()
    }

    fn append(&self, difficulty: Difficulty, record: &ScoreRecord) -> Result<String> {
        let dir = self.difficulty_dir(difficulty);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;

        let name = Self::file_name(difficulty, record);
        let path = dir.join(&name);
        let is_new = !path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open {}", path.display()))?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(is_new)
            .from_writer(file);
        writer
            .serialize(record)
            .with_context(|| format!("failed to write score to {}", path.display()))?;
        writer.flush()?;

        tracing::info!(
            player = %record.player,
            score = record.score,
            time = %record.time,
            "game history saved to {}",
            path.display()
        );
        Ok(name)
    }
}
