//! In-memory score store.

use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::Result;

use studydesk_core::model::{Difficulty, ScoreRecord};
use studydesk_core::traits::ScoreStore;

/// A score store that keeps everything in memory.
///
/// Entries are keyed by player name, one per difficulty. Useful for tests
/// and for dry runs that should not touch the score history on disk.
#[derive(Debug, Default)]
pub struct MemoryScoreStore {
    entries: Mutex<BTreeMap<(Difficulty, String), Vec<ScoreRecord>>>,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total records across all difficulties.
    pub fn len(&self) -> usize {
        self.lock().values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<(Difficulty, String), Vec<ScoreRecord>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl ScoreStore for MemoryScoreStore {
    fn list(&self, difficulty: Difficulty) -> Result<Vec<String>> {
        Ok(self
            .lock()
            .keys()
            .filter(|(d, _)| *d == difficulty)
            .map(|(_, entry)| entry.clone())
            .collect())
    }

    fn read(&self, difficulty: Difficulty, entry: &str) -> Result<Vec<ScoreRecord>> {
        self.lock()
            .get(&(difficulty, entry.to_string()))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no score entry '{entry}' for {difficulty}"))
    }

    fn append(&self, difficulty: Difficulty, record: &ScoreRecord) -> Result<String> {
        let entry = record.player.clone();
        self.lock()
            .entry((difficulty, entry.clone()))
            .or_default()
            .push(record.clone());
        Ok(entry)
    }
}
