//! Storage capability traits.
//!
//! The engines never touch the file system. Score history, tables, card
//! sets, and review history are reached through these traits, implemented
//! by the `studydesk-store` crate.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::grid::Table;
use crate::model::{CardSet, Difficulty, ReviewRecord, ScoreRecord};

// ---------------------------------------------------------------------------
// Quiz storage
// ---------------------------------------------------------------------------

/// Append-only score history, partitioned by difficulty.
pub trait ScoreStore {
    /// Entries (e.g. history files) recorded for a difficulty.
    ///
    /// A difficulty with no history yields an empty list.
    fn list(&self, difficulty: Difficulty) -> anyhow::Result<Vec<String>>;

    /// All records in one entry.
    fn read(&self, difficulty: Difficulty, entry: &str) -> anyhow::Result<Vec<ScoreRecord>>;

    /// Append a record, returning the entry it was written to.
    fn append(&self, difficulty: Difficulty, record: &ScoreRecord) -> anyhow::Result<String>;
}

/// Source of quiz tables, partitioned by difficulty.
pub trait TableCatalog {
    /// Available table names. Empty when none exist.
    fn list(&self, difficulty: Difficulty) -> anyhow::Result<Vec<String>>;

    /// Load and validate one table.
    fn read(&self, difficulty: Difficulty, entry: &str) -> anyhow::Result<Table>;
}

/// Pick a random table for a difficulty.
///
/// Returns `Ok(None)` when the catalog has no tables for it.
pub fn choose_table<R: Rng + ?Sized>(
    catalog: &dyn TableCatalog,
    difficulty: Difficulty,
    rng: &mut R,
) -> anyhow::Result<Option<(String, Table)>> {
    let entries = catalog.list(difficulty)?;
    let Some(entry) = entries.choose(rng) else {
        return Ok(None);
    };
    tracing::debug!(%difficulty, table = %entry, "picked table");
    let table = catalog.read(difficulty, entry)?;
    Ok(Some((entry.clone(), table)))
}

// ---------------------------------------------------------------------------
// Flashcard storage
// ---------------------------------------------------------------------------

/// Whole-set read/write storage for flashcard sets.
pub trait CardSetStore {
    /// Names of stored sets, sorted.
    fn list(&self) -> anyhow::Result<Vec<String>>;

    /// Whether a set is stored under `name`, as the store would name it.
    fn exists(&self, name: &str) -> anyhow::Result<bool>;

    fn read(&self, name: &str) -> anyhow::Result<CardSet>;

    /// Create or overwrite a set.
    fn write(&self, set: &CardSet) -> anyhow::Result<()>;

    /// Remove a set. Returns `false` if it did not exist.
    fn delete(&self, name: &str) -> anyhow::Result<bool>;
}

/// One record per completed review.
pub trait ReviewHistoryStore {
    /// Persist a record, returning where it was stored.
    fn save(&self, record: &ReviewRecord) -> anyhow::Result<String>;

    /// Stored records, oldest first, optionally for one set only.
    fn list(&self, set_name: Option<&str>) -> anyhow::Result<Vec<ReviewRecord>>;
}
