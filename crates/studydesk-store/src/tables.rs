//! CSV truth-table catalog.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use studydesk_core::grid::Table;
use studydesk_core::model::Difficulty;
use studydesk_core::traits::TableCatalog;

use crate::list_files;

/// Tables stored as `<root>/<difficulty>/*.csv`.
#[derive(Debug, Clone)]
pub struct CsvTableCatalog {
    root: PathBuf,
}

impl CsvTableCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn difficulty_dir(&self, difficulty: Difficulty) -> PathBuf {
        self.root.join(difficulty.key())
    }
}

impl TableCatalog for CsvTableCatalog {
    fn list(&self, difficulty: Difficulty) -> Result<Vec<String>> {
        list_files(&self.difficulty_dir(difficulty), "csv")
    }

    fn read(&self, difficulty: Difficulty, entry: &str) -> Result<Table> {
        read_table_file(&self.difficulty_dir(difficulty).join(entry))
    }
}

/// Load a table from a CSV file. Row 0 is the header.
pub fn read_table_file(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read table: {}", path.display()))?;
    parse_table_str(&content)
        .with_context(|| format!("invalid table: {}", path.display()))
}

/// Parse CSV text into a validated table.
pub fn parse_table_str(content: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let rows = reader
        .records()
        .map(|record| {
            record
                .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                .context("malformed CSV")
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Table::from_rows(rows)?)
}
