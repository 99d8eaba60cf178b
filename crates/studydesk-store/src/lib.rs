//! studydesk-store: File-system storage adapters and configuration.
//!
//! Implements the storage traits from `studydesk-core` over a data
//! directory: CSV tables and score history, JSON card sets and review
//! history.

pub mod config;
pub mod history;
pub mod memory;
pub mod scores;
pub mod sets;
pub mod tables;

use std::path::Path;

use anyhow::{Context, Result};

pub use config::{load_config, load_config_from, StudydeskConfig};
pub use history::JsonReviewHistory;
pub use memory::MemoryScoreStore;
pub use scores::CsvScoreStore;
pub use sets::JsonCardSetStore;
pub use tables::CsvTableCatalog;

/// File names in `dir` with the given extension, sorted.
///
/// A missing directory is treated as empty.
pub(crate) fn list_files(dir: &Path, extension: &str) -> Result<Vec<String>> {
    if !dir.is_dir() {
        tracing::debug!("{} does not exist, nothing to list", dir.display());
        return Ok(Vec::new());
    }

    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().is_some_and(|ext| ext == extension) {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                names.push(name.to_string());
            }
        } else {
            tracing::warn!("skipping {}", path.display());
        }
    }
    names.sort();
    Ok(names)
}

/// Replace characters that cannot appear in a file name.
pub(crate) fn sanitize_file_component(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
