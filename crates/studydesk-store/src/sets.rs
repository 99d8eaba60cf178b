//! JSON flashcard sets: `<root>/<name>.json`, an array of
//! `{"question", "answer"}` objects. Sets are read and written whole.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use studydesk_core::model::{Card, CardSet};
use studydesk_core::traits::CardSetStore;

use crate::{list_files, sanitize_file_component};

#[derive(Debug, Clone)]
pub struct JsonCardSetStore {
    root: PathBuf,
}

impl JsonCardSetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let stem = sanitize_file_component(name);
        anyhow::ensure!(!stem.is_empty(), "set name cannot be empty");
        Ok(self.root.join(format!("{stem}.json")))
    }
}

impl CardSetStore for JsonCardSetStore {
    fn list(&self) -> Result<Vec<String>> {
        Ok(list_files(&self.root, "json")?
            .into_iter()
            .filter_map(|f| f.strip_suffix(".json").map(str::to_string))
            .collect())
    }

    fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.path_for(name)?.is_file())
    }

    fn read(&self, name: &str) -> Result<CardSet> {
        let path = self.path_for(name)?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read card set: {}", path.display()))?;
        let cards: Vec<Card> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse card set: {}", path.display()))?;
        Ok(CardSet {
            name: name.trim().to_string(),
            cards,
        })
    }

    fn write(&self, set: &CardSet) -> Result<()> {
        let path = self.path_for(&set.name)?;
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;
        let json = serde_json::to_string_pretty(&set.cards).context("failed to serialize card set")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write card set to {}", path.display()))?;
        tracing::info!(set = %set.name, cards = set.cards.len(), "card set saved");
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path)
            .with_context(|| format!("failed to delete {}", path.display()))?;
        tracing::info!(set = %name, "card set deleted");
        Ok(true)
    }
}
