//! Flashcard review history, one pretty-printed JSON file per session.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use studydesk_core::model::ReviewRecord;
use studydesk_core::traits::ReviewHistoryStore;

use crate::{list_files, sanitize_file_component};

#[derive(Debug, Clone)]
pub struct JsonReviewHistory {
    root: PathBuf,
}

impl JsonReviewHistory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn load(&self, file: &str) -> Result<ReviewRecord> {
        let path = self.root.join(file);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read review history: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse review history: {}", path.display()))
    }
}

impl ReviewHistoryStore for JsonReviewHistory {
    fn save(&self, record: &ReviewRecord) -> Result<String> {
        std::fs::create_dir_all(&self.root)
            .with_context(|| format!("failed to create {}", self.root.display()))?;

        let name = sanitize_file_component(&record.file_name());
        let path = self.root.join(&name);
        let json = serde_json::to_string_pretty(record).context("failed to serialize review")?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write review to {}", path.display()))?;

        tracing::info!(set = %record.set_name, score = record.score, "review saved to {}", path.display());
        Ok(name)
    }

    fn list(&self, set_name: Option<&str>) -> Result<Vec<ReviewRecord>> {
        let mut records = list_files(&self.root, "json")?
            .iter()
            .map(|file| self.load(file))
            .collect::<Result<Vec<_>>>()?;

        if let Some(filter) = set_name {
            let filter = filter.trim().to_lowercase();
            records.retain(|r| r.set_name.to_lowercase() == filter);
        }
        records.sort_by_key(|r| r.timestamp);
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use studydesk_core::model::Mistake;

    fn record(set: &str, score: u32, minute: u32) -> ReviewRecord {
        ReviewRecord {
            set_name: set.into(),
            score,
            total: 2,
            mistakes: vec![Mistake {
                question: "What is 2 + 2?".into(),
                user_answer: "3".into(),
                answer: "4".into(),
            }],
            timestamp: Local.with_ymd_and_hms(2024, 3, 9, 10, minute, 0).unwrap(),
        }
    }

    #[test]
    fn save_uses_session_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonReviewHistory::new(dir.path());
        let name = history.save(&record("math", 1, 15)).unwrap();
        assert_eq!(name, "MATH_session_2024-03-09_10-15-00.json");

        let stored: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(dir.path().join(&name)).unwrap())
                .unwrap();
        assert_eq!(stored["set_name"], "math");
        assert_eq!(stored["score"], 1);
        assert_eq!(stored["mistakes"][0]["user_answer"], "3");
    }

    #[test]
    fn list_filters_and_orders() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonReviewHistory::new(dir.path());
        history.save(&record("math", 2, 30)).unwrap();
        history.save(&record("math", 1, 10)).unwrap();
        history.save(&record("capitals", 0, 20)).unwrap();

        let all = history.list(None).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].score, 1);

        let math = history.list(Some("MATH")).unwrap();
        assert_eq!(math.iter().map(|r| r.score).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let history = JsonReviewHistory::new(dir.path().join("history"));
        assert!(history.list(None).unwrap().is_empty());
    }
}
