//! Configuration loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use studydesk_core::error::PolicyError;
use studydesk_core::grid::BlankPolicy;
use studydesk_core::model::Difficulty;

use crate::{CsvScoreStore, CsvTableCatalog, JsonCardSetStore, JsonReviewHistory};

/// Countdown lengths in seconds, per difficulty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeLimits {
    #[serde(default = "default_easy")]
    pub easy: u64,
    #[serde(default = "default_normal")]
    pub normal: u64,
    #[serde(default = "default_hard")]
    pub hard: u64,
}

fn default_easy() -> u64 {
    Difficulty::Easy.default_time_limit().as_secs()
}
fn default_normal() -> u64 {
    Difficulty::Normal.default_time_limit().as_secs()
}
fn default_hard() -> u64 {
    Difficulty::Hard.default_time_limit().as_secs()
}

impl Default for TimeLimits {
    fn default() -> Self {
        Self {
            easy: default_easy(),
            normal: default_normal(),
            hard: default_hard(),
        }
    }
}

impl TimeLimits {
    pub fn for_difficulty(&self, difficulty: Difficulty) -> Duration {
        let secs = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        };
        Duration::from_secs(secs)
    }
}

/// Top-level studydesk configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudydeskConfig {
    /// Root that relative directories resolve against.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Quiz tables, one subfolder per difficulty.
    #[serde(default = "default_tables_dir")]
    pub tables_dir: PathBuf,
    /// Quiz score history, one subfolder per difficulty.
    #[serde(default = "default_scores_dir")]
    pub scores_dir: PathBuf,
    /// Flashcard sets.
    #[serde(default = "default_sets_dir")]
    pub sets_dir: PathBuf,
    /// Flashcard review history.
    #[serde(default = "default_review_history_dir")]
    pub review_history_dir: PathBuf,
    /// Chance that an eligible cell is blanked.
    #[serde(default = "default_blank_probability")]
    pub blank_probability: f64,
    /// Columns never blanked (the input variables).
    #[serde(default = "default_excluded_columns")]
    pub excluded_columns: Vec<usize>,
    /// Keep the last table row out of blanking.
    #[serde(default = "default_true")]
    pub skip_final_row: bool,
    #[serde(default)]
    pub time_limits: TimeLimits,
    /// Shuffle flashcards before a review.
    #[serde(default = "default_true")]
    pub shuffle_cards: bool,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_tables_dir() -> PathBuf {
    PathBuf::from("tables")
}
fn default_scores_dir() -> PathBuf {
    PathBuf::from("games_history")
}
fn default_sets_dir() -> PathBuf {
    PathBuf::from("sets")
}
fn default_review_history_dir() -> PathBuf {
    PathBuf::from("history")
}
fn default_blank_probability() -> f64 {
    0.5
}
fn default_excluded_columns() -> Vec<usize> {
    vec![0, 1, 2]
}
fn default_true() -> bool {
    true
}

impl Default for StudydeskConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            tables_dir: default_tables_dir(),
            scores_dir: default_scores_dir(),
            sets_dir: default_sets_dir(),
            review_history_dir: default_review_history_dir(),
            blank_probability: default_blank_probability(),
            excluded_columns: default_excluded_columns(),
            skip_final_row: true,
            time_limits: TimeLimits::default(),
            shuffle_cards: true,
        }
    }
}

impl StudydeskConfig {
    /// Resolve a configured directory against `data_dir`.
    pub fn resolve(&self, dir: &Path) -> PathBuf {
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.data_dir.join(dir)
        }
    }

    /// Blanking policy built from the configured values.
    pub fn blank_policy(&self) -> Result<BlankPolicy, PolicyError> {
        Ok(
            BlankPolicy::new(self.blank_probability, self.excluded_columns.iter().copied())?
                .skip_final_row(self.skip_final_row),
        )
    }

    pub fn table_catalog(&self) -> CsvTableCatalog {
        CsvTableCatalog::new(self.resolve(&self.tables_dir))
    }

    pub fn score_store(&self) -> CsvScoreStore {
        CsvScoreStore::new(self.resolve(&self.scores_dir))
    }

    pub fn card_sets(&self) -> JsonCardSetStore {
        JsonCardSetStore::new(self.resolve(&self.sets_dir))
    }

    pub fn review_history(&self) -> JsonReviewHistory {
        JsonReviewHistory::new(self.resolve(&self.review_history_dir))
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are not scanned again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!(
            "{}{}{}",
            &result[..start],
            value,
            &result[start + end + 1..]
        );
        from = start + value.len();
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `studydesk.toml` in the current directory
/// 2. `~/.config/studydesk/config.toml`
///
/// Environment variable override: `STUDYDESK_DATA_DIR`.
pub fn load_config() -> Result<StudydeskConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<StudydeskConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("studydesk.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<StudydeskConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => StudydeskConfig::default(),
    };

    if let Ok(dir) = std::env::var("STUDYDESK_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    config.data_dir = resolve_path(&config.data_dir);
    config.tables_dir = resolve_path(&config.tables_dir);
    config.scores_dir = resolve_path(&config.scores_dir);
    config.sets_dir = resolve_path(&config.sets_dir);
    config.review_history_dir = resolve_path(&config.review_history_dir);

    config
        .blank_policy()
        .context("invalid blanking settings in config")?;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studydesk"))
}
