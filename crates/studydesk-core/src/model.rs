//! Core data model types for studydesk.
//!
//! These are the records that cross the boundary between the engines and
//! storage: difficulty keys, score records, flashcard sets, and review
//! history.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Difficulty level of a truth-table quiz.
///
/// Selects both the pool of tables and the leaderboard a score lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// All difficulties in display order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Lowercase key used for folder names and config entries.
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Countdown length when no override is configured.
    pub fn default_time_limit(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(60),
            Difficulty::Normal => Duration::from_secs(90),
            Difficulty::Hard => Duration::from_secs(120),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "EASY"),
            Difficulty::Normal => write!(f, "NORMAL"),
            Difficulty::Hard => write!(f, "HARD"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" | "medium" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One completed quiz, as stored in score history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Player name as entered.
    #[serde(rename = "Player")]
    pub player: String,
    /// Number of correctly filled cells.
    #[serde(rename = "Score")]
    pub score: u32,
    /// Elapsed time, `MM:SS`.
    #[serde(rename = "Time")]
    pub time: String,
}

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A named collection of flashcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSet {
    /// Set identifier (also the file stem on disk).
    pub name: String,
    pub cards: Vec<Card>,
}

/// An answer that did not match during review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mistake {
    pub question: String,
    pub user_answer: String,
    /// The expected answer.
    pub answer: String,
}

/// A completed flashcard review session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub set_name: String,
    pub score: u32,
    /// Number of cards reviewed.
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub mistakes: Vec<Mistake>,
    pub timestamp: DateTime<Local>,
}

impl ReviewRecord {
    /// File name the record is stored under.
    ///
    /// e.g. `LOGIC_session_2024-05-01_14-03-22.json`
    pub fn file_name(&self) -> String {
        format!(
            "{}_session_{}.json",
            self.set_name.to_uppercase(),
            self.timestamp.format("%Y-%m-%d_%H-%M-%S")
        )
    }
}
