//! Error types for the quiz and review engines.
//!
//! These are raised on in-memory data. File-level failures are reported by
//! the storage adapters with `anyhow` context around them.

use thiserror::Error;

/// A table failed structural validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The table has no rows at all.
    #[error("table is empty")]
    Empty,

    /// The header row has no columns.
    #[error("header row has no columns")]
    EmptyHeader,

    /// A data row does not have the header's width.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Invalid blanking policy parameters.
#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    /// Probability outside `[0, 1]` or NaN.
    #[error("blank probability must be within 0.0..=1.0, got {0}")]
    InvalidProbability(f64),
}

/// Illegal quiz session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The requested transition is not allowed from the current state.
    #[error("cannot {action} a session that is {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    /// The player name was blank.
    #[error("player name cannot be empty")]
    EmptyPlayerName,
}

/// Illegal flashcard review operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// The card set has no cards to review.
    #[error("card set '{0}' has no cards")]
    EmptySet(String),

    /// An answer was given after the last card.
    #[error("review is already complete")]
    AlreadyComplete,

    /// `finish` was called before every card was answered.
    #[error("review is not complete: {answered}/{total} cards answered")]
    Incomplete { answered: usize, total: usize },
}
