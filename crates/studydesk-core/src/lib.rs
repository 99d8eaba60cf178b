//! studydesk-core: Quiz engine, sessions, and review logic.
//!
//! This crate holds everything that decides: which truth-table cells get
//! blanked, how answers are graded, how a quiz session moves between states,
//! how leaderboards are ranked, and how flashcard reviews are scored.
//! Storage lives behind the traits in [`traits`].

pub mod error;
pub mod grid;
pub mod leaderboard;
pub mod model;
pub mod review;
pub mod session;
pub mod timefmt;
pub mod traits;
