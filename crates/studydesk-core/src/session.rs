//! Quiz session state machine.
//!
//! A session moves `Idle -> Active -> Graded -> Finished`. Grading has two
//! triggers, manual submission and countdown expiry; the first one to arrive
//! grades the session and any later trigger is a no-op.

use std::time::{Duration, Instant};

use rand::Rng;

use crate::error::SessionError;
use crate::grid::{grade, select_blanks, BlankPolicy, Blanking, GradeResult, Submission, Table};
use crate::model::{Difficulty, ScoreRecord};
use crate::timefmt::format_elapsed;

/// What caused a session to be graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTrigger {
    /// The player submitted their answers.
    Submitted,
    /// The countdown reached zero.
    TimerExpired,
}

/// Coarse session state, for display and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Graded,
    Finished,
}

impl SessionState {
    fn name(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Active => "active",
            SessionState::Graded => "graded",
            SessionState::Finished => "finished",
        }
    }
}

#[derive(Debug)]
enum Phase {
    Idle,
    Active {
        blanking: Blanking,
        started: Instant,
    },
    Graded {
        blanking: Blanking,
        result: GradeResult,
        trigger: GradeTrigger,
    },
    Finished {
        blanking: Blanking,
        result: GradeResult,
        record: ScoreRecord,
    },
}

impl Phase {
    fn state(&self) -> SessionState {
        match self {
            Phase::Idle => SessionState::Idle,
            Phase::Active { .. } => SessionState::Active,
            Phase::Graded { .. } => SessionState::Graded,
            Phase::Finished { .. } => SessionState::Finished,
        }
    }
}

/// One play-through of a truth-table quiz.
#[derive(Debug)]
pub struct QuizSession {
    difficulty: Difficulty,
    table: Table,
    time_limit: Duration,
    phase: Phase,
}

impl QuizSession {
    pub fn new(difficulty: Difficulty, table: Table, time_limit: Duration) -> Self {
        Self {
            difficulty,
            table,
            time_limit,
            phase: Phase::Idle,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The original table with every answer in place.
    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn state(&self) -> SessionState {
        self.phase.state()
    }

    /// Blank cells and start the countdown.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        policy: &BlankPolicy,
        rng: &mut R,
        now: Instant,
    ) -> Result<&Blanking, SessionError> {
        self.expect_state("start", SessionState::Idle)?;
        let blanking = select_blanks(&self.table, policy, rng);
        tracing::debug!(
            difficulty = %self.difficulty,
            blanks = blanking.blanks.len(),
            "quiz session started"
        );
        self.phase = Phase::Active {
            blanking,
            started: now,
        };
        self.blanking().ok_or(SessionError::InvalidTransition {
            action: "start",
            state: SessionState::Idle.name(),
        })
    }

    /// Blank selection, once the session has started.
    pub fn blanking(&self) -> Option<&Blanking> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Active { blanking, .. }
            | Phase::Graded { blanking, .. }
            | Phase::Finished { blanking, .. } => Some(blanking),
        }
    }

    /// Countdown time left. `None` unless the session is active.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match &self.phase {
            Phase::Active { started, .. } => Some(
                self.time_limit
                    .saturating_sub(now.saturating_duration_since(*started)),
            ),
            _ => None,
        }
    }

    /// Countdown text for the one-second tick, e.g. `01:29`.
    pub fn countdown_display(&self, now: Instant) -> Option<String> {
        self.remaining(now).map(|r| format_elapsed(r.as_secs()))
    }

    /// True once an active session has run out of time.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_some_and(|r| r.is_zero())
    }

    /// Grade the session.
    ///
    /// Returns `Ok(None)` when the session was already graded: the first
    /// trigger wins and later ones have no effect.
    pub fn grade(
        &mut self,
        submission: &Submission,
        trigger: GradeTrigger,
        now: Instant,
    ) -> Result<Option<&GradeResult>, SessionError> {
        let (blanking, started) = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Active { blanking, started } => (blanking, started),
            Phase::Idle => {
                return Err(SessionError::InvalidTransition {
                    action: "grade",
                    state: SessionState::Idle.name(),
                })
            }
            done => {
                tracing::debug!(?trigger, "session already graded, ignoring trigger");
                self.phase = done;
                return Ok(None);
            }
        };

        let elapsed = Duration::from_secs(now.saturating_duration_since(started).as_secs());
        let result = grade(&self.table, &blanking.blanks, submission).timed(elapsed);
        tracing::info!(
            correct = result.correct,
            total = result.total(),
            elapsed = %format_elapsed(elapsed.as_secs()),
            ?trigger,
            "quiz graded"
        );

        self.phase = Phase::Graded {
            blanking,
            result,
            trigger,
        };
        Ok(self.result())
    }

    /// Grade result, once graded.
    pub fn result(&self) -> Option<&GradeResult> {
        match &self.phase {
            Phase::Graded { result, .. } | Phase::Finished { result, .. } => Some(result),
            _ => None,
        }
    }

    /// The trigger that graded the session.
    pub fn trigger(&self) -> Option<GradeTrigger> {
        match &self.phase {
            Phase::Graded { trigger, .. } => Some(*trigger),
            _ => None,
        }
    }

    /// Close the session under a player name, producing its score record.
    ///
    /// A blank name is rejected and the session stays graded.
    pub fn finish(&mut self, player: &str) -> Result<ScoreRecord, SessionError> {
        self.expect_state("finish", SessionState::Graded)?;
        let player = player.trim();
        if player.is_empty() {
            return Err(SessionError::EmptyPlayerName);
        }

        let (blanking, result) = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Graded {
                blanking, result, ..
            } => (blanking, result),
            other => {
                let state = other.state().name();
                self.phase = other;
                return Err(SessionError::InvalidTransition {
                    action: "finish",
                    state,
                });
            }
        };

        let record = ScoreRecord {
            player: player.to_string(),
            score: result.correct,
            time: format_elapsed(result.elapsed.as_secs()),
        };
        self.phase = Phase::Finished {
            blanking,
            result,
            record: record.clone(),
        };
        Ok(record)
    }

    /// The score record, once finished.
    pub fn record(&self) -> Option<&ScoreRecord> {
        match &self.phase {
            Phase::Finished { record, .. } => Some(record),
            _ => None,
        }
    }

    fn expect_state(&self, action: &'static str, wanted: SessionState) -> Result<(), SessionError> {
        let state = self.state();
        if state == wanted {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action,
                state: state.name(),
            })
        }
    }
}
