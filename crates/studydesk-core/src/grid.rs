//! Truth-table quiz grid engine.
//!
//! Picks which cells of a table are hidden from the player and grades the
//! answers typed into them. Both steps are pure: blank selection draws from
//! a caller-supplied [`Rng`] so a seeded generator reproduces the same quiz.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use rand::Rng;

use crate::error::{PolicyError, TableError};

/// Placeholder shown in place of a hidden cell.
///
/// When a source table already contains the marker, that cell accepts any
/// boolean literal.
pub const BLANK_MARKER: &str = "__";

/// Answers accepted for a boolean-valued cell, after normalization.
const BOOLEAN_LITERALS: [&str; 2] = ["T", "F"];

/// Row/column position of a cell. Orders row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular table of cell text. Row 0 is the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, checking that every row has the header's width.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        let header = rows.first().ok_or(TableError::Empty)?;
        let width = header.len();
        if width == 0 {
            return Err(TableError::EmptyHeader);
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(TableError::Ragged {
                row,
                expected: width,
                found: cells.len(),
            });
        }
        Ok(Self { rows })
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn get(&self, coord: Coord) -> Option<&str> {
        self.rows
            .get(coord.row)
            .and_then(|r| r.get(coord.col))
            .map(String::as_str)
    }

    /// Header text for a column, if it exists.
    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.header().get(col).map(String::as_str)
    }

    fn set(&mut self, coord: Coord, value: &str) {
        if let Some(cell) = self.rows.get_mut(coord.row).and_then(|r| r.get_mut(coord.col)) {
            *cell = value.to_string();
        }
    }
}

/// Which cells may be blanked, and how likely each one is.
#[derive(Debug, Clone, PartialEq)]
pub struct BlankPolicy {
    probability: f64,
    excluded_columns: BTreeSet<usize>,
    skip_final_row: bool,
}

impl BlankPolicy {
    /// Policy blanking each eligible cell with `probability`.
    ///
    /// The final row is excluded; see [`BlankPolicy::skip_final_row`].
    pub fn new(
        probability: f64,
        excluded_columns: impl IntoIterator<Item = usize>,
    ) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(PolicyError::InvalidProbability(probability));
        }
        Ok(Self {
            probability,
            excluded_columns: excluded_columns.into_iter().collect(),
            skip_final_row: true,
        })
    }

    /// Whether the last row of the table is kept out of blanking.
    pub fn skip_final_row(mut self, skip: bool) -> Self {
        self.skip_final_row = skip;
        self
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    pub fn excluded_columns(&self) -> &BTreeSet<usize> {
        &self.excluded_columns
    }

    /// True when `coord` may be blanked in `table`.
    pub fn is_eligible(&self, table: &Table, coord: Coord) -> bool {
        let last_row = table.row_count() - 1;
        coord.row != 0
            && coord.row < table.row_count()
            && coord.col < table.width()
            && !(self.skip_final_row && coord.row == last_row)
            && !self.excluded_columns.contains(&coord.col)
    }
}

impl Default for BlankPolicy {
    fn default() -> Self {
        Self {
            probability: 0.5,
            excluded_columns: BTreeSet::from([0, 1, 2]),
            skip_final_row: true,
        }
    }
}

/// Cells chosen for blanking.
pub type BlankSet = BTreeSet<Coord>;

/// Player answers keyed by cell.
pub type Submission = BTreeMap<Coord, String>;

/// Outcome of [`select_blanks`].
#[derive(Debug, Clone)]
pub struct Blanking {
    /// Hidden cells.
    pub blanks: BlankSet,
    /// The table as shown to the player, hidden cells replaced by [`BLANK_MARKER`].
    pub display: Table,
}

/// Choose cells to hide, each eligible cell independently.
pub fn select_blanks<R: Rng + ?Sized>(table: &Table, policy: &BlankPolicy, rng: &mut R) -> Blanking {
    let mut blanks = BlankSet::new();
    let mut display = table.clone();

    for row in 0..table.row_count() {
        for col in 0..table.width() {
            let coord = Coord::new(row, col);
            if policy.is_eligible(table, coord) && rng.random_bool(policy.probability) {
                blanks.insert(coord);
                display.set(coord, BLANK_MARKER);
            }
        }
    }

    tracing::debug!(
        blanks = blanks.len(),
        rows = table.row_count(),
        cols = table.width(),
        "selected blank cells"
    );

    Blanking { blanks, display }
}

/// Normalize an answer or expected value for comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_uppercase()
}

/// What a blanked cell accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// `T` or `F`.
    AnyBoolean,
    /// One specific value, compared after normalization.
    Literal(String),
}

impl Expected {
    /// Derive the expectation from the original cell text.
    pub fn for_cell(original: &str) -> Self {
        let value = normalize(original);
        if value == BLANK_MARKER {
            Expected::AnyBoolean
        } else {
            Expected::Literal(value)
        }
    }

    pub fn accepts(&self, answer: &str) -> bool {
        let answer = normalize(answer);
        match self {
            Expected::AnyBoolean => BOOLEAN_LITERALS.contains(&answer.as_str()),
            Expected::Literal(value) => answer == *value,
        }
    }
}

/// Grading outcome for one blanked cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellOutcome {
    pub coord: Coord,
    pub expected: Expected,
    /// The raw answer, if one was given.
    pub submitted: Option<String>,
    pub correct: bool,
}

/// Grading outcome for a whole quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    /// One entry per blanked cell, row-major.
    pub outcomes: Vec<CellOutcome>,
    /// Number of correct cells.
    pub correct: u32,
    /// Time between the quiz starting and grading.
    pub elapsed: Duration,
}

impl GradeResult {
    /// Number of graded cells.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn all_correct(&self) -> bool {
        self.outcomes.iter().all(|o| o.correct)
    }

    pub fn outcome(&self, coord: Coord) -> Option<&CellOutcome> {
        self.outcomes.iter().find(|o| o.coord == coord)
    }

    /// Attach the elapsed time.
    pub fn timed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }
}

/// Grade a submission against the original (unblanked) table.
///
/// Every blanked cell gets exactly one outcome. Missing answers are wrong;
/// answers for cells that were not blanked are ignored.
pub fn grade(table: &Table, blanks: &BlankSet, submission: &Submission) -> GradeResult {
    let outcomes: Vec<CellOutcome> = blanks
        .iter()
        .map(|&coord| {
            let expected = Expected::for_cell(table.get(coord).unwrap_or_default());
            let submitted = submission.get(&coord).cloned();
            let correct = submitted
                .as_deref()
                .is_some_and(|answer| expected.accepts(answer));
            CellOutcome {
                coord,
                expected,
                submitted,
                correct,
            }
        })
        .collect();

    let correct = outcomes.iter().filter(|o| o.correct).count() as u32;

    GradeResult {
        outcomes,
        correct,
        elapsed: Duration::ZERO,
    }
}
