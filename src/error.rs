//! Error types for solving and board parsing.
use thiserror::Error;

/// Failures surfaced at the `solve` boundary.
///
/// The conflict predicates never fail; everything that can go wrong while
/// enumerating solutions ends up here.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested board size was negative.
    #[error("invalid board size {0}: size must be zero or greater")]
    InvalidSize(i64),
    /// A subproblem did not complete. The whole dispatch is failed so that a
    /// missing partition is never mistaken for an unsolvable board.
    #[error("subproblem with row 0 at column {start_col} failed: {reason}")]
    TaskFailure { start_col: usize, reason: String },
    /// The worker pool could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

/// Errors produced when reading a board from its text form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("Board is empty")]
    Empty,
    #[error("Row {row} has {found} characters (expected {expected})")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedChar { ch: char, row: usize, col: usize },
}
