//! # N-Queens Solver Library
//!
//! This library enumerates every placement of N non-attacking queens on an
//! N×N board, splitting the search across a worker pool to use every core.
//!
//! It is used by three binaries:
//! - `queens_solver`: Solves one board size and prints the solution count and boards.
//! - `board_checker`: Lets a player place queens by hand and explains each conflict.
//! - `dispatch_benchmark`: Times sequential against parallel solving over a range of sizes.
//!
//! ## Modules
//! - `engine`: Queens, solutions, the player's `Board`, and the conflict predicates.
//! - `solver`: Sequential depth-first backtracking search.
//! - `dispatcher`: Partitions the search by row 0's column and merges results from a worker pool.
//! - `error`: Error types for solving and board parsing.
//! - `utils`: Board text parsing, size conversion, and seeded solution picking.

pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod solver;
pub mod utils;

pub use crate::engine::{is_valid, Conflict, Queen, Solution};
pub use crate::error::SolveError;

use crate::dispatcher::Dispatcher;

/// Returns every solution for an `n`×`n` board, solving the row-0 partitions in parallel.
///
/// The order of the returned solutions is not fixed between calls; the content is.
/// No state is kept between calls.
///
/// # Examples
/// ```
/// assert_eq!(nqueens_solver::solve(8).unwrap().len(), 92);
/// assert!(nqueens_solver::solve(3).unwrap().is_empty());
/// ```
pub fn solve(n: usize) -> Result<Vec<Solution>, SolveError> {
    Dispatcher::default().solve(n)
}

/// Like `solve`, but takes a signed size and rejects negative values with
/// `SolveError::InvalidSize`.
pub fn solve_signed(n: i64) -> Result<Vec<Solution>, SolveError> {
    solve(utils::board_size(n)?)
}
