//! Board model and conflict rules for the N-Queens puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Queen`: A single queen at a (row, column) square.
//! - `Solution`: A complete placement, one column index per row.
//! - `Board`: An N×N board holding freely placed queens, as entered by a player.
//! - `Conflict`: Why a queen may not stand on a square.
//!
//! It also holds the two conflict predicates: `is_safe` for the solver's
//! row-by-row partial placements, and `check_placement` / `is_valid` for
//! boards where queens may sit anywhere.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// A queen standing on a square of the board. Both coordinates are 0-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Queen {
    pub row: usize,
    pub col: usize,
}

impl Queen {
    pub fn new(row: usize, col: usize) -> Self {
        Queen { row, col }
    }

    /// Returns `true` if the two queens share a diagonal.
    pub fn shares_diagonal(&self, other: &Queen) -> bool {
        self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

/// The reason a queen cannot be placed on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Conflict {
    /// Another queen already occupies the column.
    Column,
    /// Another queen already occupies the row.
    Row,
    /// Another queen attacks the square along a diagonal.
    Diagonal,
}

impl Conflict {
    /// Returns the user-facing message describing this conflict.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_solver::engine::Conflict;
    /// assert!(Conflict::Column.message().contains("Column"));
    /// assert!(Conflict::Diagonal.message().contains("diagonal"));
    /// ```
    pub fn message(&self) -> &'static str {
        match self {
            Conflict::Column => "Column is already occupied by another queen.",
            Conflict::Row => "Row is already occupied by another queen.",
            Conflict::Diagonal => "This diagonal is attacked by another queen.",
        }
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Checks whether a queen may be placed at (`row`, `col`) given a partial placement.
///
/// `state[r]` is the column of the queen already placed in row `r`, so `row` is
/// expected to equal `state.len()`. Rows never clash by construction; only
/// columns and diagonals are checked.
///
/// # Arguments
/// * `state`: Columns of the queens placed in rows `0..state.len()`.
/// * `row`: The row of the candidate square.
/// * `col`: The column of the candidate square.
///
/// # Returns
/// `true` if no placed queen attacks (`row`, `col`), `false` otherwise.
///
/// # Examples
/// ```
/// use nqueens_solver::engine::is_safe;
/// assert!(is_safe(&[1, 3], 2, 0));
/// assert!(!is_safe(&[1, 3], 2, 1)); // column 1 is taken
/// assert!(!is_safe(&[1, 3], 2, 2)); // diagonal with (1, 3)
/// ```
pub fn is_safe(state: &[usize], row: usize, col: usize) -> bool {
    state.iter().enumerate().all(|(placed_row, &placed_col)| {
        placed_col != col && row.abs_diff(placed_row) != col.abs_diff(placed_col)
    })
}

/// Checks a queen at (`row`, `col`) against every queen already on a free-form board.
///
/// A queen standing on (`row`, `col`) itself is skipped, so an already placed
/// queen can be re-checked in place. Queens are visited in order and the first
/// clash found is reported, testing column, then row, then diagonal for each.
///
/// # Returns
/// * `Ok(())` if no other queen attacks the square.
/// * `Err(Conflict)` naming the first clash found.
pub fn check_placement(queens: &[Queen], row: usize, col: usize) -> Result<(), Conflict> {
    let candidate = Queen::new(row, col);
    for queen in queens.iter().filter(|q| **q != candidate) {
        if queen.col == col {
            return Err(Conflict::Column);
        }
        if queen.row == row {
            return Err(Conflict::Row);
        }
        if queen.shares_diagonal(&candidate) {
            return Err(Conflict::Diagonal);
        }
    }
    Ok(())
}

/// Validates a human-placed queen and reports a reason suitable for display.
///
/// This is `check_placement` flattened into a `(valid, reason)` pair; the reason
/// is empty when the placement is valid.
///
/// # Examples
/// ```
/// use nqueens_solver::engine::{is_valid, Queen};
/// let queens = [Queen::new(0, 1), Queen::new(1, 3)];
/// let (ok, reason) = is_valid(&queens, 2, 1);
/// assert!(!ok);
/// assert!(reason.contains("Column"));
/// assert_eq!(is_valid(&queens, 2, 0), (true, String::new()));
/// ```
pub fn is_valid(queens: &[Queen], row: usize, col: usize) -> (bool, String) {
    match check_placement(queens, row, col) {
        Ok(()) => (true, String::new()),
        Err(conflict) => (false, conflict.message().to_string()),
    }
}

/// A complete, conflict-free placement of N queens.
///
/// `columns()[r]` is the column of the queen in row `r`. Solutions are only built
/// by the solver, which validates every prefix on insertion.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Solution {
    columns: Vec<usize>,
}

impl Solution {
    pub(crate) fn from_columns(columns: Vec<usize>) -> Self {
        Solution { columns }
    }

    /// Returns the column of the queen in each row.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Returns the board size N this solution covers.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column chosen for row 0, or `None` for the empty (N = 0) solution.
    pub fn first_column(&self) -> Option<usize> {
        self.columns.first().copied()
    }

    /// Iterates over the solution's queens in row order.
    pub fn queens(&self) -> impl Iterator<Item = Queen> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(row, &col)| Queen::new(row, col))
    }

    /// Builds a `Board` holding this solution's queens.
    pub fn to_board(&self) -> Board {
        Board::from_queens(self.size(), self.queens().collect())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_board())
    }
}

/// What happened when a square of a `Board` was toggled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The square held a queen and it was removed.
    Removed,
    /// A queen was placed. `conflict` is `Some` when it is attacked by another queen;
    /// the queen stays on the board either way.
    Placed { conflict: Option<Conflict> },
    /// The board already holds N queens, so nothing was placed.
    BoardFull,
    /// The square lies outside the board.
    OutOfBounds,
}

/// An N×N board holding queens placed in any order, possibly attacking each other.
///
/// This is the player's board: unlike a `Solution`, it may be partially filled
/// or contain conflicts.
///
/// # Examples
/// ```
/// use nqueens_solver::engine::{Board, ToggleOutcome};
/// let mut board = Board::new_empty(4);
/// assert_eq!(board.toggle(0, 1), ToggleOutcome::Placed { conflict: None });
/// assert_eq!(board.toggle(0, 1), ToggleOutcome::Removed);
/// assert!(board.queens().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    queens: Vec<Queen>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    pub fn new_empty(size: usize) -> Self {
        Board {
            size,
            queens: Vec::new(),
        }
    }

    /// Creates a board with one queen per row at a random column, using the given seed.
    ///
    /// The same seed always produces the same board. Queens may attack each other.
    ///
    /// # Arguments
    /// * `size`: The board size N.
    /// * `seed`: A `u64` value used to seed the random number generator.
    pub fn new_random_with_seed(size: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let queens = (0..size)
            .map(|row| Queen::new(row, rng.gen_range(0..size)))
            .collect();
        Board { size, queens }
    }

    /// Creates a board from a list of queens. Queens outside the board are dropped,
    /// as are repeated squares.
    pub fn from_queens(size: usize, queens: Vec<Queen>) -> Self {
        let mut board = Board::new_empty(size);
        for queen in queens {
            if queen.row < size && queen.col < size && !board.has_queen(queen.row, queen.col) {
                board.queens.push(queen);
            }
        }
        board
    }

    /// Returns the board size N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the queens in the order they were placed.
    pub fn queens(&self) -> &[Queen] {
        &self.queens
    }

    /// Returns `true` if a queen stands on (`row`, `col`).
    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        self.queens.contains(&Queen::new(row, col))
    }

    /// Checks (`row`, `col`) against the queens on this board. See `check_placement`.
    pub fn check(&self, row: usize, col: usize) -> Result<(), Conflict> {
        check_placement(&self.queens, row, col)
    }

    /// Removes the queen on (`row`, `col`) if there is one, otherwise places a queen there.
    ///
    /// A new queen is placed even when it is attacked; the returned outcome reports
    /// the conflict so the caller can flag it. Nothing is placed once the board holds
    /// N queens.
    pub fn toggle(&mut self, row: usize, col: usize) -> ToggleOutcome {
        if row >= self.size || col >= self.size {
            return ToggleOutcome::OutOfBounds;
        }
        if let Some(idx) = self.queens.iter().position(|q| *q == Queen::new(row, col)) {
            self.queens.remove(idx);
            return ToggleOutcome::Removed;
        }
        if self.queens.len() >= self.size {
            return ToggleOutcome::BoardFull;
        }
        let conflict = self.check(row, col).err();
        self.queens.push(Queen::new(row, col));
        ToggleOutcome::Placed { conflict }
    }

    /// Removes every queen from the board.
    pub fn reset(&mut self) {
        self.queens.clear();
    }

    /// Returns every queen that is attacked by at least one other queen.
    pub fn conflicting_queens(&self) -> Vec<Queen> {
        self.queens
            .iter()
            .filter(|q| self.check(q.row, q.col).is_err())
            .copied()
            .collect()
    }

    /// Checks whether the board is solved: exactly N queens, none attacking another.
    pub fn is_solved(&self) -> bool {
        self.queens.len() == self.size && self.conflicting_queens().is_empty()
    }

    /// Summarizes progress toward a solution in one line.
    ///
    /// # Examples
    /// ```
    /// use nqueens_solver::engine::{Board, Queen};
    /// let board = Board::from_queens(4, vec![Queen::new(0, 0), Queen::new(1, 1)]);
    /// assert_eq!(board.status(), "Not solved: 2 of 4 queens placed, 2 under attack.");
    /// ```
    pub fn status(&self) -> String {
        if self.is_solved() {
            return "The board is solved.".to_string();
        }
        format!(
            "Not solved: {} of {} queens placed, {} under attack.",
            self.queens.len(),
            self.size,
            self.conflicting_queens().len()
        )
    }

    /// Renders the board as text, optionally highlighting one square.
    ///
    /// The output has a header of column numbers and a row number on each line.
    /// Queens are drawn as `Q`, empty squares as `.`. A highlighted square is wrapped
    /// in ANSI inverse-video escape codes for terminal output.
    pub fn to_string_with_highlight(&self, pos: Option<(usize, usize)>) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for c_idx in 0..self.size {
            output.push_str(&format!("{:<3}", c_idx));
        }
        output.push('\n');

        for r_idx in 0..self.size {
            output.push_str(&format!("{:<3}", r_idx));
            for c_idx in 0..self.size {
                let symbol = if self.has_queen(r_idx, c_idx) { 'Q' } else { '.' };
                if pos == Some((r_idx, c_idx)) {
                    output.push_str(&format!("\x1b[7m{}\x1b[m  ", symbol));
                } else {
                    output.push_str(&format!("{}  ", symbol));
                }
            }
            if r_idx + 1 < self.size {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_queens() -> Vec<Queen> {
        vec![Queen::new(0, 1), Queen::new(1, 3)]
    }

    #[test]
    fn test_is_safe_empty_state() {
        for col in 0..8 {
            assert!(is_safe(&[], 0, col));
        }
    }

    #[test]
    fn test_is_safe_column_and_diagonal() {
        let state = [1, 3];
        assert!(!is_safe(&state, 2, 1), "column clash with row 0");
        assert!(!is_safe(&state, 2, 3), "column clash with row 1");
        assert!(!is_safe(&state, 2, 2), "diagonal clash with (1, 3)");
        assert!(!is_safe(&state, 2, 4), "diagonal clash with (1, 3)");
        assert!(is_safe(&state, 2, 0));
    }

    #[test]
    fn test_is_safe_far_diagonal() {
        // (0, 0) attacks (3, 3) across two empty rows.
        assert!(!is_safe(&[0, 2, 4], 3, 3));
    }

    #[test]
    fn test_check_placement_column() {
        assert_eq!(check_placement(&sample_queens(), 2, 1), Err(Conflict::Column));
    }

    #[test]
    fn test_check_placement_row() {
        assert_eq!(check_placement(&sample_queens(), 0, 3), Err(Conflict::Row));
    }

    #[test]
    fn test_check_placement_diagonal() {
        assert_eq!(check_placement(&sample_queens(), 2, 2), Err(Conflict::Diagonal));
        assert_eq!(check_placement(&sample_queens(), 3, 3), Err(Conflict::Column));
        assert!(check_placement(&sample_queens(), 2, 0).is_ok());
    }

    #[test]
    fn test_check_placement_skips_self() {
        let queens = sample_queens();
        assert_eq!(check_placement(&queens, 0, 1), Ok(()));
        assert_eq!(check_placement(&queens, 1, 3), Ok(()));
    }

    #[test]
    fn test_check_placement_reports_first_queen_in_order() {
        // (1, 0) shares a row with the second queen but a column with the first.
        let queens = vec![Queen::new(3, 0), Queen::new(1, 2)];
        assert_eq!(check_placement(&queens, 1, 0), Err(Conflict::Column));
    }

    #[test]
    fn test_is_valid_reasons() {
        let queens = sample_queens();
        let (ok, reason) = is_valid(&queens, 2, 1);
        assert!(!ok);
        assert!(reason.contains("Column"));

        let (ok, reason) = is_valid(&queens, 3, 3);
        assert!(!ok);
        assert!(reason.contains("Column"));

        let (ok, reason) = is_valid(&queens, 0, 3);
        assert!(!ok);
        assert!(reason.contains("Row"));

        let (ok, reason) = is_valid(&queens, 2, 2);
        assert!(!ok);
        assert!(reason.contains("diagonal"));

        assert_eq!(is_valid(&queens, 2, 0), (true, String::new()));
    }

    #[test]
    fn test_solution_accessors() {
        let solution = Solution::from_columns(vec![1, 3, 0, 2]);
        assert_eq!(solution.size(), 4);
        assert_eq!(solution.first_column(), Some(1));
        let queens: Vec<Queen> = solution.queens().collect();
        assert_eq!(queens[2], Queen::new(2, 0));
        assert!(solution.to_board().is_solved());
        assert_eq!(Solution::from_columns(vec![]).first_column(), None);
    }

    #[test]
    fn test_board_toggle_and_full() {
        let mut board = Board::new_empty(4);
        assert_eq!(board.toggle(0, 1), ToggleOutcome::Placed { conflict: None });
        assert_eq!(
            board.toggle(1, 2),
            ToggleOutcome::Placed {
                conflict: Some(Conflict::Diagonal)
            }
        );
        assert_eq!(board.toggle(2, 2), ToggleOutcome::Placed { conflict: Some(Conflict::Column) });
        assert_eq!(board.toggle(3, 3), ToggleOutcome::Placed { conflict: Some(Conflict::Diagonal) });
        assert_eq!(board.toggle(3, 0), ToggleOutcome::BoardFull);
        assert_eq!(board.toggle(4, 0), ToggleOutcome::OutOfBounds);
        assert_eq!(board.toggle(1, 2), ToggleOutcome::Removed);
        assert_eq!(board.queens().len(), 3);
        board.reset();
        assert!(board.queens().is_empty());
    }

    #[test]
    fn test_board_is_solved() {
        let solved = Board::from_queens(
            4,
            vec![Queen::new(0, 1), Queen::new(1, 3), Queen::new(2, 0), Queen::new(3, 2)],
        );
        assert!(solved.is_solved());
        assert!(solved.conflicting_queens().is_empty());

        let unsolved = Board::from_queens(
            4,
            vec![Queen::new(0, 0), Queen::new(1, 3), Queen::new(2, 1), Queen::new(3, 2)],
        );
        assert!(!unsolved.is_solved());
        assert!(!unsolved.conflicting_queens().is_empty());

        let partial = Board::from_queens(4, vec![Queen::new(0, 1), Queen::new(1, 3)]);
        assert!(!partial.is_solved());
    }

    #[test]
    fn test_board_status() {
        let mut board = Board::new_empty(4);
        assert_eq!(board.status(), "Not solved: 0 of 4 queens placed, 0 under attack.");

        board.toggle(0, 1);
        assert_eq!(board.status(), "Not solved: 1 of 4 queens placed, 0 under attack.");

        // (1, 2) sits on a diagonal with (0, 1); both count as attacked.
        board.toggle(1, 2);
        assert_eq!(board.status(), "Not solved: 2 of 4 queens placed, 2 under attack.");

        board.toggle(1, 2);
        for (r, c) in [(1, 3), (2, 0), (3, 2)] {
            board.toggle(r, c);
        }
        assert_eq!(board.status(), "The board is solved.");
    }

    #[test]
    fn test_board_from_queens_drops_invalid_entries() {
        let board = Board::from_queens(
            4,
            vec![Queen::new(0, 1), Queen::new(0, 1), Queen::new(4, 0), Queen::new(0, 7)],
        );
        assert_eq!(board.queens(), &[Queen::new(0, 1)]);
    }

    #[test]
    fn test_new_random_with_seed_determinism() {
        let a = Board::new_random_with_seed(8, 42);
        let b = Board::new_random_with_seed(8, 42);
        assert_eq!(a, b);
        assert_eq!(a.queens().len(), 8);
        for (row, queen) in a.queens().iter().enumerate() {
            assert_eq!(queen.row, row);
            assert!(queen.col < 8);
        }
    }

    #[test]
    fn test_display_board_formatting() {
        let board = Board::from_queens(2, vec![Queen::new(1, 0)]);
        let expected = "   0  1  \n0  .  .  \n1  Q  .  ";
        assert_eq!(format!("{}", board), expected);
    }

    #[test]
    fn test_display_with_highlight() {
        let board = Board::from_queens(1, vec![Queen::new(0, 0)]);
        let rendered = board.to_string_with_highlight(Some((0, 0)));
        assert!(rendered.contains("\x1b[7mQ\x1b[m"));
    }
}
