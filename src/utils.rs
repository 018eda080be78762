use crate::engine::{Board, Queen, Solution};
use crate::error::{BoardParseError, SolveError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Parses an array of string slices into a `Board` object.
///
/// Each string slice in the input array represents a row on the board, starting from row 0.
/// The board size N is the number of rows, and every row must have exactly N characters.
///
/// Valid characters are:
/// - 'Q' or 'q': a queen
/// - '.': an empty square
///
/// Any other character will result in an error.
///
/// # Returns
/// * `Ok(Board)` if parsing is successful. Queens are listed in row-major order.
/// * `Err(BoardParseError)` if:
///     - There are no rows.
///     - Any row's character length differs from the number of rows.
///     - An unrecognized character is encountered.
///
/// # Examples
/// ```
/// use nqueens_solver::utils::board_from_str_array;
/// use nqueens_solver::engine::Queen;
///
/// let board = board_from_str_array(&[
///     ".Q..",
///     "...Q",
///     "Q...",
///     "..Q.",
/// ]).unwrap();
/// assert_eq!(board.size(), 4);
/// assert_eq!(board.queens()[0], Queen::new(0, 1));
/// assert!(board.is_solved());
///
/// assert!(board_from_str_array(&["QX", ".."]).is_err());
/// assert!(board_from_str_array(&["Q..", ".."]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, BoardParseError> {
    let size = s.len();
    if size == 0 {
        return Err(BoardParseError::Empty);
    }

    let mut queens = Vec::new();
    // Rows are read top to bottom, so queens come out in row-major order.
    for (r, row_str) in s.iter().enumerate() {
        // Count chars, not bytes, so a stray multi-byte character is reported as such.
        let found = row_str.chars().count();
        if found != size {
            return Err(BoardParseError::RowLength {
                row: r,
                expected: size,
                found,
            });
        }

        for (c, ch) in row_str.chars().enumerate() {
            match ch {
                'Q' | 'q' => queens.push(Queen::new(r, c)),
                '.' => {} // empty square
                _ => return Err(BoardParseError::UnrecognizedChar { ch, row: r, col: c }),
            }
        }
    }
    Ok(Board::from_queens(size, queens))
}

/// Parses a whole board file. Blank lines and surrounding whitespace are ignored.
pub fn board_from_text(text: &str) -> Result<Board, BoardParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    board_from_str_array(&lines)
}

/// Converts a signed size, as a caller may supply it, into a board size.
///
/// # Examples
/// ```
/// use nqueens_solver::utils::board_size;
/// assert_eq!(board_size(8).unwrap(), 8);
/// assert!(board_size(-1).is_err());
/// ```
pub fn board_size(n: i64) -> Result<usize, SolveError> {
    usize::try_from(n).map_err(|_| SolveError::InvalidSize(n))
}

/// Picks one solution at random, reproducibly for a given seed.
///
/// Returns `None` if `solutions` is empty. The pick depends on the order of
/// `solutions`, so sort them first when the order is not already fixed.
pub fn pick_solution(solutions: &[Solution], seed: u64) -> Option<&Solution> {
    if solutions.is_empty() {
        return None;
    }
    let mut rng = SmallRng::seed_from_u64(seed); // same seed, same pick
    solutions.get(rng.gen_range(0..solutions.len()))
}
