//! Sequential depth-first backtracking search over row-by-row placements.
use crate::engine::{is_safe, Solution};

/// Enumerates every solution for an `n`×`n` board.
///
/// `n == 0` yields exactly one solution, the empty placement. Sizes 2 and 3
/// yield none.
///
/// # Examples
/// ```
/// use nqueens_solver::solver::solve_sequential;
/// assert_eq!(solve_sequential(4).len(), 2);
/// assert!(solve_sequential(3).is_empty());
/// ```
pub fn solve_sequential(n: usize) -> Vec<Solution> {
    solve_from(n, &[])
}

/// Enumerates every solution for an `n`×`n` board that extends `prefix`.
///
/// `prefix[r]` fixes the column of the queen in row `r`. Solutions are produced
/// in lexicographic order of their columns, since each row tries columns in
/// increasing order.
///
/// # Arguments
/// * `n`: The board size.
/// * `prefix`: Columns already fixed for rows `0..prefix.len()`.
///
/// # Returns
/// All completions of `prefix`. The result is empty, not an error, when the
/// prefix is longer than `n`, holds a column outside `0..n`, or already
/// contains two attacking queens.
pub fn solve_from(n: usize, prefix: &[usize]) -> Vec<Solution> {
    let mut solutions = Vec::new();
    if !is_consistent_prefix(n, prefix) {
        return solutions;
    }

    let mut state = Vec::with_capacity(n);
    state.extend_from_slice(prefix);
    backtrack(n, &mut state, &mut solutions);
    solutions
}

fn is_consistent_prefix(n: usize, prefix: &[usize]) -> bool {
    prefix.len() <= n
        && prefix
            .iter()
            .enumerate()
            .all(|(row, &col)| col < n && is_safe(&prefix[..row], row, col))
}

// `state` holds the same columns on return as on entry.
fn backtrack(n: usize, state: &mut Vec<usize>, solutions: &mut Vec<Solution>) {
    let row = state.len();
    if row == n {
        solutions.push(Solution::from_columns(state.clone()));
        return;
    }

    for col in 0..n {
        if is_safe(state, row, col) {
            state.push(col);
            backtrack(n, state, solutions);
            state.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_all_valid(n: usize, solutions: &[Solution]) {
        for sol in solutions {
            assert_eq!(sol.size(), n);
            let distinct: HashSet<usize> = sol.columns().iter().copied().collect();
            assert_eq!(distinct.len(), n, "columns must be distinct in {:?}", sol);
            for (r1, &c1) in sol.columns().iter().enumerate() {
                for (r2, &c2) in sol.columns().iter().enumerate().skip(r1 + 1) {
                    assert_ne!(r1.abs_diff(r2), c1.abs_diff(c2), "diagonal clash in {:?}", sol);
                }
            }
        }
    }

    #[test]
    fn test_solve_sequential_zero() {
        let solutions = solve_sequential(0);
        assert_eq!(solutions.len(), 1);
        assert!(solutions[0].columns().is_empty());
    }

    #[test]
    fn test_solve_sequential_known_counts() {
        let expected = [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
        for (n, count) in expected {
            let solutions = solve_sequential(n);
            assert_eq!(solutions.len(), count, "wrong count for n = {}", n);
            assert_all_valid(n, &solutions);
        }
    }

    #[test]
    fn test_solve_sequential_four_exact() {
        let columns: Vec<Vec<usize>> = solve_sequential(4)
            .into_iter()
            .map(|s| s.columns().to_vec())
            .collect();
        assert_eq!(columns, vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_solve_sequential_is_ordered() {
        let solutions = solve_sequential(6);
        let mut sorted = solutions.clone();
        sorted.sort();
        assert_eq!(solutions, sorted);
    }

    #[test]
    fn test_solve_from_fixed_first_column() {
        let from_one = solve_from(4, &[1]);
        assert_eq!(from_one.len(), 1);
        assert_eq!(from_one[0].columns(), &[1, 3, 0, 2]);
        assert!(solve_from(4, &[0]).is_empty());
    }

    #[test]
    fn test_solve_from_complete_prefix() {
        let solutions = solve_from(4, &[2, 0, 3, 1]);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].columns(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_solve_from_inconsistent_prefix() {
        assert!(solve_from(4, &[0, 1]).is_empty(), "diagonal clash in prefix");
        assert!(solve_from(4, &[1, 1]).is_empty(), "column clash in prefix");
        assert!(solve_from(4, &[4]).is_empty(), "column out of range");
        assert!(solve_from(2, &[0, 0, 0]).is_empty(), "prefix longer than board");
    }

    #[test]
    fn test_backtrack_restores_state() {
        let mut state = vec![1];
        let mut solutions = Vec::new();
        backtrack(6, &mut state, &mut solutions);
        assert_eq!(state, vec![1], "state must be restored after the subtree");
        assert_eq!(solutions.len(), 1);

        // A seed with no completion still leaves the buffer untouched.
        let mut state = vec![0, 2];
        let mut solutions = Vec::new();
        backtrack(4, &mut state, &mut solutions);
        assert_eq!(state, vec![0, 2]);
        assert!(solutions.is_empty());

        let mut state = vec![2, 0, 3, 1];
        let mut solutions = Vec::new();
        backtrack(4, &mut state, &mut solutions);
        assert_eq!(state, vec![2, 0, 3, 1]);
        assert_eq!(solutions.len(), 1);
    }

    #[test]
    fn test_partitions_cover_full_search() {
        for n in 1..=8 {
            let mut union: Vec<Solution> = (0..n).flat_map(|c| solve_from(n, &[c])).collect();
            let mut full = solve_sequential(n);
            union.sort();
            full.sort();
            assert_eq!(union, full, "partition union differs for n = {}", n);
        }
    }
}
