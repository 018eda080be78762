//! Parallel dispatch of the search across a worker pool.
//!
//! The search space for board size N is split into N disjoint subproblems, one
//! per column of row 0. Each subproblem runs an independent sequential search
//! on a rayon pool built for the call, and the partial solution lists are
//! merged as they complete. A subproblem that panics fails the whole dispatch.
use crate::engine::Solution;
use crate::error::SolveError;
use crate::solver::{solve_from, solve_sequential};
use log::{debug, error, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use std::any::Any;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

/// Configuration for a parallel dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Number of worker threads in the pool. Never zero.
    pub workers: usize,
}

impl Default for DispatchConfig {
    /// Sizes the pool to the available parallelism of the machine.
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

impl DispatchConfig {
    /// Sets the number of worker threads. Zero is raised to one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Sets the number of worker threads from an `Option`, keeping the current
    /// value on `None`.
    pub fn with_workers_option(self, workers: Option<usize>) -> Self {
        match workers {
            Some(w) => self.with_workers(w),
            None => self,
        }
    }
}

/// One independent partition of the search: board size `n` with row 0 fixed at `start_col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subproblem {
    pub n: usize,
    pub start_col: usize,
}

impl Subproblem {
    pub fn new(n: usize, start_col: usize) -> Self {
        Subproblem { n, start_col }
    }

    /// Runs the sequential search seeded with row 0 at `start_col`.
    pub fn run(&self) -> Vec<Solution> {
        solve_from(self.n, &[self.start_col])
    }
}

/// Number of solutions one subproblem contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionSummary {
    pub start_col: usize,
    pub solutions: usize,
}

/// The merged outcome of a dispatch.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// Every solution found, in no particular order.
    pub solutions: Vec<Solution>,
    /// One entry per subproblem, sorted by `start_col`.
    pub partitions: Vec<PartitionSummary>,
}

impl DispatchReport {
    fn from_partition(subproblem: Subproblem, solutions: Vec<Solution>) -> Self {
        let summary = PartitionSummary {
            start_col: subproblem.start_col,
            solutions: solutions.len(),
        };
        DispatchReport {
            solutions,
            partitions: vec![summary],
        }
    }

    fn merge(mut self, other: DispatchReport) -> Self {
        self.solutions.extend(other.solutions);
        self.partitions.extend(other.partitions);
        self
    }
}

/// Splits a full search into per-column subproblems and runs them on a worker pool.
///
/// The dispatcher holds no state between calls; each `solve` builds its own pool
/// and drops it once the results are merged.
///
/// # Examples
/// ```
/// use nqueens_solver::dispatcher::{DispatchConfig, Dispatcher};
/// let dispatcher = Dispatcher::new(DispatchConfig::default().with_workers(2));
/// assert_eq!(dispatcher.solve(6).unwrap().len(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatchConfig,
}

impl Dispatcher {
    pub fn new(config: DispatchConfig) -> Self {
        Dispatcher { config }
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Returns every solution for an `n`×`n` board, in no guaranteed order.
    pub fn solve(&self, n: usize) -> Result<Vec<Solution>, SolveError> {
        self.solve_with_report(n).map(|report| report.solutions)
    }

    /// Like `solve`, but also reports how many solutions each subproblem contributed.
    pub fn solve_with_report(&self, n: usize) -> Result<DispatchReport, SolveError> {
        self.dispatch(n, Subproblem::run)
    }

    pub(crate) fn dispatch<F>(&self, n: usize, run: F) -> Result<DispatchReport, SolveError>
    where
        F: Fn(&Subproblem) -> Vec<Solution> + Sync,
    {
        if n == 0 {
            // No row 0 to partition on; the empty placement is the only solution.
            return Ok(DispatchReport {
                solutions: solve_sequential(0),
                partitions: Vec::new(),
            });
        }

        let workers = self.config.workers.clamp(1, n);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("nqueens-worker-{}", i))
            .build()?;
        info!("dispatching n = {} as {} subproblems on {} workers", n, n, workers);

        let mut report = pool.install(|| {
            (0..n)
                .into_par_iter()
                .map(|start_col| run_subproblem(&run, Subproblem::new(n, start_col)))
                .try_reduce(DispatchReport::default, |a, b| Ok(a.merge(b)))
        })?;

        report.partitions.sort_by_key(|p| p.start_col);
        info!("n = {}: {} solutions", n, report.solutions.len());
        Ok(report)
    }
}

fn run_subproblem<F>(run: &F, subproblem: Subproblem) -> Result<DispatchReport, SolveError>
where
    F: Fn(&Subproblem) -> Vec<Solution> + Sync,
{
    match panic::catch_unwind(AssertUnwindSafe(|| run(&subproblem))) {
        Ok(solutions) => {
            debug!(
                "subproblem n = {} start_col = {}: {} solutions",
                subproblem.n,
                subproblem.start_col,
                solutions.len()
            );
            Ok(DispatchReport::from_partition(subproblem, solutions))
        }
        Err(payload) => {
            let reason = panic_message(payload.as_ref());
            error!(
                "subproblem n = {} start_col = {} failed: {}",
                subproblem.n, subproblem.start_col, reason
            );
            Err(SolveError::TaskFailure {
                start_col: subproblem.start_col,
                reason,
            })
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker panicked".to_string()
    }
}
