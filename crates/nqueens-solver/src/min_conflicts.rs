use std::fmt::{self, Display};

use nqueens_core::{Board, Placement};
use rand::{Rng, SeedableRng as _};
use rand_pcg::Pcg64;

use crate::{
    SearchStats, SolverConfig, SolverError,
    error::check_size,
    selection::{pick_best_row, pick_worst_queen},
};

/// State of a [`MinConflictsSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SearchState {
    /// Some queen is still attacked.
    Searching,
    /// No queen is attacked; the board holds a solution. Terminal.
    Converged,
}

/// Why the board was re-randomized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartReason {
    /// The stall limit was exceeded since the last restart.
    Stalled,
    /// The worst queen had no other row to move to.
    NoCandidate,
}

impl Display for RestartReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stalled => f.write_str("stalled"),
            Self::NoCandidate => f.write_str("no candidate row"),
        }
    }
}

/// Result of a single [`MinConflictsSolver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepOutcome {
    /// The board holds a solution.
    Converged,
    /// The worst queen moved within its column.
    Moved {
        /// Column of the moved queen.
        column: usize,
        /// Row it left.
        from: usize,
        /// Row it moved to.
        to: usize,
        /// Queens attacking it on the new row.
        conflicts: usize,
    },
    /// The board was re-randomized.
    Restarted(RestartReason),
}

/// Min-conflicts local search for the N-Queens problem.
///
/// Each [`step`](Self::step) picks the most attacked queen (uniform among
/// ties) and moves it to the least attacked other row of its column (uniform
/// among ties). The board is re-randomized when the number of iterations
/// since the last restart exceeds [`SolverConfig::stall_limit`], or when the
/// queen has no other row.
///
/// The solver owns its board and its random generator, so a fixed seed
/// reproduces the same search.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{MinConflictsSolver, SolverConfig};
///
/// let mut solver = MinConflictsSolver::with_seed(8, 42, SolverConfig::default())?;
/// let placement = solver.solve()?;
///
/// assert_eq!(placement.size(), 8);
/// assert!(placement.is_solution());
/// println!(
///     "{} iterations, {} restarts",
///     solver.stats().iterations(),
///     solver.stats().restarts()
/// );
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
///
/// # Bounding the search
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use nqueens_solver::{MinConflictsSolver, SolverConfig, SolverError};
///
/// let config = SolverConfig::default().with_max_restarts(1_000);
/// let mut solver = MinConflictsSolver::with_seed(64, 7, config)?;
///
/// let deadline = Instant::now() + Duration::from_secs(10);
/// match solver.solve_until(|_stats| Instant::now() < deadline) {
///     Ok(placement) => assert!(placement.is_solution()),
///     Err(SolverError::Cancelled { .. } | SolverError::NoSolutionFound { .. }) => {}
///     Err(e) => return Err(e),
/// }
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MinConflictsSolver<R = Pcg64> {
    board: Board,
    rng: R,
    config: SolverConfig,
    stats: SearchStats,
    since_restart: usize,
    state: SearchState,
}

impl MinConflictsSolver<Pcg64> {
    /// Creates a solver for an N×N board driven by a [`Pcg64`] seeded with
    /// `seed`.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_seed(size: usize, seed: u64, config: SolverConfig) -> Result<Self, SolverError> {
        Self::new(size, Pcg64::seed_from_u64(seed), config)
    }
}

impl<R> MinConflictsSolver<R>
where
    R: Rng,
{
    /// Creates a solver for an N×N board starting from a random placement
    /// drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidSize`] if `size` is zero, or
    /// [`SolverError::Unsolvable`] if `size` is 2 or 3.
    pub fn new(size: usize, mut rng: R, config: SolverConfig) -> Result<Self, SolverError> {
        check_size(size)?;
        let mut board = Board::new(size).map_err(|_| SolverError::InvalidSize { size })?;
        board.reset(&mut rng);
        Ok(Self::with_board(board, rng, config))
    }

    /// Creates a solver that starts searching from `board` as is.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Unsolvable`] if the board size is 2 or 3.
    pub fn from_board(board: Board, rng: R, config: SolverConfig) -> Result<Self, SolverError> {
        check_size(board.size())?;
        Ok(Self::with_board(board, rng, config))
    }

    fn with_board(board: Board, rng: R, config: SolverConfig) -> Self {
        Self {
            board,
            rng,
            config,
            stats: SearchStats::default(),
            since_restart: 0,
            state: SearchState::Searching,
        }
    }

    /// Returns the board in its current state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the counters collected so far.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Returns the search state.
    #[must_use]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Performs one iteration of the search.
    ///
    /// Once converged, further calls return [`StepOutcome::Converged`]
    /// without touching the board or the counters.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoSolutionFound`] if the iteration cap is
    /// reached, or if a restart is needed and the restart cap is reached.
    pub fn step(&mut self) -> Result<StepOutcome, SolverError> {
        if self.state.is_converged() {
            return Ok(StepOutcome::Converged);
        }

        let worst = pick_worst_queen(&self.board, &mut self.rng);
        if worst.conflicts == 0 {
            self.state = SearchState::Converged;
            log::info!(
                "converged on {size}x{size} board after {} iterations and {} restarts",
                self.stats.iterations,
                self.stats.restarts(),
                size = self.board.size(),
            );
            return Ok(StepOutcome::Converged);
        }

        if self
            .config
            .max_iterations()
            .is_some_and(|max| self.stats.iterations >= max)
        {
            return Err(self.exhausted());
        }
        self.stats.iterations += 1;
        self.since_restart += 1;
        if self.since_restart > self.config.stall_limit(self.board.size()) {
            return self.restart(RestartReason::Stalled);
        }

        let from = self.board.row_of(worst.column);
        let Some(best) = pick_best_row(&self.board, worst.column, from, &mut self.rng) else {
            return self.restart(RestartReason::NoCandidate);
        };
        self.board.move_queen(worst.column, from, best.row);
        self.stats.moves += 1;
        log::trace!(
            "moved queen {} from row {from} to row {} ({} -> {} conflicts)",
            worst.column,
            best.row,
            worst.conflicts,
            best.conflicts,
        );
        Ok(StepOutcome::Moved {
            column: worst.column,
            from,
            to: best.row,
            conflicts: best.conflicts,
        })
    }

    /// Runs the search until the board holds a solution.
    ///
    /// Without caps in the configuration this only returns once a solution is
    /// found. Use [`solve_until`](Self::solve_until) to bound it externally.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::NoSolutionFound`] if a configured cap is
    /// exhausted first.
    pub fn solve(&mut self) -> Result<Placement, SolverError> {
        self.solve_until(|_| true)
    }

    /// Runs the search until the board holds a solution or `keep_going`
    /// returns `false`.
    ///
    /// `keep_going` is called with the current counters after every
    /// iteration that did not converge.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Cancelled`] if `keep_going` stops the search,
    /// or [`SolverError::NoSolutionFound`] if a configured cap is exhausted.
    pub fn solve_until<F>(&mut self, mut keep_going: F) -> Result<Placement, SolverError>
    where
        F: FnMut(&SearchStats) -> bool,
    {
        loop {
            if self.step()?.is_converged() {
                return Ok(self.board.placement().clone());
            }
            if !keep_going(&self.stats) {
                log::debug!(
                    "search cancelled after {} iterations",
                    self.stats.iterations
                );
                return Err(SolverError::Cancelled {
                    iterations: self.stats.iterations,
                    restarts: self.stats.restarts(),
                });
            }
        }
    }

    /// Consumes the solver, returning the board and the counters.
    #[must_use]
    pub fn into_parts(self) -> (Board, SearchStats) {
        (self.board, self.stats)
    }

    fn restart(&mut self, reason: RestartReason) -> Result<StepOutcome, SolverError> {
        if self
            .config
            .max_restarts()
            .is_some_and(|max| self.stats.restarts() >= max)
        {
            return Err(self.exhausted());
        }
        match reason {
            RestartReason::Stalled => self.stats.stall_restarts += 1,
            RestartReason::NoCandidate => self.stats.dead_end_restarts += 1,
        }
        log::debug!(
            "restart #{} ({reason}) after {} iterations since the previous one",
            self.stats.restarts(),
            self.since_restart,
        );
        self.since_restart = 0;
        self.board.reset(&mut self.rng);
        Ok(StepOutcome::Restarted(reason))
    }

    fn exhausted(&self) -> SolverError {
        log::debug!(
            "search exhausted after {} iterations and {} restarts",
            self.stats.iterations,
            self.stats.restarts()
        );
        SolverError::NoSolutionFound {
            iterations: self.stats.iterations,
            restarts: self.stats.restarts(),
        }
    }
}
