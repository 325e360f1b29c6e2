//! Min-conflicts local search for the N-Queens problem.
//!
//! The solver starts from a random permutation (one queen per row and per
//! column) and repeatedly moves the most attacked queen to the least attacked
//! row of its column. When the search stalls it re-randomizes the board.
//!
//! # Overview
//!
//! - [`MinConflictsSolver`]: the search loop, steppable one iteration at a
//!   time or run to completion.
//! - [`SolverConfig`]: stall factor and optional caps on iterations and
//!   restarts.
//! - [`SearchStats`]: counters for iterations, moves and restarts.
//! - [`selection`]: the worst-queen and best-row choices with uniform random
//!   tie-breaking.
//! - [`solve`] and [`solve_with_seed`]: one-call entry points.
//!
//! # Examples
//!
//! ```
//! let placement = nqueens_solver::solve(8)?;
//! assert!(placement.is_solution());
//! println!("{placement}");
//! # Ok::<(), nqueens_solver::SolverError>(())
//! ```
//!
//! Sizes 2 and 3 have no solution and are rejected up front:
//!
//! ```
//! use nqueens_solver::SolverError;
//!
//! assert_eq!(nqueens_solver::solve(3), Err(SolverError::Unsolvable { size: 3 }));
//! ```

use nqueens_core::Placement;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

pub use self::{
    config::{DEFAULT_STALL_FACTOR, SolverConfig},
    error::{SolverError, check_size},
    min_conflicts::{MinConflictsSolver, RestartReason, SearchState, StepOutcome},
    stats::SearchStats,
};

mod config;
mod error;
mod min_conflicts;
pub mod selection;
mod stats;

/// Solves the N-Queens problem for an N×N board with a freshly seeded
/// generator.
///
/// # Errors
///
/// Returns [`SolverError::InvalidSize`] if `size` is zero, or
/// [`SolverError::Unsolvable`] if `size` is 2 or 3.
pub fn solve(size: usize) -> Result<Placement, SolverError> {
    let rng = Pcg64::from_rng(&mut rand::rng());
    MinConflictsSolver::new(size, rng, SolverConfig::default())?.solve()
}

/// Solves the N-Queens problem for an N×N board; the same `seed` always
/// yields the same placement.
///
/// # Errors
///
/// See [`solve`].
///
/// # Examples
///
/// ```
/// let a = nqueens_solver::solve_with_seed(12, 99)?;
/// let b = nqueens_solver::solve_with_seed(12, 99)?;
/// assert_eq!(a, b);
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
pub fn solve_with_seed(size: usize, seed: u64) -> Result<Placement, SolverError> {
    MinConflictsSolver::with_seed(size, seed, SolverConfig::default())?.solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_valid_sizes() {
        for size in [1, 4, 5, 6, 7, 8, 20, 50] {
            let placement = solve(size).unwrap();
            assert_eq!(placement.size(), size);
            assert!(placement.is_solution(), "invalid {size}-queens placement:\n{placement}");
        }
    }

    #[test]
    fn test_solve_rejects_invalid_sizes() {
        assert_eq!(solve(0), Err(SolverError::InvalidSize { size: 0 }));
        assert_eq!(solve(2), Err(SolverError::Unsolvable { size: 2 }));
        assert_eq!(solve(3), Err(SolverError::Unsolvable { size: 3 }));
    }

    #[test]
    fn test_single_queen() {
        assert_eq!(solve(1).unwrap().rows(), &[0]);
    }

    #[test]
    fn test_four_queens_render() {
        let placement = solve_with_seed(4, 0).unwrap();
        let render = placement.render();
        assert!(
            render == "_ _ * _\n* _ _ _\n_ _ _ *\n_ * _ _"
                || render == "_ * _ _\n_ _ _ *\n* _ _ _\n_ _ * _",
            "unexpected render:\n{render}"
        );
    }

    #[test]
    fn test_seeded_solve_is_reproducible() {
        for seed in 0..5 {
            assert_eq!(solve_with_seed(16, seed), solve_with_seed(16, seed));
        }
    }
}
