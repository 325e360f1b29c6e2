/// Counters collected while searching.
///
/// Every pass through the loop that does not converge is one iteration. An
/// iteration either moves a queen or restarts the board.
///
/// # Examples
///
/// ```
/// use nqueens_solver::MinConflictsSolver;
///
/// let mut solver = MinConflictsSolver::with_seed(8, 1, Default::default())?;
/// let placement = solver.solve()?;
///
/// let stats = solver.stats();
/// assert!(placement.is_solution());
/// assert_eq!(stats.iterations(), stats.moves() + stats.restarts());
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub(crate) iterations: usize,
    pub(crate) moves: usize,
    pub(crate) stall_restarts: usize,
    pub(crate) dead_end_restarts: usize,
}

impl SearchStats {
    /// Returns the number of iterations across all restarts.
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of queen moves.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Returns the total number of restarts.
    #[must_use]
    pub fn restarts(&self) -> usize {
        self.stall_restarts + self.dead_end_restarts
    }

    /// Returns the number of restarts caused by the stall limit.
    #[must_use]
    pub fn stall_restarts(&self) -> usize {
        self.stall_restarts
    }

    /// Returns the number of restarts caused by a queen having no other row.
    #[must_use]
    pub fn dead_end_restarts(&self) -> usize {
        self.dead_end_restarts
    }

    /// Adds another run's counters to these.
    pub fn merge(&mut self, other: &Self) {
        self.iterations += other.iterations;
        self.moves += other.moves;
        self.stall_restarts += other.stall_restarts;
        self.dead_end_restarts += other.dead_end_restarts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero() {
        let stats = SearchStats::default();
        assert_eq!(stats.iterations(), 0);
        assert_eq!(stats.moves(), 0);
        assert_eq!(stats.restarts(), 0);
    }

    #[test]
    fn test_restarts_sums_both_kinds() {
        let stats = SearchStats {
            iterations: 10,
            moves: 7,
            stall_restarts: 2,
            dead_end_restarts: 1,
        };
        assert_eq!(stats.restarts(), 3);
    }

    #[test]
    fn test_merge() {
        let mut total = SearchStats {
            iterations: 5,
            moves: 4,
            stall_restarts: 1,
            dead_end_restarts: 0,
        };
        total.merge(&SearchStats {
            iterations: 3,
            moves: 2,
            stall_restarts: 0,
            dead_end_restarts: 1,
        });
        assert_eq!(total.iterations(), 8);
        assert_eq!(total.moves(), 6);
        assert_eq!(total.restarts(), 2);
    }
}
