/// Errors reported by the min-conflicts solver.
///
/// Invalid sizes are reported before any search starts. The remaining
/// variants only occur when the caller bounds the search, either with caps in
/// [`SolverConfig`](crate::SolverConfig) or with a cancellation check passed
/// to [`MinConflictsSolver::solve_until`](crate::MinConflictsSolver::solve_until).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum SolverError {
    /// The board size is zero.
    #[display("board size must be at least 1, got {size}")]
    InvalidSize {
        /// The requested size.
        size: usize,
    },
    /// No placement exists for this size (N = 2 or N = 3).
    #[display("the {size}-queens problem has no solution")]
    Unsolvable {
        /// The requested size.
        size: usize,
    },
    /// The configured iteration or restart cap was exhausted.
    #[display("no solution found within {iterations} iterations and {restarts} restarts")]
    NoSolutionFound {
        /// Iterations performed.
        iterations: usize,
        /// Restarts performed.
        restarts: usize,
    },
    /// The cancellation check asked the search to stop.
    #[display("search cancelled after {iterations} iterations and {restarts} restarts")]
    Cancelled {
        /// Iterations performed.
        iterations: usize,
        /// Restarts performed.
        restarts: usize,
    },
}

/// Checks that an N-Queens problem of `size` can be searched.
///
/// # Errors
///
/// Returns [`SolverError::InvalidSize`] for zero and
/// [`SolverError::Unsolvable`] for 2 and 3, the only sizes without a solution.
pub fn check_size(size: usize) -> Result<(), SolverError> {
    match size {
        0 => Err(SolverError::InvalidSize { size }),
        2 | 3 => Err(SolverError::Unsolvable { size }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_size() {
        assert_eq!(check_size(0), Err(SolverError::InvalidSize { size: 0 }));
        assert!(check_size(1).is_ok());
        assert_eq!(check_size(2), Err(SolverError::Unsolvable { size: 2 }));
        assert_eq!(check_size(3), Err(SolverError::Unsolvable { size: 3 }));
        for size in 4..64 {
            assert!(check_size(size).is_ok());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            SolverError::InvalidSize { size: 0 }.to_string(),
            "board size must be at least 1, got 0"
        );
        assert_eq!(
            SolverError::NoSolutionFound {
                iterations: 10,
                restarts: 2
            }
            .to_string(),
            "no solution found within 10 iterations and 2 restarts"
        );
    }
}
