/// Stall factor used by [`SolverConfig::default`].
pub const DEFAULT_STALL_FACTOR: usize = 2;

/// Tuning and bounds for [`MinConflictsSolver`](crate::MinConflictsSolver).
///
/// The defaults reproduce the classic loop: restart after `2 * N` iterations
/// without convergence, with no cap on iterations or restarts.
///
/// # Examples
///
/// ```
/// use nqueens_solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_stall_factor(4)
///     .with_max_restarts(100);
///
/// assert_eq!(config.stall_limit(8), 32);
/// assert_eq!(config.max_restarts(), Some(100));
/// assert_eq!(config.max_iterations(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    stall_factor: usize,
    max_restarts: Option<usize>,
    max_iterations: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            stall_factor: DEFAULT_STALL_FACTOR,
            max_restarts: None,
            max_iterations: None,
        }
    }
}

impl SolverConfig {
    /// Sets how many iterations per queen the search may run between
    /// restarts. Values below 1 are raised to 1.
    #[must_use]
    pub fn with_stall_factor(mut self, factor: usize) -> Self {
        self.stall_factor = factor.max(1);
        self
    }

    /// Caps the number of restarts; the search fails once another restart
    /// would be needed.
    #[must_use]
    pub fn with_max_restarts(mut self, max: usize) -> Self {
        self.max_restarts = Some(max);
        self
    }

    /// Caps the total number of iterations across all restarts.
    #[must_use]
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Returns the stall factor.
    #[must_use]
    pub fn stall_factor(&self) -> usize {
        self.stall_factor
    }

    /// Returns the number of iterations after which a board of `size` is
    /// considered stalled.
    #[must_use]
    pub fn stall_limit(&self, size: usize) -> usize {
        self.stall_factor.saturating_mul(size)
    }

    /// Returns the restart cap, if any.
    #[must_use]
    pub fn max_restarts(&self) -> Option<usize> {
        self.max_restarts
    }

    /// Returns the iteration cap, if any.
    #[must_use]
    pub fn max_iterations(&self) -> Option<usize> {
        self.max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = SolverConfig::default();
        assert_eq!(config.stall_factor(), DEFAULT_STALL_FACTOR);
        assert_eq!(config.stall_limit(5), 10);
        assert_eq!(config.max_restarts(), None);
        assert_eq!(config.max_iterations(), None);
    }

    #[test]
    fn test_stall_factor_is_at_least_one() {
        let config = SolverConfig::default().with_stall_factor(0);
        assert_eq!(config.stall_factor(), 1);
        assert_eq!(config.stall_limit(7), 7);
    }

    #[test]
    fn test_stall_limit_saturates() {
        let config = SolverConfig::default().with_stall_factor(usize::MAX);
        assert_eq!(config.stall_limit(3), usize::MAX);
    }
}
