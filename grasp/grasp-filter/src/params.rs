//! Parameters for grasp feasibility filtering.

use std::time::Duration;

use crate::error::{FilterError, FilterResult};

/// Default worker count for the parallel IK filter.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Default hard bound on one IK query.
pub const DEFAULT_SOLVE_TIMEOUT: Duration = Duration::from_millis(50);

/// Parameters for the grasp feasibility filter.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use grasp_filter::FilterParams;
///
/// let params = FilterParams::default()
///     .worker_count(8)
///     .filter_pregrasp(true)
///     .solve_timeout(Duration::from_millis(20));
///
/// assert_eq!(params.worker_count, 8);
/// assert!(params.filter_pregrasp);
/// ```
#[derive(Debug, Clone)]
pub struct FilterParams {
    /// Also require the pregrasp pose to be IK-feasible. When set, a
    /// candidate survives only if *both* solves succeed.
    pub filter_pregrasp: bool,

    /// Number of parallel workers. The filter never spawns more workers
    /// than there are candidates.
    pub worker_count: usize,

    /// Solver restarts per IK query.
    pub ik_attempts: usize,

    /// Hard bound on a single IK query, not on the whole partition. A
    /// timed-out solve counts as a failed solve.
    pub solve_timeout: Duration,

    /// Log the offending contact pairs when a candidate fails the
    /// collision pass.
    pub verbose_collisions: bool,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            filter_pregrasp: false,
            worker_count: DEFAULT_WORKER_COUNT,
            ik_attempts: 1,
            solve_timeout: DEFAULT_SOLVE_TIMEOUT,
            verbose_collisions: false,
        }
    }
}

impl FilterParams {
    /// Set whether pregrasp poses are also filtered.
    #[must_use]
    pub const fn filter_pregrasp(mut self, enabled: bool) -> Self {
        self.filter_pregrasp = enabled;
        self
    }

    /// Set the parallel worker count.
    #[must_use]
    pub const fn worker_count(mut self, count: usize) -> Self {
        self.worker_count = count;
        self
    }

    /// Set the solver restarts per IK query.
    #[must_use]
    pub const fn ik_attempts(mut self, attempts: usize) -> Self {
        self.ik_attempts = attempts;
        self
    }

    /// Set the per-query solve timeout.
    #[must_use]
    pub const fn solve_timeout(mut self, timeout: Duration) -> Self {
        self.solve_timeout = timeout;
        self
    }

    /// Set collision diagnostics verbosity.
    #[must_use]
    pub const fn verbose_collisions(mut self, enabled: bool) -> Self {
        self.verbose_collisions = enabled;
        self
    }

    /// Validate the parameters.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidParams`] if the worker count or attempt
    /// count is zero, or the timeout is zero.
    pub fn validate(&self) -> FilterResult<()> {
        if self.worker_count == 0 {
            return Err(FilterError::invalid_params("worker_count must be at least 1"));
        }
        if self.ik_attempts == 0 {
            return Err(FilterError::invalid_params("ik_attempts must be at least 1"));
        }
        if self.solve_timeout.is_zero() {
            return Err(FilterError::invalid_params("solve_timeout must be non-zero"));
        }
        Ok(())
    }
}
