//! Error types for grasp filtering.

use thiserror::Error;

/// Result type alias for filtering operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while filtering grasp candidates.
///
/// IK failures are deliberately *not* represented here: a candidate
/// whose solve fails (or times out) is silently excluded from the
/// output set, which is the failure signal.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A solver group holds fewer handles than the requested worker
    /// count. The pool is sized once at initialization and never grows,
    /// so this is a startup misconfiguration.
    #[error("solver group `{group}` has {available} handles, {requested} requested")]
    InsufficientCapacity {
        /// The kinematic group that was asked for handles.
        group: String,
        /// How many handles the group was provisioned with.
        available: usize,
        /// How many handles the caller requested.
        requested: usize,
    },

    /// The named solver group was never provisioned.
    #[error("unknown solver group `{0}`")]
    UnknownGroup(String),

    /// No candidate survived filtering. Recoverable: the caller moves on
    /// to the next bin or product.
    #[error("no feasible grasp candidate")]
    NoFeasibleGrasp,

    /// Filter parameters failed validation.
    #[error("invalid filter parameters: {0}")]
    InvalidParams(String),
}

impl FilterError {
    /// Create an insufficient-capacity error.
    #[must_use]
    pub fn insufficient_capacity(
        group: impl Into<String>,
        available: usize,
        requested: usize,
    ) -> Self {
        Self::InsufficientCapacity {
            group: group.into(),
            available,
            requested,
        }
    }

    /// Create an unknown-group error.
    #[must_use]
    pub fn unknown_group(group: impl Into<String>) -> Self {
        Self::UnknownGroup(group.into())
    }

    /// Create an invalid-params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FilterError::insufficient_capacity("armA", 3, 4);
        let text = format!("{err}");
        assert!(text.contains("armA"));
        assert!(text.contains('3'));
        assert!(text.contains('4'));

        let err = FilterError::unknown_group("left_leg");
        assert!(format!("{err}").contains("left_leg"));

        let err = FilterError::NoFeasibleGrasp;
        assert!(format!("{err}").contains("feasible"));

        let err = FilterError::invalid_params("worker_count must be at least 1");
        assert!(format!("{err}").contains("worker_count"));
    }
}
