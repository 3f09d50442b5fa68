//! Error types for pick sequencing.

use thiserror::Error;

/// Result type alias for step actions.
pub type StepResult<T> = Result<T, StepError>;

/// Result type alias for sequencer operations.
pub type SequencerResult<T> = Result<T, SequencerError>;

/// A trajectory execution failure, reported by a
/// [`MotionExecutor`](crate::MotionExecutor). Never silently swallowed.
#[derive(Debug, Error)]
pub enum MotionError {
    /// The controller refused the trajectory before execution started.
    #[error("trajectory rejected by controller: {0}")]
    Rejected(String),

    /// Execution started but failed partway through.
    #[error("trajectory execution failed at waypoint {waypoint}: {reason}")]
    ExecutionFailed {
        /// Index of the waypoint where execution stopped.
        waypoint: usize,
        /// Controller-reported reason.
        reason: String,
    },
}

/// Why a single step's action failed.
#[derive(Debug, Error)]
pub enum StepError {
    /// A commanded motion failed.
    #[error(transparent)]
    Motion(#[from] MotionError),

    /// The working state holds no grasp candidate (e.g. the
    /// compute-grasp step found nothing feasible).
    #[error("no grasp candidate in working state")]
    NoCandidate,

    /// Any other step-specific failure.
    #[error("{0}")]
    Other(String),
}

impl StepError {
    /// Create a step error from a free-form cause.
    #[must_use]
    pub fn other(details: impl Into<String>) -> Self {
        Self::Other(details.into())
    }
}

/// Terminal failure of one pick run.
///
/// Always carries the failing step's index and label, so the caller
/// knows exactly where to resume after fixing the world.
#[derive(Debug, Error)]
pub enum SequencerError {
    /// A step's action failed. Fatal to the run; retrying is the
    /// caller's decision.
    #[error("step {step} ({label}) failed: {source}")]
    StepFailed {
        /// Index of the failing step.
        step: usize,
        /// Label of the failing step.
        label: String,
        /// The propagated cause.
        #[source]
        source: StepError,
    },

    /// The operator cancelled the pending authorization wait. Treated
    /// identically to a step failure downstream.
    #[error("operator cancelled before step {step} ({label})")]
    OperatorCancelled {
        /// Index of the step that was awaiting authorization.
        step: usize,
        /// Label of that step.
        label: String,
    },

    /// The jump-to-step override named a step that does not exist.
    #[error("jump target {requested} exceeds step count {step_count}")]
    InvalidJumpTarget {
        /// The requested starting index.
        requested: usize,
        /// How many steps the sequence defines.
        step_count: usize,
    },

    /// A sequencer cannot be built over zero steps.
    #[error("step list is empty")]
    EmptyStepList,
}

impl SequencerError {
    /// Index of the step this error concerns, if any.
    #[must_use]
    pub const fn step(&self) -> Option<usize> {
        match self {
            Self::StepFailed { step, .. } | Self::OperatorCancelled { step, .. } => Some(*step),
            Self::InvalidJumpTarget { .. } | Self::EmptyStepList => None,
        }
    }
}
