//! Grasp hypotheses and evaluated candidates.

use std::fmt;

use nalgebra::Isometry3;
use serde::{Deserialize, Serialize};

use crate::trajectory::PathSegments;

/// Identifier of a grasp candidate: its original index in the filter
/// input list.
///
/// The id is preserved across every filtering stage, so ordering and
/// tie-breaking stay deterministic no matter which worker evaluated the
/// candidate or in which order survivors were merged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CandidateId(usize);

impl CandidateId {
    /// Create an id from the candidate's original input index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The original input index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "candidate#{}", self.0)
    }
}

/// One grasp hypothesis: the end-effector pose to grasp at, plus the
/// standoff pose to approach from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraspPoseSet {
    /// Target end-effector pose at the moment of grasping.
    pub grasp: Isometry3<f64>,
    /// Pregrasp (standoff) pose the approach starts from.
    pub pregrasp: Isometry3<f64>,
}

impl GraspPoseSet {
    /// Create a pose set from a grasp pose and its pregrasp pose.
    #[must_use]
    pub const fn new(grasp: Isometry3<f64>, pregrasp: Isometry3<f64>) -> Self {
        Self { grasp, pregrasp }
    }
}

/// One solved arm posture: joint positions in group order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointConfiguration {
    /// Joint positions, in the kinematic group's joint order.
    pub positions: Vec<f64>,
}

impl JointConfiguration {
    /// Create a configuration from raw joint positions.
    #[must_use]
    pub const fn new(positions: Vec<f64>) -> Self {
        Self { positions }
    }

    /// Number of joints in this configuration.
    #[must_use]
    pub fn dof(&self) -> usize {
        self.positions.len()
    }

    /// Whether the configuration holds no joints at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A fully evaluated grasp hypothesis that passed IK feasibility.
///
/// Candidates are constructed whole by the feasibility filter: the grasp
/// IK solution is always present, and the pregrasp solution is present
/// exactly when pregrasp filtering was requested and succeeded. A
/// candidate is never mutated after insertion into the filter's result
/// set; path segments are attached downstream via
/// [`with_segments`](Self::with_segments), which produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraspCandidate {
    /// Original input index, preserved across all filtering stages.
    pub id: CandidateId,
    /// Target end-effector pose at the moment of grasping.
    pub grasp_pose: Isometry3<f64>,
    /// Pregrasp (standoff) pose the approach starts from.
    pub pregrasp_pose: Isometry3<f64>,
    /// IK solution for the grasp pose. Always present.
    pub grasp_solution: JointConfiguration,
    /// IK solution for the pregrasp pose, when pregrasp filtering was
    /// requested.
    pub pregrasp_solution: Option<JointConfiguration>,
    /// Precomputed approach/lift/retreat segments, produced by trajectory
    /// generation downstream of the filter.
    pub segments: Option<PathSegments>,
}

impl GraspCandidate {
    /// Construct a candidate from a pose set and its IK solutions.
    ///
    /// Called by the feasibility filter once *all* required solves have
    /// succeeded, so a candidate observable by anyone is always fully
    /// populated.
    #[must_use]
    pub fn new(
        id: CandidateId,
        poses: &GraspPoseSet,
        grasp_solution: JointConfiguration,
        pregrasp_solution: Option<JointConfiguration>,
    ) -> Self {
        Self {
            id,
            grasp_pose: poses.grasp,
            pregrasp_pose: poses.pregrasp,
            grasp_solution,
            pregrasp_solution,
            segments: None,
        }
    }

    /// Attach precomputed cartesian path segments.
    #[must_use]
    pub fn with_segments(mut self, segments: PathSegments) -> Self {
        self.segments = Some(segments);
        self
    }
}
