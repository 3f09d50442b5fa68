//! Executable joint-space paths.

use serde::{Deserialize, Serialize};

use crate::candidate::JointConfiguration;

/// An executable joint-space path: an ordered list of waypoints.
///
/// Trajectory *generation* (cartesian interpolation, time
/// parameterization) lives outside this workspace; this is only the
/// shape handed to a motion executor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    /// Waypoints, in execution order.
    pub points: Vec<JointConfiguration>,
}

impl Trajectory {
    /// Create a trajectory from waypoints in execution order.
    #[must_use]
    pub const fn new(points: Vec<JointConfiguration>) -> Self {
        Self { points }
    }

    /// Number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the trajectory has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Precomputed cartesian path segments for one grasp candidate.
///
/// Produced downstream of the feasibility filter and referenced by the
/// pick sequencer's approach/lift/retreat steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegments {
    /// Pregrasp pose to grasp pose.
    pub approach: Trajectory,
    /// Straight up after closing the gripper.
    pub lift: Trajectory,
    /// Back out of the container.
    pub retreat: Trajectory,
}

impl PathSegments {
    /// Bundle the three segments of one pick motion.
    #[must_use]
    pub const fn new(approach: Trajectory, lift: Trajectory, retreat: Trajectory) -> Self {
        Self {
            approach,
            lift,
            retreat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trajectory_len() {
        let trajectory = Trajectory::new(vec![
            JointConfiguration::new(vec![0.0]),
            JointConfiguration::new(vec![0.5]),
        ]);
        assert_eq!(trajectory.len(), 2);
        assert!(!trajectory.is_empty());
        assert!(Trajectory::default().is_empty());
    }

    #[test]
    fn test_path_segments() {
        let one = Trajectory::new(vec![JointConfiguration::new(vec![0.0])]);
        let segments = PathSegments::new(one.clone(), one.clone(), one);
        assert_eq!(segments.approach.len(), 1);
        assert_eq!(segments.lift.len(), 1);
        assert_eq!(segments.retreat.len(), 1);
    }
}
