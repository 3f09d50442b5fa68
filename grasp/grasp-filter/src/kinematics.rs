//! The inverse-kinematics solving interface.

use std::time::Duration;

use grasp_types::JointConfiguration;
use nalgebra::Isometry3;

/// One stateful IK-solving context for a kinematic group.
///
/// Implementations carry internal scratch state, so a single instance
/// must never be invoked by two callers concurrently - that rule is
/// encoded in `&mut self`. *Distinct* instances are safe to call in
/// parallel, which is exactly how the feasibility filter uses them: one
/// instance per worker, lent out by [`SolverPool`](crate::SolverPool).
///
/// Solving internals (solver choice, seeding, redundancy resolution) are
/// outside this workspace; implementors wrap whatever solver the robot
/// uses.
pub trait KinematicsProvider: Send {
    /// Solve IK for `pose`.
    ///
    /// Returns the joint configuration reaching the pose, or `None` if
    /// no solution was found within `attempts` restarts and `timeout`
    /// per query. A timeout is indistinguishable from an unreachable
    /// pose by design: both mean "not feasible".
    fn solve_ik(
        &mut self,
        pose: &Isometry3<f64>,
        attempts: usize,
        timeout: Duration,
    ) -> Option<JointConfiguration>;
}
