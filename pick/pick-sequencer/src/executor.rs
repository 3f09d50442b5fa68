//! The trajectory execution interface.

use grasp_types::Trajectory;

use crate::error::MotionError;

/// Executes planned trajectories against the hardware controllers.
///
/// Controller protocols, execution monitoring, and recovery behaviors
/// live outside this workspace. The one rule at this boundary: failures
/// are reported with their cause, never silently swallowed - a step
/// that commanded a motion must learn whether the motion happened.
pub trait MotionExecutor {
    /// Execute one trajectory to completion.
    ///
    /// # Errors
    ///
    /// [`MotionError`] describing where and why execution stopped.
    fn execute(&mut self, trajectory: &Trajectory) -> Result<(), MotionError>;
}
