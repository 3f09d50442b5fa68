//! The full filtering pipeline: parallel IK, serial collision check,
//! selection.

use grasp_types::{GraspCandidate, GraspPoseSet};
use tracing::info;

use crate::collision::filter_collisions;
use crate::error::FilterResult;
use crate::feasibility::filter_grasps;
use crate::params::FilterParams;
use crate::pool::SolverPool;
use crate::selector::choose;
use crate::world::{ContactPair, WorldModel};

/// Run the complete candidate-reduction pipeline and pick one grasp.
///
/// Stages, in order:
///
/// 1. [`filter_grasps`] - parallel IK feasibility
/// 2. sort by original index, restoring determinism after the
///    non-deterministic parallel merge
/// 3. [`filter_collisions`] - serial world re-validation
/// 4. [`choose`] - first survivor in index order
///
/// # Errors
///
/// [`FilterError::NoFeasibleGrasp`](crate::FilterError::NoFeasibleGrasp)
/// when nothing survives - the recoverable "try the next bin or
/// product" signal - plus any pool or parameter error from the
/// feasibility stage.
pub fn run_filter_pipeline(
    pool: &mut SolverPool,
    world: &mut dyn WorldModel,
    poses: &[GraspPoseSet],
    group: &str,
    allowed_contacts: &[ContactPair],
    params: &FilterParams,
) -> FilterResult<GraspCandidate> {
    let mut survivors = filter_grasps(pool, poses, group, params)?;
    survivors.sort_by_key(|candidate| candidate.id);

    let collision_free =
        filter_collisions(world, survivors, allowed_contacts, params.verbose_collisions);

    let chosen = choose(&collision_free)?.clone();
    info!(
        candidates = poses.len(),
        collision_free = collision_free.len(),
        chosen = %chosen.id,
        "filter pipeline selected grasp"
    );
    Ok(chosen)
}
