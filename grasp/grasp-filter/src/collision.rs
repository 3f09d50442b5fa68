//! Serial collision re-validation of IK-feasible candidates.

use grasp_types::GraspCandidate;
use tracing::{debug, warn};

use crate::world::{ContactPair, WorldModel};

/// Re-validate survivors of the feasibility filter against the world.
///
/// For each candidate: apply its grasp joint configuration to the
/// snapshot, query validity (contacts in `allowed_contacts` are
/// tolerated), and restore the prior state before the next candidate.
/// Single-threaded by contract - the read-modify-restore cycle cannot
/// run concurrently against one mutable snapshot.
///
/// Keeps only collision-free candidates, preserving relative order, so
/// filtering an already collision-free set returns it unchanged. When
/// `verbose` is set, the offending contact pairs of each rejected
/// candidate are logged.
#[must_use]
pub fn filter_collisions(
    world: &mut dyn WorldModel,
    candidates: Vec<GraspCandidate>,
    allowed_contacts: &[ContactPair],
    verbose: bool,
) -> Vec<GraspCandidate> {
    let total = candidates.len();
    let previous = world.current_configuration();
    let mut kept = Vec::with_capacity(total);

    for candidate in candidates {
        world.apply_configuration(&candidate.grasp_solution);
        let valid = world.is_state_valid(allowed_contacts);

        if !valid && verbose {
            for pair in world.contacts() {
                warn!(
                    candidate = %candidate.id,
                    first = %pair.first,
                    second = %pair.second,
                    "prohibited contact"
                );
            }
        }

        world.restore(&previous);

        if valid {
            kept.push(candidate);
        }
    }

    debug!(total, kept = kept.len(), "collision filter complete");
    kept
}
