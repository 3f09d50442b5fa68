//! Selecting one candidate from the surviving set.

use grasp_types::GraspCandidate;
use tracing::debug;

use crate::error::{FilterError, FilterResult};

/// Choose a candidate: the first in input order.
///
/// This is the documented baseline policy, deterministic given identical
/// input order. Run it on a set sorted by
/// [`CandidateId`](grasp_types::CandidateId) to get the survivor with
/// the smallest original index. No quality ranking is applied; use
/// [`choose_scored`] to plug one in.
///
/// # Errors
///
/// [`FilterError::NoFeasibleGrasp`] if `candidates` is empty.
pub fn choose(candidates: &[GraspCandidate]) -> FilterResult<&GraspCandidate> {
    let chosen = candidates.first().ok_or(FilterError::NoFeasibleGrasp)?;
    debug!(candidate = %chosen.id, "chose first feasible grasp");
    Ok(chosen)
}

/// Choose the highest-scoring candidate under a caller-supplied metric
/// (approach clearance, manipulability, ...).
///
/// Ties break toward the smallest original index, so the choice is
/// deterministic given identical input order.
///
/// # Errors
///
/// [`FilterError::NoFeasibleGrasp`] if `candidates` is empty.
pub fn choose_scored<F>(candidates: &[GraspCandidate], score: F) -> FilterResult<&GraspCandidate>
where
    F: Fn(&GraspCandidate) -> f64,
{
    use std::cmp::Ordering;

    let mut best: Option<(&GraspCandidate, f64)> = None;

    for candidate in candidates {
        let value = score(candidate);
        let better = match best {
            None => true,
            Some((incumbent, incumbent_value)) => match value.partial_cmp(&incumbent_value) {
                Some(Ordering::Greater) => true,
                Some(Ordering::Equal) => candidate.id < incumbent.id,
                _ => false,
            },
        };
        if better {
            best = Some((candidate, value));
        }
    }

    let (chosen, value) = best.ok_or(FilterError::NoFeasibleGrasp)?;
    debug!(candidate = %chosen.id, score = value, "chose scored grasp");
    Ok(chosen)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;
    use grasp_types::{CandidateId, GraspPoseSet, Isometry3, JointConfiguration};

    fn candidate(index: usize) -> GraspCandidate {
        let pose = Isometry3::translation(0.0, 0.0, 0.1 * index as f64);
        GraspCandidate::new(
            CandidateId::new(index),
            &GraspPoseSet::new(pose, pose),
            JointConfiguration::new(vec![0.0]),
            None,
        )
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(choose(&[]), Err(FilterError::NoFeasibleGrasp)));
        assert!(matches!(
            choose_scored(&[], |_| 0.0),
            Err(FilterError::NoFeasibleGrasp)
        ));
    }

    #[test]
    fn test_first_in_input_order() {
        let candidates = vec![candidate(1), candidate(3), candidate(4)];
        let chosen = choose(&candidates).unwrap();
        assert_eq!(chosen.id.index(), 1);
    }

    #[test]
    fn test_scored_picks_highest() {
        let candidates = vec![candidate(0), candidate(1), candidate(2)];
        let chosen =
            choose_scored(&candidates, |c| c.grasp_pose.translation.z).unwrap();
        assert_eq!(chosen.id.index(), 2);
    }

    #[test]
    fn test_scored_ties_break_to_smallest_id() {
        let candidates = vec![candidate(5), candidate(2), candidate(8)];
        let chosen = choose_scored(&candidates, |_| 1.0).unwrap();
        assert_eq!(chosen.id.index(), 2);
    }
}
