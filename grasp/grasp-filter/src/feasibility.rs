//! Parallel IK feasibility filtering.
//!
//! This module reduces a candidate pose list to the kinematically
//! reachable subset by running IK across a fixed worker count. The
//! input is split into contiguous index ranges, as equal as possible,
//! remainder to the first ranges. Each worker gets one range and one
//! exclusive [`SolverHandle`]; it evaluates its range in input order,
//! keeps local survivors, and merges them into the shared output under
//! one short-lived lock. The lock is never held while solving, so
//! contention is negligible next to solve cost.
//!
//! # Ordering
//!
//! Output order is merge order: whichever worker locks first appends
//! first, which varies across runs. The surviving *set* is
//! deterministic for a deterministic solver; sort by
//! [`CandidateId`](grasp_types::CandidateId) when order matters.

use std::ops::Range;
use std::sync::{Mutex, PoisonError};
use std::thread;

use grasp_types::{CandidateId, GraspCandidate, GraspPoseSet};
use tracing::{debug, info, trace};

use crate::error::FilterResult;
use crate::params::FilterParams;
use crate::pool::{SolverHandle, SolverPool};

/// Split `len` items into `workers` contiguous ranges, as equal as
/// possible, with the remainder distributed to the first ranges.
///
/// Every index in `0..len` lands in exactly one range, and range sizes
/// differ by at most one.
#[must_use]
pub fn split_ranges(len: usize, workers: usize) -> Vec<Range<usize>> {
    if workers == 0 {
        return Vec::new();
    }
    let base = len / workers;
    let remainder = len % workers;

    let mut ranges = Vec::with_capacity(workers);
    let mut start = 0;
    for worker in 0..workers {
        let extra = usize::from(worker < remainder);
        let end = start + base + extra;
        ranges.push(start..end);
        start = end;
    }
    ranges
}

/// Filter `poses` down to the IK-feasible subset.
///
/// Spawns `min(params.worker_count, poses.len())` workers, each holding
/// one exclusive solver handle for `group`, and joins them all before
/// returning (barrier semantics, no early cancellation). A failed or
/// timed-out solve excludes the candidate silently; when
/// `params.filter_pregrasp` is set, both the grasp and the pregrasp
/// solve must succeed.
///
/// An empty result is not an error. Output order is non-deterministic
/// across runs; see the module docs.
///
/// # Errors
///
/// [`FilterError::InvalidParams`](crate::FilterError::InvalidParams) on
/// invalid parameters, [`FilterError::UnknownGroup`](crate::FilterError::UnknownGroup)
/// or [`FilterError::InsufficientCapacity`](crate::FilterError::InsufficientCapacity)
/// from the pool.
pub fn filter_grasps(
    pool: &mut SolverPool,
    poses: &[GraspPoseSet],
    group: &str,
    params: &FilterParams,
) -> FilterResult<Vec<GraspCandidate>> {
    params.validate()?;
    if poses.is_empty() {
        return Ok(Vec::new());
    }

    // No point spawning more workers than candidates.
    let worker_count = params.worker_count.min(poses.len());
    let ranges = split_ranges(poses.len(), worker_count);
    let handles = pool.partition(group, worker_count)?;

    debug!(
        candidates = poses.len(),
        workers = worker_count,
        group,
        filter_pregrasp = params.filter_pregrasp,
        "starting feasibility filter"
    );

    let survivors: Mutex<Vec<GraspCandidate>> = Mutex::new(Vec::with_capacity(poses.len()));

    thread::scope(|scope| {
        for (handle, range) in handles.into_iter().zip(ranges) {
            let survivors = &survivors;
            scope.spawn(move || {
                let local = evaluate_range(handle, poses, range, params);
                let mut shared = survivors
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                shared.extend(local);
            });
        }
    });

    let survivors = survivors
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);

    info!(
        candidates = poses.len(),
        feasible = survivors.len(),
        group,
        "feasibility filter complete"
    );
    Ok(survivors)
}

/// Evaluate one worker's index range against its private solver.
///
/// Candidates are constructed only after every required solve succeeds,
/// so no partially populated candidate ever leaves this function.
fn evaluate_range(
    handle: &mut SolverHandle,
    poses: &[GraspPoseSet],
    range: Range<usize>,
    params: &FilterParams,
) -> Vec<GraspCandidate> {
    let worker = handle.id();
    let mut local = Vec::new();

    for index in range.clone() {
        let pose_set = &poses[index];

        let Some(grasp_solution) =
            handle.solve_ik(&pose_set.grasp, params.ik_attempts, params.solve_timeout)
        else {
            trace!(worker, candidate = index, "grasp pose infeasible");
            continue;
        };

        let pregrasp_solution = if params.filter_pregrasp {
            match handle.solve_ik(&pose_set.pregrasp, params.ik_attempts, params.solve_timeout) {
                Some(solution) => Some(solution),
                None => {
                    trace!(worker, candidate = index, "pregrasp pose infeasible");
                    continue;
                }
            }
        } else {
            None
        };

        local.push(GraspCandidate::new(
            CandidateId::new(index),
            pose_set,
            grasp_solution,
            pregrasp_solution,
        ));
    }

    debug!(
        worker,
        range_start = range.start,
        range_end = range.end,
        kept = local.len(),
        "worker finished range"
    );
    local
}
