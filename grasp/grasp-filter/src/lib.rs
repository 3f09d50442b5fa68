//! Grasp feasibility filtering.
//!
//! This crate reduces a large set of candidate grasp poses down to the
//! kinematically and collision-feasible subset, then selects one
//! candidate for execution:
//!
//! 1. [`filter_grasps`] - parallel IK feasibility over a fixed worker
//!    count, each worker holding its own exclusive solver handle
//! 2. [`filter_collisions`] - serial re-validation against a mutable
//!    world snapshot (read-modify-restore per candidate)
//! 3. [`choose`] - deterministic selection among the survivors
//!
//! [`run_filter_pipeline`] chains the three stages.
//!
//! # Concurrency Model
//!
//! The feasibility filter splits the input into contiguous index ranges,
//! one per worker, and runs the workers under a structured fork/join
//! ([`std::thread::scope`]). Each worker owns one [`SolverHandle`]
//! exclusively for the call's duration - the pool hands out disjoint
//! `&mut` borrows, so two workers sharing a solver's scratch state is
//! unrepresentable. Workers accumulate survivors locally and merge into
//! the shared output under one short-lived mutex lock per worker; the
//! lock is never held while solving.
//!
//! The call returns only after every worker has finished its whole range
//! (barrier join, no mid-flight cancellation). Output order is merge
//! order and therefore non-deterministic across runs; callers that need
//! determinism sort by [`CandidateId`](grasp_types::CandidateId).
//!
//! # Error Philosophy
//!
//! An IK failure (including a timeout) is *expected*, not exceptional:
//! the candidate is simply absent from the output. Errors are reserved
//! for misconfiguration ([`FilterError::InsufficientCapacity`],
//! [`FilterError::InvalidParams`]) and for the recoverable
//! "nothing survived" condition ([`FilterError::NoFeasibleGrasp`]).
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use grasp_filter::{FilterParams, KinematicsProvider, SolverPool, filter_grasps};
//! use grasp_types::{GraspPoseSet, Isometry3, JointConfiguration};
//!
//! struct ReachableBelow { max_x: f64 }
//!
//! impl KinematicsProvider for ReachableBelow {
//!     fn solve_ik(
//!         &mut self,
//!         pose: &Isometry3<f64>,
//!         _attempts: usize,
//!         _timeout: Duration,
//!     ) -> Option<JointConfiguration> {
//!         (pose.translation.x <= self.max_x)
//!             .then(|| JointConfiguration::new(vec![pose.translation.x]))
//!     }
//! }
//!
//! let mut pool = SolverPool::builder()
//!     .group("arm", (0..2).map(|_| {
//!         Box::new(ReachableBelow { max_x: 0.5 }) as Box<dyn KinematicsProvider>
//!     }))
//!     .build();
//!
//! let poses: Vec<GraspPoseSet> = (0..4)
//!     .map(|i| {
//!         let pose = Isometry3::translation(0.2 * f64::from(i), 0.0, 0.3);
//!         GraspPoseSet::new(pose, pose)
//!     })
//!     .collect();
//!
//! let params = FilterParams::default().worker_count(2);
//! let survivors = filter_grasps(&mut pool, &poses, "arm", &params).unwrap();
//! assert_eq!(survivors.len(), 3); // x = 0.0, 0.2, 0.4 reachable; 0.6 is not
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod collision;
mod error;
mod feasibility;
mod kinematics;
mod params;
mod pipeline;
mod pool;
mod selector;
mod world;

pub use collision::filter_collisions;
pub use error::{FilterError, FilterResult};
pub use feasibility::{filter_grasps, split_ranges};
pub use kinematics::KinematicsProvider;
pub use params::FilterParams;
pub use pipeline::run_filter_pipeline;
pub use pool::{SolverHandle, SolverPool, SolverPoolBuilder};
pub use selector::{choose, choose_scored};
pub use world::{ContactPair, WorldModel};
