//! Core types for grasp filtering and pick sequencing.
//!
//! This crate provides the foundational types shared by the grasp
//! feasibility pipeline and the pick-operation sequencer:
//!
//! - [`GraspPoseSet`] - One grasp hypothesis (grasp pose + pregrasp pose)
//! - [`GraspCandidate`] - A fully evaluated, IK-feasible grasp
//! - [`JointConfiguration`] - One solved arm posture
//! - [`Trajectory`] / [`PathSegments`] - Executable joint-space paths
//! - [`WorkOrder`] - One (bin, product) pair to pick and relocate
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no solving, no collision
//! checking, no sequencing. They're the common language between:
//!
//! - The feasibility filters (grasp-filter)
//! - The task sequencer (pick-sequencer)
//! - Perception and trajectory generation (external collaborators)
//!
//! # Invariants
//!
//! A [`GraspCandidate`] is only ever constructed whole: its grasp IK
//! solution is always present, and its pregrasp solution is present
//! exactly when pregrasp filtering was requested and succeeded. There is
//! no partially populated state to observe.
//!
//! # Example
//!
//! ```
//! use grasp_types::{CandidateId, GraspCandidate, GraspPoseSet, JointConfiguration};
//! use nalgebra::{Isometry3, Translation3, UnitQuaternion};
//!
//! let poses = GraspPoseSet::new(
//!     Isometry3::from_parts(Translation3::new(0.4, 0.0, 0.2), UnitQuaternion::identity()),
//!     Isometry3::from_parts(Translation3::new(0.3, 0.0, 0.2), UnitQuaternion::identity()),
//! );
//!
//! let candidate = GraspCandidate::new(
//!     CandidateId::new(0),
//!     &poses,
//!     JointConfiguration::new(vec![0.0, 0.5, -0.5, 0.0, 1.0, 0.0]),
//!     None,
//! );
//!
//! assert_eq!(candidate.id.index(), 0);
//! assert!(candidate.pregrasp_solution.is_none());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod candidate;
mod order;
mod trajectory;

pub use candidate::{CandidateId, GraspCandidate, GraspPoseSet, JointConfiguration};
pub use order::{BinId, ProductId, WorkOrder};
pub use trajectory::{PathSegments, Trajectory};

// Re-export math types for convenience
pub use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
