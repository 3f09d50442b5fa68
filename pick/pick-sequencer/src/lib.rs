//! Resumable, steppable sequencing of pick operations.
//!
//! A pick operation is an ordered list of named physical steps (open
//! gripper, locate product, compute grasp, approach, grasp, lift, ...).
//! This crate makes that list *data* rather than control flow:
//!
//! - [`StepList`] - the fixed, contiguously indexed step definitions
//! - [`TaskSequencer`] - drives one [`WorkOrder`](grasp_types::WorkOrder)
//!   through the list, one run at a time
//! - [`PickContext`] - per-run working state, owned solely by the run
//! - [`OperatorGate`] - the human-in-the-loop authorization point
//!
//! # Run Semantics
//!
//! A run proceeds in strict index order. Before each step the gate is
//! consulted: in supervised mode that blocks until the operator
//! authorizes the step (the run's sole cancellable suspension point);
//! [`AutonomousGate`] proceeds immediately. A run may start at a
//! non-zero index ("jump to step N") to resume after an external fix -
//! the caller asserts that the skipped steps' physical effects already
//! hold.
//!
//! Any step failure is fatal to the current run: no automatic retry, no
//! execution beyond the failing step. The caller decides whether to
//! abandon the order, retry from step 0, or re-dispatch with a jump.
//! Cleanup (detaching any attached object, clearing transient markers,
//! plus an optional caller hook) runs exactly once per terminal
//! transition, whichever step failed.
//!
//! # Example
//!
//! ```
//! use grasp_types::{BinId, ProductId, WorkOrder};
//! use pick_sequencer::{
//!     AutonomousGate, MemoryRegistry, RunOptions, StepList, TaskSequencer,
//! };
//!
//! let steps = StepList::new()
//!     .step("open gripper", |_ctx, _res: &mut ()| Ok(()))
//!     .step("locate product", |_ctx, _res| Ok(()));
//!
//! let mut sequencer = TaskSequencer::new(steps).unwrap();
//! let mut registry = MemoryRegistry::new();
//! registry.add_object(BinId::new("bin_A"), ProductId::new("crayola_64_ct"));
//!
//! let order = WorkOrder::new(BinId::new("bin_A"), ProductId::new("crayola_64_ct"));
//! let report = sequencer
//!     .run(order, &mut (), &mut AutonomousGate, &mut registry, &RunOptions::default())
//!     .unwrap();
//!
//! assert_eq!(report.steps_executed, 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod context;
mod error;
mod executor;
mod gate;
mod registry;
mod sequencer;
mod step;

pub use context::PickContext;
pub use error::{MotionError, SequencerError, SequencerResult, StepError, StepResult};
pub use executor::MotionExecutor;
pub use gate::{AutonomousGate, ChannelGate, GateCommand, GateDecision, OperatorGate};
pub use registry::{ContainerRegistry, MemoryRegistry};
pub use sequencer::{CleanupHook, RunOptions, RunReport, RunState, TaskSequencer};
pub use step::{StepList, TaskStep, PICK_STEP_LABELS};
