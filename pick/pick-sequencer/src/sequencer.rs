//! The run state machine driving one pick operation.

use grasp_types::WorkOrder;
use tracing::{debug, error, info, warn};

use crate::context::PickContext;
use crate::error::{SequencerError, SequencerResult};
use crate::gate::{GateDecision, OperatorGate};
use crate::registry::ContainerRegistry;
use crate::step::StepList;

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Created, nothing executed yet.
    Idle,
    /// Blocked on operator authorization for the given step.
    AwaitingOperator(usize),
    /// The given step's action is running.
    Executing(usize),
    /// Terminal: the given step failed (the error carries the cause).
    Failed {
        /// Index of the failing step.
        step: usize,
    },
    /// Terminal: every step succeeded.
    Completed,
}

/// Options for starting one run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Start at this step index, skipping steps `0..start_at` without
    /// executing their actions. An explicit trust boundary: the caller
    /// asserts the skipped steps' physical effects already hold.
    pub start_at: usize,
}

impl RunOptions {
    /// Set the jump-to-step override.
    #[must_use]
    pub const fn start_at(mut self, step: usize) -> Self {
        self.start_at = step;
        self
    }
}

/// Outcome of a run that reached `Completed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Terminal state (always [`RunState::Completed`] on the success
    /// path; failures travel as [`SequencerError`]).
    pub state: RunState,
    /// How many step actions actually executed (excludes skipped ones).
    pub steps_executed: usize,
}

/// Cleanup hook invoked exactly once per terminal transition, after the
/// context's own cleanup.
pub type CleanupHook<R> = Box<dyn FnMut(&mut PickContext, &mut R)>;

/// Drives work orders through a fixed step list, one run at a time.
///
/// `&mut self` serializes runs: two concurrent pick operations on one
/// sequencer are unrepresentable, so per-run working state is never
/// shared.
pub struct TaskSequencer<R> {
    steps: StepList<R>,
    cleanup: Option<CleanupHook<R>>,
}

impl<R> TaskSequencer<R> {
    /// Create a sequencer over a fixed step list.
    ///
    /// # Errors
    ///
    /// [`SequencerError::EmptyStepList`] if the list defines no steps.
    pub fn new(steps: StepList<R>) -> SequencerResult<Self> {
        if steps.is_empty() {
            return Err(SequencerError::EmptyStepList);
        }
        Ok(Self {
            steps,
            cleanup: None,
        })
    }

    /// Install a cleanup hook, run exactly once per terminal
    /// transition (after detaching objects and clearing markers).
    #[must_use]
    pub fn with_cleanup(mut self, hook: impl FnMut(&mut PickContext, &mut R) + 'static) -> Self {
        self.cleanup = Some(Box::new(hook));
        self
    }

    /// Number of defined steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Execute one run for `order`.
    ///
    /// Steps run in strict index order from `options.start_at`. Before
    /// each step the gate is consulted (the sole cancellable suspension
    /// point); then the step's action runs against the working state.
    /// On full success the order's product is removed from its bin and
    /// the report carries [`RunState::Completed`].
    ///
    /// # Errors
    ///
    /// - [`SequencerError::InvalidJumpTarget`] if `start_at` names no step
    /// - [`SequencerError::OperatorCancelled`] if the gate cancels a wait
    /// - [`SequencerError::StepFailed`] if a step's action fails; no step
    ///   beyond it executes and nothing is retried automatically
    ///
    /// Cleanup runs exactly once whichever way the run terminates.
    pub fn run(
        &mut self,
        order: WorkOrder,
        resources: &mut R,
        gate: &mut dyn OperatorGate,
        registry: &mut dyn ContainerRegistry,
        options: &RunOptions,
    ) -> SequencerResult<RunReport> {
        let step_count = self.steps.len();
        if options.start_at >= step_count {
            return Err(SequencerError::InvalidJumpTarget {
                requested: options.start_at,
                step_count,
            });
        }

        let Self { steps, cleanup } = self;
        let mut ctx = PickContext::new(order);
        let mut state = RunState::Idle;
        let mut executed = 0;

        info!(order = %ctx.order(), start_at = options.start_at, "starting pick run");
        if options.start_at > 0 {
            warn!(
                skipped = options.start_at,
                "jump-to-step override: caller asserts skipped steps' effects hold"
            );
        }

        for index in options.start_at..step_count {
            let Some(step) = steps.get_mut(index) else {
                break; // unreachable: index < step_count
            };

            transition(&mut state, RunState::AwaitingOperator(index));
            if gate.await_next_step(step.label()) == GateDecision::Cancelled {
                transition(&mut state, RunState::Failed { step: index });
                finish(cleanup, &mut ctx, resources);
                return Err(SequencerError::OperatorCancelled {
                    step: index,
                    label: step.label().to_owned(),
                });
            }

            transition(&mut state, RunState::Executing(index));
            if let Err(cause) = step.execute(&mut ctx, resources) {
                error!(
                    order = %ctx.order(),
                    step = index,
                    label = step.label(),
                    %cause,
                    "step failed, run is terminal"
                );
                transition(&mut state, RunState::Failed { step: index });
                finish(cleanup, &mut ctx, resources);
                return Err(SequencerError::StepFailed {
                    step: index,
                    label: step.label().to_owned(),
                    source: cause,
                });
            }
            executed += 1;
        }

        transition(&mut state, RunState::Completed);
        if !registry.remove_object(ctx.order().bin(), ctx.order().product()) {
            warn!(order = %ctx.order(), "completed order's product was not tracked in its bin");
        }
        finish(cleanup, &mut ctx, resources);
        info!(order = %ctx.order(), steps = executed, "pick run completed");

        Ok(RunReport {
            state,
            steps_executed: executed,
        })
    }
}

impl<R> std::fmt::Debug for TaskSequencer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskSequencer")
            .field("steps", &self.steps)
            .field("has_cleanup", &self.cleanup.is_some())
            .finish()
    }
}

fn transition(state: &mut RunState, next: RunState) {
    debug!(from = ?state, to = ?next, "run transition");
    *state = next;
}

/// Terminal-transition cleanup: context transients first, then the
/// caller's hook.
fn finish<R>(cleanup: &mut Option<CleanupHook<R>>, ctx: &mut PickContext, resources: &mut R) {
    ctx.cleanup();
    if let Some(hook) = cleanup.as_mut() {
        hook(ctx, resources);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::StepError;
    use crate::gate::{AutonomousGate, ChannelGate, GateCommand};
    use crate::registry::MemoryRegistry;
    use grasp_types::{BinId, ProductId};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Per-test resource bundle: records which step indices executed.
    #[derive(Default)]
    struct Recorder {
        executed: Vec<usize>,
    }

    fn order() -> WorkOrder {
        WorkOrder::new(BinId::new("bin_A"), ProductId::new("oreo_mega_stuf"))
    }

    fn stocked_registry() -> MemoryRegistry {
        let mut registry = MemoryRegistry::new();
        registry.add_object(BinId::new("bin_A"), ProductId::new("oreo_mega_stuf"));
        registry
    }

    /// N recording steps, all succeeding.
    fn recording_steps(count: usize) -> StepList<Recorder> {
        let mut list = StepList::new();
        for index in 0..count {
            list = list.step(format!("step {index}"), move |_ctx, recorder: &mut Recorder| {
                recorder.executed.push(index);
                Ok(())
            });
        }
        list
    }

    #[test]
    fn test_full_run_completes() {
        let mut sequencer = TaskSequencer::new(recording_steps(5)).unwrap();
        let mut recorder = Recorder::default();
        let mut registry = stocked_registry();

        let report = sequencer
            .run(
                order(),
                &mut recorder,
                &mut AutonomousGate,
                &mut registry,
                &RunOptions::default(),
            )
            .unwrap();

        assert_eq!(report.state, RunState::Completed);
        assert_eq!(report.steps_executed, 5);
        assert_eq!(recorder.executed, vec![0, 1, 2, 3, 4]);
        // Product removed from its bin exactly once.
        assert!(registry.list_objects(&BinId::new("bin_A")).is_empty());
    }

    #[test]
    fn test_jump_to_step_skips_earlier_actions() {
        let mut sequencer = TaskSequencer::new(recording_steps(6)).unwrap();
        let mut recorder = Recorder::default();
        let mut registry = stocked_registry();

        let report = sequencer
            .run(
                order(),
                &mut recorder,
                &mut AutonomousGate,
                &mut registry,
                &RunOptions::default().start_at(3),
            )
            .unwrap();

        assert_eq!(report.steps_executed, 3);
        assert_eq!(recorder.executed, vec![3, 4, 5]);
    }

    #[test]
    fn test_jump_target_out_of_range() {
        let mut sequencer = TaskSequencer::new(recording_steps(4)).unwrap();
        let mut recorder = Recorder::default();
        let mut registry = stocked_registry();

        let err = sequencer
            .run(
                order(),
                &mut recorder,
                &mut AutonomousGate,
                &mut registry,
                &RunOptions::default().start_at(4),
            )
            .unwrap_err();

        assert!(matches!(err, SequencerError::InvalidJumpTarget { requested: 4, step_count: 4 }));
        assert!(recorder.executed.is_empty());
    }

    #[test]
    fn test_step_failure_is_fatal_and_cleans_up_once() {
        let cleanups = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&cleanups);

        let steps = StepList::new()
            .step("ok", |_ctx, recorder: &mut Recorder| {
                recorder.executed.push(0);
                Ok(())
            })
            .step("boom", |_ctx, recorder: &mut Recorder| {
                recorder.executed.push(1);
                Err(StepError::other("gripper jammed"))
            })
            .step("never", |_ctx, recorder: &mut Recorder| {
                recorder.executed.push(2);
                Ok(())
            });

        let mut sequencer = TaskSequencer::new(steps)
            .unwrap()
            .with_cleanup(move |_ctx, _recorder| {
                *counter.borrow_mut() += 1;
            });
        let mut recorder = Recorder::default();
        let mut registry = stocked_registry();

        let err = sequencer
            .run(
                order(),
                &mut recorder,
                &mut AutonomousGate,
                &mut registry,
                &RunOptions::default(),
            )
            .unwrap_err();

        match err {
            SequencerError::StepFailed { step, label, .. } => {
                assert_eq!(step, 1);
                assert_eq!(label, "boom");
            }
            other => panic!("expected StepFailed, got {other:?}"),
        }
        // Step 2 never ran; cleanup ran exactly once; product not removed.
        assert_eq!(recorder.executed, vec![0, 1]);
        assert_eq!(*cleanups.borrow(), 1);
        assert_eq!(registry.list_objects(&BinId::new("bin_A")).len(), 1);
    }

    #[test]
    fn test_operator_cancellation_is_fatal() {
        let cleanups = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&cleanups);

        let mut sequencer = TaskSequencer::new(recording_steps(3))
            .unwrap()
            .with_cleanup(move |_ctx, _recorder| {
                *counter.borrow_mut() += 1;
            });
        let mut recorder = Recorder::default();
        let mut registry = stocked_registry();

        let (mut gate, tx) = ChannelGate::new();
        tx.send(GateCommand::Proceed).ok();
        tx.send(GateCommand::Cancel).ok();

        let err = sequencer
            .run(
                order(),
                &mut recorder,
                &mut gate,
                &mut registry,
                &RunOptions::default(),
            )
            .unwrap_err();

        match err {
            SequencerError::OperatorCancelled { step, .. } => assert_eq!(step, 1),
            other => panic!("expected OperatorCancelled, got {other:?}"),
        }
        assert_eq!(recorder.executed, vec![0]);
        assert_eq!(*cleanups.borrow(), 1);
    }

    #[test]
    fn test_cleanup_runs_once_on_success_too() {
        let cleanups = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&cleanups);

        let mut sequencer = TaskSequencer::new(recording_steps(2))
            .unwrap()
            .with_cleanup(move |_ctx, _recorder| {
                *counter.borrow_mut() += 1;
            });
        let mut recorder = Recorder::default();
        let mut registry = stocked_registry();

        sequencer
            .run(
                order(),
                &mut recorder,
                &mut AutonomousGate,
                &mut registry,
                &RunOptions::default(),
            )
            .unwrap();

        assert_eq!(*cleanups.borrow(), 1);
    }

    #[test]
    fn test_empty_step_list_rejected() {
        assert!(matches!(
            TaskSequencer::<Recorder>::new(StepList::new()),
            Err(SequencerError::EmptyStepList)
        ));
    }

    #[test]
    fn test_runs_are_reusable_after_failure() {
        // A failed run is terminal for the *run*, not the sequencer:
        // the work order may be re-dispatched as a fresh run.
        let fail_first = Rc::new(RefCell::new(true));
        let flag = Rc::clone(&fail_first);

        let steps = StepList::new().step("flaky", move |_ctx, _res: &mut Recorder| {
            if flag.replace(false) {
                Err(StepError::other("transient"))
            } else {
                Ok(())
            }
        });

        let mut sequencer = TaskSequencer::new(steps).unwrap();
        let mut recorder = Recorder::default();
        let mut registry = stocked_registry();

        assert!(sequencer
            .run(
                order(),
                &mut recorder,
                &mut AutonomousGate,
                &mut registry,
                &RunOptions::default(),
            )
            .is_err());

        let report = sequencer
            .run(
                order(),
                &mut recorder,
                &mut AutonomousGate,
                &mut registry,
                &RunOptions::default(),
            )
            .unwrap();
        assert_eq!(report.state, RunState::Completed);
    }
}
