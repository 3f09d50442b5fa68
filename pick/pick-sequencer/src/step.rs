//! Steps as data: the ordered definitions of one pick operation.

use crate::context::PickContext;
use crate::error::StepResult;

/// The canonical step sequence of a shelf pick, in execution order.
///
/// Fixed per pick-operation type; a run instance only tracks its
/// current index into a list shaped like this.
pub const PICK_STEP_LABELS: [&str; 10] = [
    "open gripper",
    "locate product",
    "compute grasp",
    "move to pregrasp",
    "approach",
    "grasp",
    "lift",
    "retreat",
    "place",
    "release",
];

/// A step's side-effecting action: from current working state (and the
/// caller's resource bundle `R` - motion executor, perception, world
/// handles) to success or failure, possibly mutating both.
pub type StepAction<R> = Box<dyn FnMut(&mut PickContext, &mut R) -> StepResult<()>>;

/// One named unit of physical work within a pick operation.
pub struct TaskStep<R> {
    index: usize,
    label: String,
    action: StepAction<R>,
}

impl<R> TaskStep<R> {
    /// This step's index in its list.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Human-readable status label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn execute(&mut self, ctx: &mut PickContext, resources: &mut R) -> StepResult<()> {
        (self.action)(ctx, resources)
    }
}

impl<R> std::fmt::Debug for TaskStep<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStep")
            .field("index", &self.index)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// An ordered list of step definitions with strictly increasing,
/// contiguous indices.
///
/// Built once per pick-operation type and handed to a
/// [`TaskSequencer`](crate::TaskSequencer); indices are assigned by the
/// builder, so gaps and reordering are unrepresentable.
///
/// # Example
///
/// ```
/// use pick_sequencer::StepList;
///
/// let steps = StepList::<()>::new()
///     .step("open gripper", |_ctx, _res| Ok(()))
///     .step("locate product", |_ctx, _res| Ok(()));
///
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps.labels(), vec!["open gripper", "locate product"]);
/// ```
pub struct StepList<R> {
    steps: Vec<TaskStep<R>>,
}

impl<R> StepList<R> {
    /// Start an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step; its index is the current list length.
    #[must_use]
    pub fn step(
        mut self,
        label: impl Into<String>,
        action: impl FnMut(&mut PickContext, &mut R) -> StepResult<()> + 'static,
    ) -> Self {
        self.steps.push(TaskStep {
            index: self.steps.len(),
            label: label.into(),
            action: Box::new(action),
        });
        self
    }

    /// Number of defined steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the list defines no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The step labels, in index order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.label()).collect()
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut TaskStep<R>> {
        self.steps.get_mut(index)
    }
}

impl<R> Default for StepList<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> std::fmt::Debug for StepList<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepList").field("labels", &self.labels()).finish()
    }
}
