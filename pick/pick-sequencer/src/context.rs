//! Per-run working state.

use grasp_types::{GraspCandidate, JointConfiguration, ProductId, WorkOrder};
use tracing::debug;

/// Working state carried across the steps of one pick run.
///
/// Owned solely by the run instance; runs are serialized, so this is
/// never shared. Steps read and write it explicitly instead of mutating
/// shared robot-state pointers.
#[derive(Debug)]
pub struct PickContext {
    order: WorkOrder,
    /// The grasp chosen by the filtering pipeline, set by the
    /// compute-grasp step.
    pub candidate: Option<GraspCandidate>,
    /// The robot posture after the most recent motion.
    pub posture: Option<JointConfiguration>,
    /// The kinematic group chosen for this pick.
    pub arm: Option<String>,
    /// Object currently attached to the end effector, if any.
    pub attached_product: Option<ProductId>,
    /// Transient scene markers (debug visuals, temporary allowed
    /// contacts) to clear on terminal transition.
    pub transient_markers: Vec<String>,
}

impl PickContext {
    /// Create fresh working state for one dispatched order.
    #[must_use]
    pub fn new(order: WorkOrder) -> Self {
        Self {
            order,
            candidate: None,
            posture: None,
            arm: None,
            attached_product: None,
            transient_markers: Vec::new(),
        }
    }

    /// The order this run is executing. Immutable for the run's life.
    #[must_use]
    pub const fn order(&self) -> &WorkOrder {
        &self.order
    }

    /// Detach any attached object representation and clear transient
    /// markers. Called exactly once per terminal transition.
    pub(crate) fn cleanup(&mut self) {
        if let Some(product) = self.attached_product.take() {
            debug!(%product, "detached object on terminal transition");
        }
        if !self.transient_markers.is_empty() {
            debug!(
                markers = self.transient_markers.len(),
                "cleared transient markers"
            );
            self.transient_markers.clear();
        }
    }
}
