//! The solver pool: exclusively owned IK contexts, one per worker.
//!
//! The pool owns a fixed set of [`SolverHandle`]s per kinematic group,
//! created once at initialization and reused across filtering calls.
//! Handles are lent out as `&mut` borrows, so exclusivity is enforced by
//! the borrow checker rather than by runtime checkout bookkeeping: two
//! overlapping partitions of the same group cannot exist because both
//! would need a mutable borrow of the pool.
//!
//! There is no dynamic growth. A group provisioned with three handles
//! can never serve four workers; [`SolverPool::partition`] reports
//! [`FilterError::InsufficientCapacity`] instead.

use hashbrown::HashMap;
use std::time::Duration;

use grasp_types::JointConfiguration;
use nalgebra::Isometry3;
use tracing::debug;

use crate::error::{FilterError, FilterResult};
use crate::kinematics::KinematicsProvider;

/// One exclusively owned IK-solving context.
///
/// Wraps a [`KinematicsProvider`] instance together with its slot id in
/// the pool. While a worker holds the `&mut SolverHandle`, no other
/// worker can touch the underlying solver.
pub struct SolverHandle {
    id: usize,
    group: String,
    provider: Box<dyn KinematicsProvider>,
}

impl SolverHandle {
    /// Slot index of this handle within its group.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// The kinematic group this handle solves for.
    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Solve IK for `pose` on this handle's private solver.
    pub fn solve_ik(
        &mut self,
        pose: &Isometry3<f64>,
        attempts: usize,
        timeout: Duration,
    ) -> Option<JointConfiguration> {
        self.provider.solve_ik(pose, attempts, timeout)
    }
}

impl std::fmt::Debug for SolverHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolverHandle")
            .field("id", &self.id)
            .field("group", &self.group)
            .finish_non_exhaustive()
    }
}

/// Builder for [`SolverPool`]: provision each group with its full,
/// final handle count.
#[derive(Default)]
pub struct SolverPoolBuilder {
    groups: HashMap<String, Vec<SolverHandle>>,
}

impl SolverPoolBuilder {
    /// Provision a kinematic group with one handle per provider.
    ///
    /// The number of providers given here is the most parallelism the
    /// group will ever support.
    #[must_use]
    pub fn group(
        mut self,
        name: impl Into<String>,
        providers: impl IntoIterator<Item = Box<dyn KinematicsProvider>>,
    ) -> Self {
        let name = name.into();
        let handles: Vec<SolverHandle> = providers
            .into_iter()
            .enumerate()
            .map(|(id, provider)| SolverHandle {
                id,
                group: name.clone(),
                provider,
            })
            .collect();
        debug!(group = %name, handles = handles.len(), "provisioned solver group");
        self.groups.insert(name, handles);
        self
    }

    /// Finish building the pool.
    #[must_use]
    pub fn build(self) -> SolverPool {
        SolverPool {
            groups: self.groups,
        }
    }
}

/// A fixed-capacity pool of IK solver handles, keyed by kinematic group.
///
/// Created once at engine initialization, reused across many filtering
/// calls, dropped at shutdown.
pub struct SolverPool {
    groups: HashMap<String, Vec<SolverHandle>>,
}

impl SolverPool {
    /// Start building a pool.
    #[must_use]
    pub fn builder() -> SolverPoolBuilder {
        SolverPoolBuilder::default()
    }

    /// Number of handles provisioned for `group` (0 if unknown).
    #[must_use]
    pub fn handle_count(&self, group: &str) -> usize {
        self.groups.get(group).map_or(0, Vec::len)
    }

    /// Borrow one handle exclusively.
    ///
    /// The handle is released when the borrow ends; until then no other
    /// caller can acquire from the pool at all.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownGroup`] if the group was never provisioned,
    /// [`FilterError::InsufficientCapacity`] if it holds no handles.
    pub fn acquire(&mut self, group: &str) -> FilterResult<&mut SolverHandle> {
        let handles = self
            .groups
            .get_mut(group)
            .ok_or_else(|| FilterError::unknown_group(group))?;
        handles
            .first_mut()
            .ok_or_else(|| FilterError::insufficient_capacity(group, 0, 1))
    }

    /// Borrow exactly `worker_count` distinct handles for `group`.
    ///
    /// The returned borrows are disjoint, so each may be moved into its
    /// own worker thread. Overlapping partitions of one group cannot be
    /// constructed: both would need to borrow the pool mutably.
    ///
    /// # Errors
    ///
    /// [`FilterError::UnknownGroup`] if the group was never provisioned,
    /// [`FilterError::InsufficientCapacity`] if fewer than
    /// `worker_count` handles exist for it.
    pub fn partition(
        &mut self,
        group: &str,
        worker_count: usize,
    ) -> FilterResult<Vec<&mut SolverHandle>> {
        let handles = self
            .groups
            .get_mut(group)
            .ok_or_else(|| FilterError::unknown_group(group))?;
        if handles.len() < worker_count {
            return Err(FilterError::insufficient_capacity(
                group,
                handles.len(),
                worker_count,
            ));
        }
        Ok(handles.iter_mut().take(worker_count).collect())
    }
}

impl std::fmt::Debug for SolverPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<(&str, usize)> = self
            .groups
            .iter()
            .map(|(name, handles)| (name.as_str(), handles.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("SolverPool").field("groups", &counts).finish()
    }
}
