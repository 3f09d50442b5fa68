//! The world-model interface used by the collision pass.

use grasp_types::JointConfiguration;

/// One contact between two named bodies.
///
/// The pair is unordered: gripper-touches-product and
/// product-touches-gripper are the same contact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactPair {
    /// First body name.
    pub first: String,
    /// Second body name.
    pub second: String,
}

impl ContactPair {
    /// Create a contact pair.
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Whether this pair involves the named body.
    #[must_use]
    pub fn involves(&self, body: &str) -> bool {
        self.first == body || self.second == body
    }

    /// Order-insensitive equality.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

/// A mutable snapshot of the robot-and-world state.
///
/// The collision pass applies a candidate's joint configuration to the
/// snapshot, queries validity, and restores the prior state before the
/// next candidate - a read-modify-restore cycle. The snapshot is not
/// safely shareable across concurrent mutation, which is why the
/// collision filter is single-threaded by contract: the caller hands
/// over `&mut` and nothing else touches the world during the pass.
///
/// Collision geometry, distance queries, and scene management are
/// external; implementors wrap the planning scene the robot already
/// maintains.
pub trait WorldModel {
    /// The configuration currently applied to the snapshot.
    fn current_configuration(&self) -> JointConfiguration;

    /// Apply a joint configuration to the snapshot.
    fn apply_configuration(&mut self, configuration: &JointConfiguration);

    /// Restore a previously captured configuration.
    fn restore(&mut self, previous: &JointConfiguration);

    /// Whether the applied state is collision-free, ignoring the
    /// explicitly allowed contacts (e.g. the gripper touching the very
    /// product it intends to grasp).
    fn is_state_valid(&self, allowed_contacts: &[ContactPair]) -> bool;

    /// The contacts present in the applied state, for diagnostics.
    fn contacts(&self) -> Vec<ContactPair>;
}
