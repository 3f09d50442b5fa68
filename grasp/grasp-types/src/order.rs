//! Work orders: which product to pick from which bin.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a source container (shelf bin).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BinId(String);

impl BinId {
    /// Create a bin id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The bin's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a target object (product) inside a bin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product id.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The product's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of work: pick `product` out of `bin` and relocate it.
///
/// Immutable once dispatched to the sequencer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkOrder {
    bin: BinId,
    product: ProductId,
}

impl WorkOrder {
    /// Create a work order for one (bin, product) pair.
    #[must_use]
    pub const fn new(bin: BinId, product: ProductId) -> Self {
        Self { bin, product }
    }

    /// The source container.
    #[must_use]
    pub const fn bin(&self) -> &BinId {
        &self.bin
    }

    /// The target object.
    #[must_use]
    pub const fn product(&self) -> &ProductId {
        &self.product
    }
}

impl fmt::Display for WorkOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {}", self.product, self.bin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_work_order_accessors() {
        let order = WorkOrder::new(BinId::new("bin_A"), ProductId::new("oreo_mega_stuf"));
        assert_eq!(order.bin().as_str(), "bin_A");
        assert_eq!(order.product().as_str(), "oreo_mega_stuf");
        assert_eq!(format!("{order}"), "oreo_mega_stuf from bin_A");
    }

    #[test]
    fn test_ids_hashable() {
        let mut set = std::collections::HashSet::new();
        set.insert(BinId::new("bin_A"));
        set.insert(BinId::new("bin_A"));
        assert_eq!(set.len(), 1);
    }
}
