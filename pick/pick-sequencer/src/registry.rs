//! Bin/product bookkeeping.

use hashbrown::HashMap;

use grasp_types::{BinId, ProductId};
use tracing::{debug, warn};

/// Tracks which products each bin currently holds.
///
/// The sequencer removes a picked order's product from its bin exactly
/// once, on successful completion. Shelf geometry and collision bodies
/// are out of scope; this is only the contents ledger.
pub trait ContainerRegistry {
    /// Remove `product` from `bin`. Returns whether it was present.
    fn remove_object(&mut self, bin: &BinId, product: &ProductId) -> bool;

    /// The products currently tracked in `bin`.
    fn list_objects(&self, bin: &BinId) -> Vec<ProductId>;
}

/// In-memory contents ledger.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    bins: HashMap<BinId, Vec<ProductId>>,
}

impl MemoryRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `bin` holds `product`.
    pub fn add_object(&mut self, bin: BinId, product: ProductId) {
        self.bins.entry(bin).or_default().push(product);
    }
}

impl ContainerRegistry for MemoryRegistry {
    fn remove_object(&mut self, bin: &BinId, product: &ProductId) -> bool {
        let Some(contents) = self.bins.get_mut(bin) else {
            warn!(%bin, %product, "remove from unknown bin");
            return false;
        };
        let Some(position) = contents.iter().position(|held| held == product) else {
            warn!(%bin, %product, "product not tracked in bin");
            return false;
        };
        contents.remove(position);
        debug!(%bin, %product, remaining = contents.len(), "removed product from bin");
        true
    }

    fn list_objects(&self, bin: &BinId) -> Vec<ProductId> {
        self.bins.get(bin).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin() -> BinId {
        BinId::new("bin_C")
    }

    #[test]
    fn test_remove_tracked_product() {
        let mut registry = MemoryRegistry::new();
        registry.add_object(bin(), ProductId::new("glue"));
        registry.add_object(bin(), ProductId::new("soap"));

        assert!(registry.remove_object(&bin(), &ProductId::new("glue")));
        let remaining = registry.list_objects(&bin());
        assert_eq!(remaining, vec![ProductId::new("soap")]);
    }

    #[test]
    fn test_remove_twice_fails_second_time() {
        let mut registry = MemoryRegistry::new();
        registry.add_object(bin(), ProductId::new("glue"));

        assert!(registry.remove_object(&bin(), &ProductId::new("glue")));
        assert!(!registry.remove_object(&bin(), &ProductId::new("glue")));
    }

    #[test]
    fn test_unknown_bin_is_empty() {
        let registry = MemoryRegistry::new();
        assert!(registry.list_objects(&bin()).is_empty());
    }

    #[test]
    fn test_duplicate_products_removed_one_at_a_time() {
        let mut registry = MemoryRegistry::new();
        registry.add_object(bin(), ProductId::new("glue"));
        registry.add_object(bin(), ProductId::new("glue"));

        assert!(registry.remove_object(&bin(), &ProductId::new("glue")));
        assert_eq!(registry.list_objects(&bin()).len(), 1);
    }
}
