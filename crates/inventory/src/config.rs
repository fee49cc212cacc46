//! Construction-time settings for an [`Inventory`](crate::Inventory).

use serde::{Deserialize, Serialize};

/// Capacity used by [`InventoryConfig::default`].
pub const DEFAULT_CAPACITY: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Upper bound on the summed weight of all stored entries.
    pub capacity: u32,
}

impl InventoryConfig {
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
