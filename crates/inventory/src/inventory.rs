//! Weight-capped, thread-safe container of [`Entry`] stacks.

use std::sync::{Mutex, MutexGuard, PoisonError};

use indexmap::IndexMap;
use tracing::{debug, warn};

use stockpile_core::{DomainError, DomainResult, Entity};

use crate::config::InventoryConfig;
use crate::entry::Entry;

/// State guarded by the inventory lock.
///
/// `total_weight` is always the sum of the stored weights; both fields change
/// together under one guard.
#[derive(Debug, Default)]
struct Stock {
    entries: IndexMap<String, Entry>,
    total_weight: u32,
}

/// Inventory: named stacks of weight, capped at a fixed total.
///
/// - One exclusive lock covers every operation, reads included
/// - Entries are unique by name and kept in insertion order
/// - Every read hands out clones; nothing returned aliases internal state
/// - Mutations are all-or-nothing: a rejected call leaves no trace
#[derive(Debug)]
pub struct Inventory {
    capacity: u32,
    stock: Mutex<Stock>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_config(InventoryConfig::default())
    }

    pub fn with_capacity(capacity: u32) -> Self {
        Self::with_config(InventoryConfig::default().with_capacity(capacity))
    }

    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            capacity: config.capacity,
            stock: Mutex::new(Stock::default()),
        }
    }

    // Writers validate before touching state, so a guard recovered from a
    // panicked holder still satisfies the weight invariants.
    fn lock(&self) -> MutexGuard<'_, Stock> {
        self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add `entry`'s weight, merging into an existing stack of the same name.
    ///
    /// Fails with `InvalidArgument` for a zero weight and `CapacityExceeded`
    /// when the new total would pass the capacity.
    pub fn add(&self, entry: &Entry) -> DomainResult<()> {
        let added = entry.weight();
        if added == 0 {
            warn!(item = entry.name(), "rejected add with zero weight");
            return Err(DomainError::invalid_argument("weight must be positive"));
        }

        let mut stock = self.lock();
        let current = stock.total_weight;
        let new_total = match current.checked_add(added) {
            Some(total) if total <= self.capacity => total,
            _ => {
                warn!(item = entry.name(), current, added, capacity = self.capacity, "add would exceed capacity");
                return Err(DomainError::capacity_exceeded(current, added, self.capacity));
            }
        };

        stock
            .entries
            .entry(entry.id().clone())
            .and_modify(|existing| existing.set_weight(existing.weight() + added))
            .or_insert_with(|| entry.clone());
        stock.total_weight = new_total;

        debug!(item = entry.name(), added, total = new_total, "entry added");
        Ok(())
    }

    /// Take `entry`'s weight off the stack with the same name.
    ///
    /// Returns `Ok(false)` if no such stack exists. A stack drained to zero is
    /// removed outright.
    pub fn remove(&self, entry: &Entry) -> DomainResult<bool> {
        let mut stock = self.lock();
        let Some(index) = stock.entries.get_index_of(entry.name()) else {
            return Ok(false);
        };

        let available = stock.entries[index].weight();
        let requested = entry.weight();
        if available < requested {
            warn!(item = entry.name(), requested, available, "remove exceeds stored weight");
            return Err(DomainError::insufficient_quantity(entry.name(), requested, available));
        }

        if available == requested {
            stock.entries.shift_remove_index(index);
        } else {
            stock.entries[index].set_weight(available - requested);
        }
        stock.total_weight -= requested;

        debug!(item = entry.name(), removed = requested, total = stock.total_weight, "entry removed");
        Ok(true)
    }

    /// Remove the whole stack called `name`, whatever its weight.
    pub fn remove_by_name(&self, name: &str) -> bool {
        let mut stock = self.lock();
        match stock.entries.shift_remove(name) {
            Some(removed) => {
                stock.total_weight -= removed.weight();
                debug!(item = name, removed = removed.weight(), total = stock.total_weight, "stack removed");
                true
            }
            None => false,
        }
    }

    /// Case-insensitive substring search over names, in storage order.
    ///
    /// A blank term matches nothing.
    pub fn find(&self, search_term: &str) -> Vec<Entry> {
        if search_term.trim().is_empty() {
            return Vec::new();
        }
        let needle = search_term.to_lowercase();

        self.lock()
            .entries
            .values()
            .filter(|e| e.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Snapshot of every stored entry, in storage order.
    pub fn items(&self) -> Vec<Entry> {
        self.lock().entries.values().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<Entry> {
        self.lock().entries.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lock().entries.contains_key(name)
    }

    pub fn current_weight(&self) -> u32 {
        self.lock().total_weight
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn remaining_capacity(&self) -> u32 {
        self.capacity - self.lock().total_weight
    }

    /// Number of distinct stacks.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn clear(&self) {
        let mut stock = self.lock();
        stock.entries.clear();
        stock.total_weight = 0;
        debug!("inventory cleared");
    }

    /// Iterate over a snapshot taken now; later mutations are not observed.
    pub fn iter(&self) -> std::vec::IntoIter<Entry> {
        self.items().into_iter()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
