//! A named stack of weight.

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use stockpile_core::{DomainError, DomainResult, Entity};

/// Entry: one kind of stored item and its quantity.
///
/// Identity is the `name` alone: two entries with the same name compare equal
/// (and hash identically) whatever their weights. `Clone` yields a fully
/// independent copy, so a caller never shares state with an `Inventory`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    name: String,
    weight: u32,
}

impl Entry {
    pub fn new(name: impl Into<String>, weight: u32) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }

    /// Like [`Entry::new`], but rejects a blank name or a zero weight.
    pub fn try_new(name: impl Into<String>, weight: u32) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name cannot be empty"));
        }
        if weight == 0 {
            return Err(DomainError::invalid_argument("weight must be positive"));
        }
        Ok(Self { name, weight })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: u32) {
        self.weight = weight;
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Entity for Entry {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
