//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a synchronous rejection: the operation that returned it
/// left no trace in the state it was called on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation (e.g. zero weight, blank name).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Accepting the weight would push the total above the capacity.
    #[error(
        "cannot add item: weight would exceed maximum (current: {current}, added: {added}, max: {capacity})"
    )]
    CapacityExceeded {
        current: u32,
        added: u32,
        capacity: u32,
    },

    /// A removal asked for more weight than the stack holds.
    #[error("cannot remove {requested} weight of '{name}': only {available} stored")]
    InsufficientQuantity {
        name: String,
        requested: u32,
        available: u32,
    },
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn capacity_exceeded(current: u32, added: u32, capacity: u32) -> Self {
        Self::CapacityExceeded {
            current,
            added,
            capacity,
        }
    }

    pub fn insufficient_quantity(name: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientQuantity {
            name: name.into(),
            requested,
            available,
        }
    }
}
