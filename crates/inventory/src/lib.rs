//! Inventory domain module.
//!
//! A thread-safe, weight-capped collection of named stacks. Pure in-memory
//! logic: no IO, no persistence, no async.

pub mod config;
pub mod entry;
pub mod inventory;

pub use config::{DEFAULT_CAPACITY, InventoryConfig};
pub use entry::Entry;
pub use inventory::Inventory;
pub use stockpile_core::{DomainError, DomainResult};
