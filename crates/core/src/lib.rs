//! `stockpile-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no locking, no logging).

pub mod entity;
pub mod error;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
