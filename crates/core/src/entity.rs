//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Containers use the identity to decide whether two values occupy the same
/// slot, independent of any other attribute (e.g. quantity).
pub trait Entity {
    /// Identity key.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
