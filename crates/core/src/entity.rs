//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with equal ids are the same entity, even when their other
/// attributes (e.g. a stock level) differ.
pub trait Entity {
    /// Identifier type. Lookup tables are keyed by it, hence `Hash + Eq`.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
