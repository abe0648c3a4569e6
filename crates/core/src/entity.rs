//! Entity trait: identity that outlives attribute equality.

/// Something compared by identifier rather than by attributes.
///
/// Two inventory records for the same user and item are still distinct
/// ownership facts; only their entry identifiers tell them apart.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;

    fn is_same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
