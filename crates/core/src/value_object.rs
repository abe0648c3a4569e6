//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attributes
/// are interchangeable. In this workspace that covers amounts ([`Currency`]),
/// item identifiers and type buckets, and catalogue price keys.
///
/// An inventory record, by contrast, is an entity: two records holding the
/// same item for the same user are still distinct ownership facts.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PriceKey(String);
///
/// impl ValueObject for PriceKey {}
/// ```
///
/// [`Currency`]: crate::money::Currency
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
