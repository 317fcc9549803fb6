//! Value object trait: equality by value, not identity.

/// Marker for immutable domain values compared by their attributes.
///
/// `ProductKey` and `Discount` are value objects; `Product` is an entity
/// (see [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
