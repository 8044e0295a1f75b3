//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable domain values defined entirely by their
/// attributes — two value objects with the same values are equal, and
/// "modifying" one means constructing a new one. `Money { 100, USD }` is a
/// value object; a partner with an id is an entity.
///
/// The bounds keep value objects behaving like primitives: cheap to copy,
/// comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
