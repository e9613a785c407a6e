//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never modified in place: to
/// "change" one, build a new value. Two value objects with the same
/// attributes are equal.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Stock {
///     sell_in: i32,
///     quality: i32,
/// }
///
/// impl ValueObject for Stock {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
