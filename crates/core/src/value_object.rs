//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; two value objects holding the same values
//! are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They are validated
/// once, at construction, so holding one is proof the value is well-formed:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price(Decimal);
///
/// impl ValueObject for Price {}
///
/// let p = Price::new(dec!(9.99))?; // rejects zero / negative amounts
/// ```
///
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: useful in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
