//! The null-constructible capability.
//!
//! Consuming resolution ([`Nullable::resolve`]) never fails: when the
//! container is empty it produces a canonical "null" instance of the value
//! type instead. [`NullValue`] describes how a type produces that instance.
//! The capability is a compile-time bound — a container of a type with no
//! null instance simply cannot be resolved this way; nothing is checked at
//! runtime.
//!
//! Two production paths exist:
//!
//! - default-constructible types delegate to [`Default`], one line per type
//!   via [`null_value_via_default!`];
//! - types with a meaningful sentinel implement the factory directly.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use crate::nullable::Nullable;

/// A value type that can produce a canonical "null" instance of itself.
///
/// The null instance is what [`Nullable::resolve`] returns for an empty
/// container. For most types it is the [`Default`] value (`0`, `false`, an
/// empty string); types without a `Default`, or whose default is a real
/// value rather than an absence, supply their own sentinel.
///
/// # Examples
///
/// A type with a meaningful sentinel implements the factory directly:
///
/// ```
/// use nullable::{NullValue, Nullable};
///
/// struct SlotIndex(u32);
///
/// impl NullValue for SlotIndex {
///   fn null_value() -> Self {
///     SlotIndex(u32::MAX)
///   }
/// }
///
/// let mut vacant = Nullable::<SlotIndex>::Null;
/// assert_eq!(vacant.resolve().0, u32::MAX);
/// ```
pub trait NullValue {
  /// Returns the canonical null instance of this type.
  fn null_value() -> Self;
}

/// Implements [`NullValue`] for types whose [`Default`] value is the
/// canonical null.
///
/// A blanket `impl<T: Default> NullValue for T` would forbid every bespoke
/// sentinel implementation under the coherence rules, so the `Default`
/// delegation is opt-in, one type at a time.
///
/// # Examples
///
/// ```
/// use nullable::{null_value_via_default, Nullable};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Settings {
///   retries: u8,
/// }
///
/// null_value_via_default!(Settings);
///
/// let mut missing = Nullable::<Settings>::Null;
/// assert_eq!(missing.resolve(), Settings { retries: 0 });
/// ```
#[macro_export]
macro_rules! null_value_via_default {
  ($($ty:ty),+ $(,)?) => {$(
    impl $crate::NullValue for $ty {
      #[inline]
      fn null_value() -> Self {
        <$ty as ::core::default::Default>::default()
      }
    }
  )+};
}

null_value_via_default! {
  (), bool, char,
  i8, i16, i32, i64, i128, isize,
  u8, u16, u32, u64, u128, usize,
  f32, f64,
  String,
}

impl NullValue for &str {
  #[inline]
  fn null_value() -> Self {
    ""
  }
}

impl<T> NullValue for Option<T> {
  #[inline]
  fn null_value() -> Self {
    None
  }
}

impl<T> NullValue for Vec<T> {
  #[inline]
  fn null_value() -> Self {
    Vec::new()
  }
}

impl<T: NullValue> NullValue for Box<T> {
  #[inline]
  fn null_value() -> Self {
    Box::new(T::null_value())
  }
}

impl<T> NullValue for Nullable<T> {
  #[inline]
  fn null_value() -> Self {
    Nullable::Null
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn primitive_null_values_are_zeroed() {
    assert_eq!(i32::null_value(), 0);
    assert_eq!(u64::null_value(), 0);
    assert_eq!(f64::null_value(), 0.0);
    assert_eq!(bool::null_value(), false);
    assert_eq!(char::null_value(), '\0');
  }

  #[test]
  fn string_null_values_are_empty() {
    assert_eq!(String::null_value(), "");
    assert_eq!(<&str>::null_value(), "");
  }

  #[test]
  fn composite_null_values_are_empty() {
    assert_eq!(Option::<i32>::null_value(), None);
    assert!(Vec::<u8>::null_value().is_empty());
    assert_eq!(*Box::<i16>::null_value(), 0);
    assert!(Nullable::<String>::null_value().is_null());
  }

  #[test]
  fn sentinel_factory_overrides_default() {
    // a default-constructible type whose canonical null is not the default
    #[derive(Debug, Default, PartialEq)]
    struct Temperature(f64);

    impl NullValue for Temperature {
      fn null_value() -> Self {
        Temperature(f64::NAN)
      }
    }

    assert!(Temperature::null_value().0.is_nan());
    assert_eq!(Temperature::default(), Temperature(0.0));
  }

  #[test]
  fn nested_containers_resolve_to_null() {
    let mut outer = Nullable::<Nullable<i32>>::Null;
    let inner = outer.resolve();
    assert!(inner.is_null());
  }
}
