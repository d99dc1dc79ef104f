//! An inline optional value container.
//!
//! `Nullable<T>` represents "a `T`, or nothing". The value is stored
//! directly inside the container itself, with no heap allocation and no
//! indirection, and the container owns it exclusively: copying a container
//! clones the value, moving it out empties the source.
//!
//! Unlike `Option`, extraction goes through explicit resolution protocols:
//! a non-consuming resolve that copies into a caller-owned destination and
//! reports success, and a consuming resolve that always returns a value,
//! falling back to the canonical null of the type (see
//! [`NullValue`](crate::NullValue)) when the container is empty.
//!
//! ## Examples
//!
//! Checking for a value and resolving it into a destination:
//!
//! ```
//! use nullable::Nullable;
//!
//! fn find_port(service: &str) -> Nullable<u16> {
//!   match service {
//!     "http" => Nullable::Held(80),
//!     "https" => Nullable::Held(443),
//!     _ => Nullable::Null,
//!   }
//! }
//!
//! let found = find_port("https");
//! assert!(!found.is_null());
//!
//! let mut port = 0;
//! assert!(found.resolve_into(&mut port));
//! assert_eq!(port, 443);
//! ```
//!
//! Or ignoring the null case entirely and letting the canonical null value
//! stand in:
//!
//! ```
//! use nullable::Nullable;
//!
//! let mut missing = Nullable::<u16>::Null;
//! assert_eq!(missing.resolve(), 0);
//! ```

use core::mem::replace;

use crate::null_value::NullValue;

/// An inline container holding either nothing or exactly one `T`.
///
/// The container always owns its value. Operations that hand the value to
/// the caller fall into two camps which are deliberately kept apart:
///
/// 1. [`resolve_into`](Nullable::resolve_into) copies the held value into a
///    caller-owned destination and reports success; the container keeps its
///    value.
/// 2. [`resolve`](Nullable::resolve) moves the held value out, leaving the
///    container null, and never fails: an empty container yields the
///    canonical null value of `T` instead.
///
/// [`try_use`](Nullable::try_use) and [`try_consume`](Nullable::try_consume)
/// apply a callable to the value, if any, without the caller naming a
/// destination at all.
///
/// # Examples
///
/// ```
/// use nullable::Nullable;
///
/// let first = Nullable::from(55);
/// let second = first.clone();
///
/// let mut value = -1;
/// assert!(second.resolve_into(&mut value));
/// assert_eq!(value, 55);
///
/// // resolving is non-consuming; both containers still hold 55
/// assert!(!first.is_null());
/// assert!(!second.is_null());
/// ```
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum Nullable<T> {
  /// The empty state. No value exists; resolution reports failure or
  /// produces the canonical null value, depending on the protocol.
  Null,
  /// The occupied state, owning exactly one fully-constructed `T`.
  Held(T),
}

impl<T> Nullable<T> {
  /// Returns `true` if no value is currently held.
  #[cfg(not(feature = "is_variant"))]
  #[inline]
  pub const fn is_null(&self) -> bool {
    matches!(self, Self::Null)
  }

  /// Returns `true` if a value is currently held.
  #[cfg(not(feature = "is_variant"))]
  #[inline]
  pub const fn is_held(&self) -> bool {
    matches!(self, Self::Held(_))
  }

  /// Moves the whole state out of this container, leaving it null.
  ///
  /// This is the move-construction protocol between containers: the
  /// returned container holds whatever this one held, and this one is
  /// observably empty afterwards.
  #[inline]
  pub fn take(&mut self) -> Self {
    replace(self, Self::Null)
  }

  /// Move-assigns from `source` into this container.
  ///
  /// Whatever this container held is dropped. If `source` held a value it
  /// is moved over and `source` becomes null; if `source` was null, this
  /// container becomes null too.
  #[inline]
  pub fn take_from(&mut self, source: &mut Self) {
    *self = replace(source, Self::Null);
  }

  /// Copies the held value into `destination`, if any.
  ///
  /// If the container is null, `destination` is left untouched and the
  /// method returns `false`. Otherwise the held value is cloned into
  /// `destination` and the method returns `true`; the container keeps its
  /// own value and remains valid.
  ///
  /// This is the primary extraction path when the container is expected to
  /// be reused. Initialize the destination yourself in case of null.
  ///
  /// # Examples
  ///
  /// ```
  /// use nullable::Nullable;
  ///
  /// let mut value = -1;
  /// assert!(!Nullable::<i32>::Null.resolve_into(&mut value));
  /// assert_eq!(value, -1);
  ///
  /// assert!(Nullable::from(23).resolve_into(&mut value));
  /// assert_eq!(value, 23);
  /// ```
  pub fn resolve_into(&self, destination: &mut T) -> bool
  where
    T: Clone,
  {
    match self {
      Self::Held(value) => {
        destination.clone_from(value);
        true
      }
      Self::Null => false,
    }
  }

  /// Moves the held value into `destination`, if any.
  ///
  /// The moving counterpart of [`resolve_into`](Nullable::resolve_into):
  /// on success the container becomes null. A null container leaves
  /// `destination` untouched and returns `false`.
  pub fn take_into(&mut self, destination: &mut T) -> bool {
    match replace(self, Self::Null) {
      Self::Held(value) => {
        *destination = value;
        true
      }
      Self::Null => false,
    }
  }

  /// Resolves the container by consuming its value.
  ///
  /// If a value is held it is returned by move and the container becomes
  /// null. If the container is already null, the canonical null value of
  /// `T` is returned instead — see [`NullValue`] — and the container stays
  /// null.
  ///
  /// This never fails, which lets call sites chain extraction without a
  /// separate null check. The price is that the return value alone cannot
  /// distinguish an empty container from one that held the canonical null:
  /// check `is_null` first when that distinction matters.
  ///
  /// # Examples
  ///
  /// ```
  /// use nullable::Nullable;
  ///
  /// let mut greeting = Nullable::from(String::from("Hello"));
  /// assert_eq!(greeting.resolve(), "Hello");
  ///
  /// // the value moved out; only the canonical null remains
  /// assert!(greeting.is_null());
  /// assert_eq!(greeting.resolve(), "");
  /// ```
  pub fn resolve(&mut self) -> T
  where
    T: NullValue,
  {
    match replace(self, Self::Null) {
      Self::Held(value) => value,
      Self::Null => T::null_value(),
    }
  }

  /// Applies `func` to the held value, if any.
  ///
  /// Returns `true` if `func` was invoked. The value is borrowed, never
  /// disturbed; the container is left exactly as it was.
  pub fn try_use<F: FnOnce(&T)>(&self, func: F) -> bool {
    match self {
      Self::Held(value) => {
        func(value);
        true
      }
      Self::Null => false,
    }
  }

  /// Applies `func` to the held value, consuming it.
  ///
  /// The value is moved into `func` and the container becomes null, so
  /// only one invocation ever observes the value. Returns `true` if `func`
  /// was invoked.
  pub fn try_consume<F: FnOnce(T)>(&mut self, func: F) -> bool {
    match replace(self, Self::Null) {
      Self::Held(value) => {
        func(value);
        true
      }
      Self::Null => false,
    }
  }

  /// Converts the container into a standard [`Option`].
  #[inline]
  pub fn into_option(self) -> Option<T> {
    match self {
      Self::Held(value) => Some(value),
      Self::Null => None,
    }
  }
}

impl<T> Default for Nullable<T> {
  #[inline(always)]
  fn default() -> Self {
    Self::Null
  }
}

impl<T: Clone> Clone for Nullable<T> {
  fn clone(&self) -> Self {
    match self {
      Self::Held(value) => Self::Held(value.clone()),
      Self::Null => Self::Null,
    }
  }

  /// Copy-assigns from `source`, reusing the held value in place when both
  /// containers are occupied.
  fn clone_from(&mut self, source: &Self) {
    match source {
      Self::Held(value) => match self {
        Self::Held(held) => held.clone_from(value),
        Self::Null => *self = Self::Held(value.clone()),
      },
      Self::Null => *self = Self::Null,
    }
  }
}

impl<T> From<T> for Nullable<T> {
  #[inline(always)]
  fn from(value: T) -> Self {
    Self::Held(value)
  }
}

impl<T> From<Option<T>> for Nullable<T> {
  #[inline]
  fn from(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Held(value),
      None => Self::Null,
    }
  }
}
