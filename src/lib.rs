//! # Nullable
//!
//! ### An inline nullable value container
//!
//! This crate provides [`Nullable<T>`], a lightweight container representing
//! "a `T`, or nothing". The value lives inline in the container — no heap
//! allocation, no indirection — and the container owns it exclusively.
//! Extraction goes through explicit resolution protocols rather than
//! `Option`-style unwrapping, described in detail below.
//!
//! ---
//!
//! ## [`Nullable`]
//!
//! The container itself. Created empty or from a value, copied and moved
//! between containers with well-defined source states (a moved-from
//! container is observably null), and resolved one of three ways:
//!
//! 1. **Destination resolve** — [`Nullable::resolve_into`] copies the held
//!    value into caller-owned memory and reports success. The container is
//!    untouched and can be resolved again.
//! 2. **Consuming resolve** — [`Nullable::resolve`] moves the value out and
//!    nulls the container. It never fails: an empty container yields the
//!    canonical null of the type instead.
//! 3. **Apply** — [`Nullable::try_use`] / [`Nullable::try_consume`] run a
//!    callable against the value, if present.
//!
//! ### Example
//!
//! ```rust
//! use nullable::Nullable;
//!
//! let cached = Nullable::from(42);
//!
//! let mut value = 0;
//! assert!(cached.resolve_into(&mut value));
//! assert_eq!(value, 42);
//! assert!(!cached.is_null());
//! ```
//!
//! ## [`NullValue`]
//!
//! The capability behind the consuming resolve: a type qualifies by
//! delegating to its [`Default`] (via [`null_value_via_default!`]) or by
//! supplying a bespoke sentinel factory. The bound is resolved at compile
//! time; there is no runtime capability check.
//!
//! ### Example
//!
//! ```rust
//! use nullable::Nullable;
//!
//! let mut name = Nullable::from(String::from("anonymous"));
//! assert_eq!(name.resolve(), "anonymous");
//!
//! // the container is now null, and resolving it again is not an error
//! assert!(name.is_null());
//! assert_eq!(name.resolve(), "");
//! ```
//!
//! ---
//!
//! ## Ownership & Concurrency
//!
//! `Nullable<T>` is a single-owner value type: copying produces an
//! independent value, moving empties the source, and nothing is shared or
//! reference-counted. It does no internal locking — concurrent mutation
//! from multiple threads requires external synchronization, exactly as for
//! any other value type.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! The crate is `no_std` by default (with `alloc` for the `String`, `Vec`
//! and `Box` null values), making it suitable for embedded and other
//! resource-constrained environments.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When
//!   disabled, which is the default, the crate operates in `no_std` mode.
//! - `is_variant`†: Derives the [`Nullable::is_null`] / `is_held` queries
//!   via `derive_more`; hand-written equivalents are compiled in when the
//!   feature is disabled.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod null_value;
pub mod nullable;

pub use null_value::*;
pub use nullable::*;
