//! This crate provides the [`Vector`] data structure, a contiguous growable
//! array written from scratch on top of raw memory.
//!
//! It is organized in two layers:
//! - [`RawMemory`](raw::RawMemory) owns an uninitialized buffer of some
//!   capacity and knows nothing about which slots hold values;
//! - [`Vector`] owns a `RawMemory` and the number of live values at its start,
//!   and implements every value-semantic operation on top of it.
//!
//! Every mutating operation is panic safe. Operations that replace the buffer
//! (appending to a full vector, inserting, reserving, growing with `resize`,
//! cloning) first build everything they need in the new buffer, and only then
//! move the existing values over and release the old one: if a `Clone`,
//! `Default` or user closure panics midway, the vector is left exactly as it
//! was, and nothing is leaked.
//!
//! ## Basic usage
//!
//! ```rust
//! use grow_vec::{vector, Vector};
//!
//! let mut v = vector![1, 2, 3];
//! v.insert(1, 99);
//! assert_eq!(v, [1, 99, 2, 3]);
//!
//! v.erase(0);
//! v.resize(5);
//! assert_eq!(v, [99, 2, 3, 0, 0]);
//!
//! let capacity = v.capacity();
//! v.resize(2);
//! assert_eq!(v, [99, 2]);
//! assert_eq!(v.capacity(), capacity);
//! ```
//!
//! ## Fallible allocation
//!
//! Growing methods come in two flavors: the plain ones abort on allocation
//! failure (like `Vec`), the `try_*` ones return a [`TryReserveError`] and
//! leave the vector untouched.
//!
//! ```rust
//! # use grow_vec::{Vector, TryReserveError};
//! let mut v: Vector<u64> = Vector::new();
//! assert_eq!(v.try_reserve(usize::MAX), Err(TryReserveError::CapacityOverflow));
//! assert_eq!(v.capacity(), 0);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize` and `Deserialize` implementations for `Vector`.
pub mod alloc;
pub mod error;
pub mod raw;
pub mod vector;
#[cfg(feature = "serde")]
mod serde;

pub use alloc::{
	Allocator,
	Global
};
pub use error::{
	AllocError,
	EmplaceError,
	TryReserveError
};
pub use vector::{
	IntoIter,
	Vector
};

/// Creates a [`Vector`] containing the arguments.
///
/// ```
/// # use grow_vec::{vector, Vector};
/// let v = vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let w = vector![String::from("x"); 2];
/// assert_eq!(w, ["x", "x"]);
///
/// let e: Vector<u8> = vector![];
/// assert!(e.is_empty());
/// ```
#[macro_export]
macro_rules! vector {
	() => (
		$crate::Vector::new()
	);
	($elem:expr; $n:expr) => (
		$crate::Vector::from_elem($elem, $n)
	);
	($($x:expr),+ $(,)?) => (
		$crate::Vector::from([$($x),+])
	);
}
