//! Error types.
use core::alloc::Layout;
use thiserror::Error;

/// The allocator could not satisfy a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("memory allocation failed")]
pub struct AllocError;

/// The error type for `try_reserve` and the other fallible growing methods.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TryReserveError {
	/// The computed capacity exceeds the maximum (usually `isize::MAX` bytes).
	#[error("capacity overflow")]
	CapacityOverflow,

	/// The memory allocator returned an error.
	#[error("memory allocation of {} bytes failed", .layout.size())]
	AllocError {
		/// The layout of the allocation request that failed.
		layout: Layout
	}
}

/// Error returned by the `try_*_with` methods, where the new element is
/// produced by a fallible closure.
///
/// In both cases the vector is left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum EmplaceError<E> {
	/// Room for the new element could not be made.
	#[error(transparent)]
	Reserve(#[from] TryReserveError),

	/// The closure producing the element failed.
	#[error("element construction failed: {0}")]
	Element(E)
}

impl<E> EmplaceError<E> {
	/// Returns the closure's error, if that is what failed.
	pub fn into_element(self) -> Option<E> {
		match self {
			EmplaceError::Element(e) => Some(e),
			EmplaceError::Reserve(_) => None
		}
	}
}
