//! Raw memory source used by [`RawMemory`](crate::raw::RawMemory).
//!
//! The standard `Allocator` trait is not stable yet, so this module provides
//! a minimal trait with the same shape. Only the two operations a
//! single-buffer vector needs are required: acquire a block and release it.
use core::{
	alloc::Layout,
	ptr::NonNull
};
use crate::error::AllocError;

/// An implementation of `Allocator` can allocate and deallocate blocks of
/// memory described by a [`Layout`].
///
/// Allocators are used as handles: every buffer keeps its own, and methods
/// that replace a buffer clone the handle of the old one, hence the
/// `A: Clone` bound on growing methods.
///
/// # Safety
///
/// Memory blocks returned by `allocate` must stay valid until they are passed
/// to `deallocate` with the same layout, and must be suitably aligned for the
/// requested layout.
pub unsafe trait Allocator {
	/// Attempts to allocate a block of memory fitting `layout`.
	///
	/// `layout` never has a size of zero when called from this crate.
	fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError>;

	/// Deallocates the memory referenced by `ptr`.
	///
	/// # Safety
	///
	/// `ptr` must denote a block of memory currently allocated via this
	/// allocator, and `layout` must be the layout used to allocate it.
	unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout);
}

unsafe impl<A: Allocator + ?Sized> Allocator for &A {
	#[inline]
	fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
		(**self).allocate(layout)
	}

	#[inline]
	unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
		(**self).deallocate(ptr, layout)
	}
}

/// The global memory allocator.
///
/// Forwards to [`std::alloc::alloc`] and [`std::alloc::dealloc`], hence to
/// whatever `#[global_allocator]` the final binary registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Global;

unsafe impl Allocator for Global {
	#[inline]
	fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
		debug_assert_ne!(layout.size(), 0);
		// SAFETY: the layout has a non-zero size.
		let ptr = unsafe { std::alloc::alloc(layout) };
		NonNull::new(ptr).ok_or(AllocError)
	}

	#[inline]
	unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
		std::alloc::dealloc(ptr.as_ptr(), layout)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn global_round_trip() {
		let layout = Layout::array::<u64>(16).unwrap();
		let ptr = Global.allocate(layout).unwrap();
		assert_eq!(ptr.as_ptr() as usize % layout.align(), 0);
		unsafe {
			ptr.as_ptr().cast::<u64>().write(42);
			assert_eq!(ptr.as_ptr().cast::<u64>().read(), 42);
			Global.deallocate(ptr, layout);
		}
	}

	#[test]
	fn by_reference() {
		let alloc = Global;
		let by_ref = &alloc;
		let layout = Layout::new::<u32>();
		let ptr = by_ref.allocate(layout).unwrap();
		unsafe { by_ref.deallocate(ptr, layout) }
	}
}
