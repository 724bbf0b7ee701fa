use core::{
	alloc::Layout,
	fmt,
	marker::PhantomData,
	mem,
	ptr::NonNull
};
use std::alloc::handle_alloc_error;
use crate::{
	alloc::{
		Allocator,
		Global
	},
	error::TryReserveError
};

/// A low-level utility owning an uninitialized buffer sized for `capacity`
/// values of type `T`.
///
/// This type does not in anyway inspect the memory that it manages. When dropped it *will*
/// free its memory, but it *won't* try to drop its contents. It is up to the user of `RawMemory`
/// to handle the actual things *stored* inside of a `RawMemory`.
///
/// A `RawMemory` is never cloned: duplicating a raw allocation has no meaning without
/// knowing which slots hold values. Ownership is transferred by moving it, or with
/// [`take`](RawMemory::take) and [`swap`](RawMemory::swap).
///
/// A capacity of zero never calls the allocator, and neither does a zero-sized `T`.
/// In the latter case the requested capacity is still recorded as is.
pub struct RawMemory<T, A: Allocator = Global> {
	/// Start of the buffer, dangling if nothing is allocated.
	ptr: NonNull<T>,

	/// Number of `T` slots in the buffer.
	capacity: usize,

	/// Allocator.
	alloc: A,

	marker: PhantomData<T>
}

unsafe impl<T: Send, A: Allocator + Send> Send for RawMemory<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawMemory<T, A> {}

impl<T, A: Allocator> Drop for RawMemory<T, A> {
	fn drop(&mut self) {
		if let Some((ptr, layout)) = self.current_memory() {
			// SAFETY: `ptr` was allocated by `self.alloc` with `layout`.
			unsafe { self.alloc.deallocate(ptr, layout) }
		}
	}
}

impl<T> RawMemory<T, Global> {
	/// Creates an empty buffer without allocating.
	#[inline]
	pub const fn new() -> Self {
		Self::new_in(Global)
	}

	/// Allocates room for exactly `capacity` values.
	///
	/// # Panics
	///
	/// Panics if the requested size exceeds `isize::MAX` bytes.
	/// Aborts through [`handle_alloc_error`] if the allocation fails.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		Self::with_capacity_in(capacity, Global)
	}
}

impl<T> Default for RawMemory<T, Global> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T, A: Allocator> RawMemory<T, A> {
	/// Creates an empty buffer using the given allocator, without allocating.
	#[inline]
	pub const fn new_in(alloc: A) -> Self {
		RawMemory {
			ptr: NonNull::dangling(),
			capacity: 0,
			alloc,
			marker: PhantomData
		}
	}

	/// Like `with_capacity`, but parameterized over the choice of
	/// allocator for the returned `RawMemory`.
	#[inline]
	pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
		handle_reserve(Self::try_with_capacity_in(capacity, alloc))
	}

	/// The same as `with_capacity_in`, but returns on errors instead of panicking or aborting.
	pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, TryReserveError> {
		if capacity == 0 || mem::size_of::<T>() == 0 {
			return Ok(RawMemory {
				ptr: NonNull::dangling(),
				capacity,
				alloc,
				marker: PhantomData
			})
		}

		let layout = Layout::array::<T>(capacity).map_err(|_| TryReserveError::CapacityOverflow)?;
		alloc_guard(layout.size())?;

		match alloc.allocate(layout) {
			Ok(ptr) => Ok(RawMemory {
				ptr: ptr.cast(),
				capacity,
				alloc,
				marker: PhantomData
			}),
			Err(_) => {
				log::debug!("allocation of {} slots ({} bytes) failed", capacity, layout.size());
				Err(TryReserveError::AllocError { layout })
			}
		}
	}

	/// Returns the number of slots in the buffer.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Returns a reference to the underlying allocator.
	#[inline]
	pub fn allocator(&self) -> &A {
		&self.alloc
	}

	/// Returns a raw pointer to the start of the buffer.
	///
	/// The pointer is dangling (but well aligned) if nothing is allocated.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.ptr.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the start of the buffer.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.ptr.as_ptr()
	}

	/// Returns the address of slot `offset`.
	///
	/// `offset == capacity` is allowed and gives the one-past-the-end address,
	/// which must not be dereferenced.
	///
	/// ## Safety
	///
	/// `offset` must be lower or equal to the capacity.
	#[inline]
	pub unsafe fn offset(&self, offset: usize) -> *mut T {
		debug_assert!(offset <= self.capacity);
		self.ptr.as_ptr().add(offset)
	}

	/// Exchanges the buffers owned by `self` and `other`.
	///
	/// This never allocates and cannot fail.
	#[inline]
	pub fn swap(&mut self, other: &mut Self) {
		mem::swap(self, other)
	}

	/// Takes the buffer out of `self`, leaving an empty buffer in its place.
	#[inline]
	pub fn take(&mut self) -> Self where A: Clone {
		let empty = Self::new_in(self.alloc.clone());
		mem::replace(self, empty)
	}

	/// Returns the current allocated memory and layout.
	///
	/// Returns `None` if nothing is allocated,
	/// or is the size of `T` is 0.
	fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
		if self.capacity == 0 || mem::size_of::<T>() == 0 {
			None
		} else {
			// We have an allocated chunk of memory, so we can bypass runtime
			// checks to get our current layout.
			unsafe {
				let align = mem::align_of::<T>();
				let size = mem::size_of::<T>() * self.capacity;
				let layout = Layout::from_size_align_unchecked(size, align);
				Some((self.ptr.cast(), layout))
			}
		}
	}
}

impl<T, A: Allocator> fmt::Debug for RawMemory<T, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RawMemory")
			.field("ptr", &self.ptr)
			.field("capacity", &self.capacity)
			.finish()
	}
}

// Central function for reserve error handling.
#[inline]
pub(crate) fn handle_reserve<R>(result: Result<R, TryReserveError>) -> R {
	match result {
		Err(TryReserveError::CapacityOverflow) => capacity_overflow(),
		Err(TryReserveError::AllocError { layout }) => handle_alloc_error(layout),
		Ok(r) => r
	}
}

// We need to guarantee the following:
// * We don't ever allocate `> isize::MAX` byte-size objects.
// * We don't overflow `usize::MAX` and actually allocate too little.
//
// On 64-bit we just need to check for overflow since trying to allocate
// `> isize::MAX` bytes will surely fail. On 32-bit and 16-bit we need to add
// an extra guard for this in case we're running on a platform which can use
// all 4GB in user-space, e.g., PAE or x32.
#[inline]
fn alloc_guard(alloc_size: usize) -> Result<(), TryReserveError> {
	if usize::BITS < 64 && alloc_size > isize::MAX as usize {
		Err(TryReserveError::CapacityOverflow)
	} else {
		Ok(())
	}
}

// One central function responsible for reporting capacity overflows. This'll
// ensure that the code generation related to these panics is minimal as there's
// only one location which panics rather than a bunch throughout the module.
pub(crate) fn capacity_overflow() -> ! {
	panic!("capacity overflow");
}
