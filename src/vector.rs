use core::{
	borrow::{
		Borrow,
		BorrowMut
	},
	cmp,
	convert::Infallible,
	fmt,
	hash::{
		Hash,
		Hasher
	},
	iter::FusedIterator,
	mem::{
		self,
		ManuallyDrop
	},
	ops::{
		Deref,
		DerefMut
	},
	ptr,
	slice
};
use crate::{
	alloc::{
		Allocator,
		Global
	},
	error::{
		EmplaceError,
		TryReserveError
	},
	raw::{
		handle_reserve,
		RawMemory
	}
};

/// Contiguous growable array type built on a [`RawMemory`] buffer.
///
/// The first `len` slots of the buffer hold live values, the remaining
/// `capacity - len` slots are uninitialized.
///
/// Every mutating method is panic safe: if a user-provided closure, `Clone`
/// or `Default` implementation panics (or a `try_*_with` closure returns an
/// error), no value is leaked, dropped twice, or exposed uninitialized.
/// Methods growing the buffer leave the vector exactly as it was on failure.
///
/// When the buffer is full, adding an element replaces it with one twice as
/// long as the vector (or of length 1 for an empty vector).
/// [`reserve`](Vector::reserve) requests an exact total capacity instead.
///
/// # Examples
///
/// ```
/// use grow_vec::Vector;
///
/// let mut v = Vector::new();
/// v.push(1);
/// v.push(2);
/// v.push(3);
/// v.insert(1, 99);
/// assert_eq!(v, [1, 99, 2, 3]);
///
/// v.erase(0);
/// v.resize(5);
/// assert_eq!(v, [99, 2, 3, 0, 0]);
/// ```
pub struct Vector<T, A: Allocator = Global> {
	/// Buffer storing the elements.
	buf: RawMemory<T, A>,

	/// Number of live elements at the start of `buf`.
	len: usize
}

impl<T, A: Allocator> Drop for Vector<T, A> {
	fn drop(&mut self) {
		unsafe {
			// drop every element, the buffer frees the memory.
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len))
		}
	}
}

impl<T> Vector<T, Global> {
	/// Creates a new empty `Vector`.
	///
	/// The vector will not allocate until elements are pushed onto it.
	#[inline]
	pub const fn new() -> Self {
		Self::new_in(Global)
	}

	/// Creates a new empty `Vector` with exactly the given capacity.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self {
		Self::with_capacity_in(capacity, Global)
	}

	/// Creates a vector of `len` default values.
	///
	/// The capacity is exactly `len`.
	///
	/// ```
	/// # use grow_vec::Vector;
	/// let v: Vector<String> = Vector::with_len(3);
	/// assert_eq!(v.len(), 3);
	/// assert!(v.iter().all(String::is_empty));
	/// ```
	#[inline]
	pub fn with_len(len: usize) -> Self where T: Default {
		Self::with_len_in(len, Global)
	}

	/// Creates a vector of `n` clones of `elem`.
	///
	/// Used by the [`vector!`](crate::vector!) macro.
	#[inline]
	pub fn from_elem(elem: T, n: usize) -> Self where T: Clone {
		let mut v = Self::new();
		v.resize_value(n, elem);
		v
	}
}

impl<T, A: Allocator> Vector<T, A> {
	/// Constructs a new, empty `Vector<T, A>`.
	#[inline]
	pub const fn new_in(alloc: A) -> Self {
		Vector {
			buf: RawMemory::new_in(alloc),
			len: 0
		}
	}

	/// Returns a reference to the underlying allocator.
	#[inline]
	pub fn allocator(&self) -> &A {
		self.buf.allocator()
	}

	/// Returns the number of elements in the vector.
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if the vector contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Returns the number of elements the vector can hold without reallocating.
	#[inline]
	pub fn capacity(&self) -> usize {
		self.buf.capacity()
	}

	/// Forces the length of the vector to `len`.
	///
	/// ## Safety
	///
	/// `len` must be lower or equal to the capacity, and the elements at
	/// `old_len..len` must be initialized.
	#[inline]
	pub unsafe fn set_len(&mut self, len: usize) {
		debug_assert!(len <= self.capacity());
		self.len = len
	}

	/// Returns a raw pointer to the vector's buffer.
	///
	/// The caller must ensure that the vector outlives the pointer this
	/// function returns, or else it will end up pointing to garbage.
	/// Modifying the vector may cause its buffer to be reallocated,
	/// which would also make any pointers to it invalid.
	#[inline]
	pub fn as_ptr(&self) -> *const T {
		self.buf.as_ptr()
	}

	/// Returns an unsafe mutable pointer to the vector's buffer.
	#[inline]
	pub fn as_mut_ptr(&mut self) -> *mut T {
		self.buf.as_mut_ptr()
	}

	/// Extracts a slice containing the entire vector.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.as_ptr(), self.len)
		}
	}

	/// Extracts a mutable slice of the entire vector.
	#[inline]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		unsafe {
			slice::from_raw_parts_mut(self.as_mut_ptr(), self.len)
		}
	}

	/// Exchanges the contents of two vectors.
	///
	/// Only the buffers change hands: no element is moved, and no memory is
	/// allocated.
	#[inline]
	pub fn swap_with(&mut self, other: &mut Self) {
		self.buf.swap(&mut other.buf);
		mem::swap(&mut self.len, &mut other.len);
	}

	/// Shortens the vector, keeping the first `len` elements and dropping
	/// the rest.
	///
	/// If `len` is greater than the vector's current length, this has no
	/// effect.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn truncate(&mut self, len: usize) {
		if len >= self.len {
			return
		}

		unsafe {
			let tail = ptr::slice_from_raw_parts_mut(self.buf.offset(len), self.len - len);
			self.len = len;
			ptr::drop_in_place(tail);
		}
	}

	/// Clears the vector, removing all values.
	///
	/// Note that this method has no effect on the allocated capacity
	/// of the vector.
	#[inline]
	pub fn clear(&mut self) {
		self.truncate(0)
	}

	/// Removes the last element from a vector and returns it, or [`None`] if it
	/// is empty.
	#[inline]
	pub fn pop(&mut self) -> Option<T> {
		if self.len == 0 {
			None
		} else {
			unsafe {
				self.len -= 1;
				Some(ptr::read(self.buf.offset(self.len)))
			}
		}
	}

	/// Drops the last element of the vector, if any.
	#[inline]
	pub fn pop_back(&mut self) {
		if self.len > 0 {
			unsafe {
				self.len -= 1;
				ptr::drop_in_place(self.buf.offset(self.len))
			}
		}
	}

	/// Removes and returns the element at position `index` within the vector,
	/// shifting all elements after it to the left.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	pub fn remove(&mut self, index: usize) -> T {
		let len = self.len;
		if index >= len {
			panic!("removal index (is {}) should be < len (is {})", index, len);
		}

		unsafe {
			// infallible
			let ret;
			{
				// the place we are taking from.
				let p = self.buf.offset(index);
				// copy it out, unsafely having a copy of the value on
				// the stack and in the vector at the same time.
				ret = ptr::read(p);

				// Shift everything down to fill in that spot.
				ptr::copy(p.add(1), p, len - index - 1);
			}
			self.len = len - 1;
			ret
		}
	}

	/// Drops the element at position `index`, shifting all elements after it
	/// to the left.
	///
	/// # Panics
	///
	/// Panics if `index` is out of bounds.
	#[inline]
	pub fn erase(&mut self, index: usize) {
		drop(self.remove(index))
	}
}

impl<T, A: Allocator + Clone> Vector<T, A> {
	/// Like `with_capacity`, but parameterized over the choice of
	/// allocator for the returned `Vector`.
	#[inline]
	pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
		Vector {
			buf: RawMemory::with_capacity_in(capacity, alloc),
			len: 0
		}
	}

	/// The same as `with_capacity_in`, but returns on errors instead of panicking or aborting.
	#[inline]
	pub fn try_with_capacity_in(capacity: usize, alloc: A) -> Result<Self, TryReserveError> {
		Ok(Vector {
			buf: RawMemory::try_with_capacity_in(capacity, alloc)?,
			len: 0
		})
	}

	/// Like `with_len`, but parameterized over the choice of
	/// allocator for the returned `Vector`.
	pub fn with_len_in(len: usize, alloc: A) -> Self where T: Default {
		let mut v = Self::with_capacity_in(len, alloc);
		v.resize_with(len, T::default);
		v
	}

	/// Reserves room for a total of `capacity` elements.
	///
	/// Does nothing if the capacity is already sufficient: the buffer never
	/// shrinks. Otherwise the new capacity is exactly `capacity`.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn reserve(&mut self, capacity: usize) {
		handle_reserve(self.try_reserve(capacity))
	}

	/// The same as `reserve`, but returns on errors instead of panicking or aborting.
	///
	/// On error, the vector is left untouched.
	pub fn try_reserve(&mut self, capacity: usize) -> Result<(), TryReserveError> {
		if capacity <= self.capacity() {
			return Ok(())
		}

		let new_buf = RawMemory::try_with_capacity_in(capacity, self.buf.allocator().clone())?;
		unsafe {
			self.replace_buffer(new_buf)
		}

		Ok(())
	}

	/// Appends an element to the back of a collection and returns a
	/// reference to it.
	///
	/// # Panics
	///
	/// Panics if the new capacity exceeds `isize::MAX` bytes.
	#[inline]
	pub fn push(&mut self, value: T) -> &mut T {
		let len = self.len;
		self.emplace_with(len, move || value)
	}

	/// The same as `push`, but returns on errors instead of panicking or aborting.
	///
	/// On error, the vector is left untouched and `value` is dropped.
	#[inline]
	pub fn try_push(&mut self, value: T) -> Result<&mut T, TryReserveError> {
		let len = self.len;
		match self.try_emplace_with(len, move || Ok::<_, Infallible>(value)) {
			Ok(elem) => Ok(elem),
			Err(EmplaceError::Reserve(e)) => Err(e),
			Err(EmplaceError::Element(never)) => match never {}
		}
	}

	/// Constructs a new element at the back of the vector with `f` and
	/// returns a reference to it.
	///
	/// If `f` panics, the vector is left untouched.
	#[inline]
	pub fn emplace_back_with<F>(&mut self, f: F) -> &mut T where F: FnOnce() -> T {
		let len = self.len;
		self.emplace_with(len, f)
	}

	/// Constructs a new element at the back of the vector with the fallible
	/// closure `f`.
	///
	/// If `f` fails, or if room cannot be made for the new element, the vector
	/// is left untouched.
	///
	/// ```
	/// # use grow_vec::{Vector, EmplaceError};
	/// let mut v: Vector<u8> = Vector::new();
	/// v.try_emplace_back_with(|| "7".parse()).unwrap();
	/// let e = v.try_emplace_back_with(|| "x".parse()).unwrap_err();
	/// assert!(matches!(e, EmplaceError::Element(_)));
	/// assert_eq!(v, [7]);
	/// ```
	#[inline]
	pub fn try_emplace_back_with<E, F>(&mut self, f: F) -> Result<&mut T, EmplaceError<E>> where F: FnOnce() -> Result<T, E> {
		let len = self.len;
		self.try_emplace_with(len, f)
	}

	/// Inserts an element at position `index` within the vector, shifting all
	/// elements after it to the right.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	#[inline]
	pub fn insert(&mut self, index: usize, element: T) -> &mut T {
		self.emplace_with(index, move || element)
	}

	/// Constructs a new element at position `index` with `f`, shifting all
	/// elements after it to the right.
	///
	/// If `f` panics, the vector is left untouched.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn emplace_with<F>(&mut self, index: usize, f: F) -> &mut T where F: FnOnce() -> T {
		match self.try_emplace_with(index, move || Ok::<_, Infallible>(f())) {
			Ok(elem) => elem,
			Err(EmplaceError::Reserve(e)) => handle_reserve(Err(e)),
			Err(EmplaceError::Element(never)) => match never {}
		}
	}

	/// Constructs a new element at position `index` with the fallible closure
	/// `f`, shifting all elements after it to the right.
	///
	/// If the buffer is full, a new one is allocated and the element is
	/// constructed directly at its final place in it, before any existing
	/// element is moved. On any failure the vector is left untouched.
	///
	/// # Panics
	///
	/// Panics if `index > len`.
	pub fn try_emplace_with<E, F>(&mut self, index: usize, f: F) -> Result<&mut T, EmplaceError<E>> where F: FnOnce() -> Result<T, E> {
		let len = self.len;
		if index > len {
			panic!("insertion index (is {}) should be <= len (is {})", index, len);
		}

		unsafe {
			if len < self.capacity() {
				// build the value before touching the buffer.
				let value = f().map_err(EmplaceError::Element)?;

				let p = self.buf.offset(index);
				// Shift everything over to make space.
				ptr::copy(p, p.add(1), len - index);
				ptr::write(p, value);
				self.len = len + 1;
				Ok(&mut *p)
			} else {
				let capacity = self.grown_capacity()?;
				let mut new_buf = RawMemory::try_with_capacity_in(capacity, self.buf.allocator().clone())?;

				// If `f` fails or panics, only `new_buf` (with no live element) is released.
				let value = f().map_err(EmplaceError::Element)?;
				ptr::write(new_buf.offset(index), value);

				self.replace_buffer_around(new_buf, index);
				self.len = len + 1;
				Ok(&mut *self.buf.offset(index))
			}
		}
	}

	/// Resizes the `Vector` in-place so that `len` is equal to `new_len`.
	///
	/// If `new_len` is greater than `len`, the vector is extended by the
	/// difference, with each additional slot filled with `T::default()`.
	/// If `new_len` is less than `len`, the vector is simply truncated.
	///
	/// The capacity grows to exactly `new_len` if it is too small, and never
	/// shrinks.
	#[inline]
	pub fn resize(&mut self, new_len: usize) where T: Default {
		self.resize_with(new_len, T::default)
	}

	/// Resizes the `Vector` in-place so that `len` is equal to `new_len`,
	/// filling new slots with values returned by `f`.
	///
	/// If `f` panics, the vector is left untouched.
	pub fn resize_with<F>(&mut self, new_len: usize, f: F) where F: FnMut() -> T {
		let len = self.len;

		if new_len > len {
			handle_reserve(self.extend_with(new_len - len, ExtendFunc(f)))
		} else {
			self.truncate(new_len);
		}
	}

	/// Resizes the `Vector` in-place so that `len` is equal to `new_len`,
	/// filling new slots with clones of `value`.
	///
	/// If a clone panics, the vector is left untouched.
	pub fn resize_value(&mut self, new_len: usize, value: T) where T: Clone {
		let len = self.len;

		if new_len > len {
			handle_reserve(self.extend_with(new_len - len, ExtendElement(value)))
		} else {
			self.truncate(new_len);
		}
	}

	/// Clones and appends all elements in a slice to the `Vector`.
	///
	/// If a clone panics, the vector is left untouched.
	#[inline]
	pub fn extend_from_slice(&mut self, other: &[T]) where T: Clone {
		handle_reserve(self.extend_with(other.len(), ExtendClone { slice: other, index: 0 }))
	}

	/// Capacity of the buffer replacing a full one.
	fn grown_capacity(&self) -> Result<usize, TryReserveError> {
		if self.len == 0 {
			Ok(1)
		} else {
			self.len.checked_mul(2).ok_or(TryReserveError::CapacityOverflow)
		}
	}

	/// Appends `n` values produced by `value`.
	///
	/// The values are built into the spare capacity, or into a new buffer
	/// when there is not enough of it, before anything else is touched.
	/// A new buffer is exactly `len + n` long.
	fn extend_with<E: ExtendWith<T>>(&mut self, n: usize, value: E) -> Result<(), TryReserveError> {
		let len = self.len;
		let new_len = len.checked_add(n).ok_or(TryReserveError::CapacityOverflow)?;

		unsafe {
			if new_len <= self.capacity() {
				fill(self.buf.offset(len), n, value);
			} else {
				let mut new_buf = RawMemory::try_with_capacity_in(new_len, self.buf.allocator().clone())?;
				fill(new_buf.offset(len), n, value);
				self.replace_buffer(new_buf);
			}
		}

		self.len = new_len;
		Ok(())
	}

	/// Moves the live elements into `new_buf`, which becomes the vector's buffer.
	///
	/// ## Safety
	///
	/// `new_buf` must be at least `len` long.
	unsafe fn replace_buffer(&mut self, mut new_buf: RawMemory<T, A>) {
		log::trace!(
			"replacing buffer of {} slots with {} slots ({} bytes each)",
			self.capacity(),
			new_buf.capacity(),
			mem::size_of::<T>()
		);

		ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len);
		self.buf.swap(&mut new_buf);
		// `new_buf` is now the old buffer, without live elements.
	}

	/// Same as `replace_buffer`, but leaves slot `gap` of the new buffer out,
	/// shifting the elements after it by one.
	///
	/// ## Safety
	///
	/// `new_buf` must be at least `len + 1` long and `gap` must be lower or
	/// equal to `len`.
	unsafe fn replace_buffer_around(&mut self, mut new_buf: RawMemory<T, A>, gap: usize) {
		log::trace!(
			"replacing buffer of {} slots with {} slots ({} bytes each)",
			self.capacity(),
			new_buf.capacity(),
			mem::size_of::<T>()
		);

		let src = self.buf.as_ptr();
		let dst = new_buf.as_mut_ptr();
		ptr::copy_nonoverlapping(src, dst, gap);
		ptr::copy_nonoverlapping(src.add(gap), dst.add(gap + 1), self.len - gap);
		self.buf.swap(&mut new_buf);
	}
}

/// Initialized prefix of an uninitialized run of slots.
///
/// Dropping it drops the values written so far, so that a panic while
/// filling the run leaks nothing.
struct PartialRun<T> {
	start: *mut T,
	initialized: usize
}

impl<T> PartialRun<T> {
	#[inline]
	fn new(start: *mut T) -> Self {
		PartialRun { start, initialized: 0 }
	}

	/// ## Safety
	///
	/// The next slot must be valid for writes.
	#[inline]
	unsafe fn write(&mut self, value: T) {
		ptr::write(self.start.add(self.initialized), value);
		self.initialized += 1;
	}

	/// Keeps the written values alive.
	#[inline]
	fn commit(self) {
		mem::forget(self)
	}
}

impl<T> Drop for PartialRun<T> {
	fn drop(&mut self) {
		unsafe {
			ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized))
		}
	}
}

/// Writes `n` values produced by `value` from `dst` on.
///
/// ## Safety
///
/// The `n` slots starting at `dst` must be valid for writes.
unsafe fn fill<T, E: ExtendWith<T>>(dst: *mut T, n: usize, mut value: E) {
	let mut run = PartialRun::new(dst);

	// Write all elements except the last one
	for _ in 1..n {
		run.write(value.next());
	}

	if n > 0 {
		// We can write the last element directly without cloning needlessly
		run.write(value.last());
	}

	run.commit()
}

// This code generalizes `resize_{value,with}` and `extend_from_slice`.
trait ExtendWith<T> {
	fn next(&mut self) -> T;
	fn last(self) -> T;
}

struct ExtendElement<T>(T);
impl<T: Clone> ExtendWith<T> for ExtendElement<T> {
	fn next(&mut self) -> T {
		self.0.clone()
	}
	fn last(self) -> T {
		self.0
	}
}

struct ExtendFunc<F>(F);
impl<T, F: FnMut() -> T> ExtendWith<T> for ExtendFunc<F> {
	fn next(&mut self) -> T {
		(self.0)()
	}
	fn last(mut self) -> T {
		(self.0)()
	}
}

struct ExtendClone<'s, T> {
	slice: &'s [T],
	index: usize
}
impl<'s, T: Clone> ExtendWith<T> for ExtendClone<'s, T> {
	fn next(&mut self) -> T {
		let value = self.slice[self.index].clone();
		self.index += 1;
		value
	}
	fn last(self) -> T {
		self.slice[self.index].clone()
	}
}

impl<T> Default for Vector<T, Global> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
	/// Deep copy, with a capacity equal to the length of `self`.
	///
	/// If a clone panics, the clones made so far are dropped and the new
	/// buffer is released.
	fn clone(&self) -> Self {
		let mut vec = Self::with_capacity_in(self.len, self.allocator().clone());
		unsafe {
			let mut run = PartialRun::new(vec.as_mut_ptr());
			for elem in self.iter() {
				run.write(elem.clone());
			}
			run.commit();
			vec.len = self.len;
		}

		vec
	}

	/// Copy-assignment.
	///
	/// When `source` does not fit in the current buffer, a full clone of
	/// `source` is built first and swapped in, leaving `self` untouched if a
	/// clone panics. Otherwise the existing elements are assigned in place
	/// with `T::clone_from`, the extra elements of `self` are dropped, and the
	/// extra elements of `source` cloned into the spare capacity.
	/// The capacity never shrinks.
	fn clone_from(&mut self, source: &Self) {
		if source.len > self.capacity() {
			let mut copy = source.clone();
			self.swap_with(&mut copy);
			return
		}

		let common = cmp::min(self.len, source.len);
		self[..common].clone_from_slice(&source[..common]);

		if self.len >= source.len {
			self.truncate(source.len);
		} else {
			let tail = &source[self.len..];
			unsafe {
				fill(self.buf.offset(self.len), tail.len(), ExtendClone { slice: tail, index: 0 });
			}
			self.len = source.len;
		}
	}
}

impl<T, A: Allocator> Deref for Vector<T, A> {
	type Target = [T];

	#[inline]
	fn deref(&self) -> &[T] {
		self.as_slice()
	}
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
	#[inline]
	fn deref_mut(&mut self) -> &mut [T] {
		self.as_mut_slice()
	}
}

impl<'v, T, A: Allocator> IntoIterator for &'v Vector<T, A> {
	type Item = &'v T;
	type IntoIter = slice::Iter<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'v, T, A: Allocator> IntoIterator for &'v mut Vector<T, A> {
	type Item = &'v mut T;
	type IntoIter = slice::IterMut<'v, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

/// An iterator that moves out of a vector.
///
/// This struct is created by the `into_iter` method on [`Vector`].
pub struct IntoIter<T, A: Allocator = Global> {
	buf: RawMemory<T, A>,

	/// Live elements are in `start..end`.
	start: usize,
	end: usize
}

impl<T, A: Allocator> IntoIter<T, A> {
	/// Returns the remaining items of this iterator as a slice.
	#[inline]
	pub fn as_slice(&self) -> &[T] {
		unsafe {
			slice::from_raw_parts(self.buf.offset(self.start), self.end - self.start)
		}
	}
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
	type Item = T;

	#[inline]
	fn next(&mut self) -> Option<T> {
		if self.start < self.end {
			unsafe {
				let item = ptr::read(self.buf.offset(self.start));
				self.start += 1;
				Some(item)
			}
		} else {
			None
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		let len = self.end - self.start;
		(len, Some(len))
	}
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
	#[inline]
	fn next_back(&mut self) -> Option<T> {
		if self.start < self.end {
			unsafe {
				self.end -= 1;
				Some(ptr::read(self.buf.offset(self.end)))
			}
		} else {
			None
		}
	}
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
	fn drop(&mut self) {
		unsafe {
			// only drop remaining elements.
			let remaining = ptr::slice_from_raw_parts_mut(self.buf.offset(self.start), self.end - self.start);
			ptr::drop_in_place(remaining)
		}
	}
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
	}
}

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
	type Item = T;
	type IntoIter = IntoIter<T, A>;

	fn into_iter(self) -> Self::IntoIter {
		let vec = ManuallyDrop::new(self);
		let end = vec.len;
		// SAFETY: `vec` is never dropped, so the buffer is moved out exactly once.
		let buf = unsafe { ptr::read(&vec.buf) };

		IntoIter {
			buf,
			start: 0,
			end
		}
	}
}

impl<T, A: Allocator + Clone> Extend<T> for Vector<T, A> {
	#[inline]
	fn extend<I: IntoIterator<Item = T>>(&mut self, iterator: I) {
		let iterator = iterator.into_iter();
		let (lower, _) = iterator.size_hint();
		self.reserve(self.len.saturating_add(lower));

		for element in iterator {
			self.push(element);
		}
	}
}

impl<'e, T: Copy + 'e, A: Allocator + Clone> Extend<&'e T> for Vector<T, A> {
	#[inline]
	fn extend<I: IntoIterator<Item = &'e T>>(&mut self, iterator: I) {
		self.extend(iterator.into_iter().copied())
	}
}

impl<T> FromIterator<T> for Vector<T, Global> {
	#[inline]
	fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
		let mut vec = Vector::new();
		vec.extend(iterator);
		vec
	}
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(&**self, f)
	}
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
	#[inline]
	fn as_ref(&self) -> &[T] {
		self
	}
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
	#[inline]
	fn as_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T, A: Allocator> Borrow<[T]> for Vector<T, A> {
	#[inline]
	fn borrow(&self) -> &[T] {
		self
	}
}

impl<T, A: Allocator> BorrowMut<[T]> for Vector<T, A> {
	#[inline]
	fn borrow_mut(&mut self) -> &mut [T] {
		self
	}
}

impl<T: Clone> From<&[T]> for Vector<T, Global> {
	#[inline]
	fn from(s: &[T]) -> Self {
		let mut vec = Vector::with_capacity(s.len());
		vec.extend_from_slice(s);
		vec
	}
}

impl<T, const N: usize> From<[T; N]> for Vector<T, Global> {
	#[inline]
	fn from(array: [T; N]) -> Self {
		let mut vec = Vector::with_capacity(N);
		vec.extend(array);
		vec
	}
}

impl<T> From<Vec<T>> for Vector<T, Global> {
	#[inline]
	fn from(v: Vec<T>) -> Self {
		let mut vec = Vector::with_capacity(v.len());
		vec.extend(v);
		vec
	}
}

impl<T, A: Allocator> From<Vector<T, A>> for Vec<T> {
	#[inline]
	fn from(vec: Vector<T, A>) -> Vec<T> {
		vec.into_iter().collect()
	}
}

macro_rules! impl_slice_eq1 {
	([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
		impl<$($vars)*> PartialEq<$rhs> for $lhs where T: PartialEq<U> {
			#[inline]
			fn eq(&self, other: &$rhs) -> bool { self[..] == other[..] }
			#[inline]
			fn ne(&self, other: &$rhs) -> bool { self[..] != other[..] }
		}
	}
}

impl_slice_eq1! { [T, U, A: Allocator, B: Allocator] Vector<T, A>, Vector<U, B> }
impl_slice_eq1! { [T, U, A: Allocator] Vector<T, A>, Vec<U> }
impl_slice_eq1! { [T, U, A: Allocator] Vec<T>, Vector<U, A> }
impl_slice_eq1! { [T, U, A: Allocator] Vector<T, A>, [U] }
impl_slice_eq1! { [T, U, A: Allocator] Vector<T, A>, &[U] }
impl_slice_eq1! { [T, U, A: Allocator] Vector<T, A>, &mut [U] }
impl_slice_eq1! { [T, U, A: Allocator] &[T], Vector<U, A> }
impl_slice_eq1! { [T, U, A: Allocator, const N: usize] Vector<T, A>, [U; N] }
impl_slice_eq1! { [T, U, A: Allocator, const N: usize] Vector<T, A>, &[U; N] }
impl_slice_eq1! { [T, U, A: Allocator, const N: usize] [T; N], Vector<U, A> }

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for Vector<T, A> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
		PartialOrd::partial_cmp(&**self, &**other)
	}
}

impl<T: Ord, A: Allocator> Ord for Vector<T, A> {
	#[inline]
	fn cmp(&self, other: &Self) -> cmp::Ordering {
		Ord::cmp(&**self, &**other)
	}
}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {
	#[inline]
	fn hash<H: Hasher>(&self, state: &mut H) {
		Hash::hash(&**self, state)
	}
}
