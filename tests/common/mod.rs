#![allow(dead_code)]
use std::{
	alloc::Layout,
	cell::Cell,
	ptr::NonNull,
	rc::Rc
};
use grow_vec::{
	AllocError,
	Allocator,
	Global
};

thread_local! {
	static CREATED: Cell<usize> = Cell::new(0);
	static DROPPED: Cell<usize> = Cell::new(0);
	static FUSE: Cell<Option<usize>> = Cell::new(None);
}

/// Panic message used by armed `Tracked` values.
pub const BOOM: &str = "boom";

/// Element type counting its constructions and drops.
///
/// Clones and default constructions can be armed to panic with [`arm`].
/// Counters are per thread, so tests do not interfere.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Tracked(pub u32);

impl Tracked {
	pub fn new(value: u32) -> Self {
		CREATED.with(|c| c.set(c.get() + 1));
		Tracked(value)
	}

	fn fallible_construction(value: u32) -> Self {
		FUSE.with(|f| {
			if let Some(n) = f.get() {
				if n == 0 {
					f.set(None);
					panic!("{}", BOOM);
				}
				f.set(Some(n - 1));
			}
		});
		Self::new(value)
	}
}

impl Clone for Tracked {
	fn clone(&self) -> Self {
		Self::fallible_construction(self.0)
	}
}

impl Default for Tracked {
	fn default() -> Self {
		Self::fallible_construction(0)
	}
}

impl Drop for Tracked {
	fn drop(&mut self) {
		DROPPED.with(|d| d.set(d.get() + 1));
	}
}

/// Makes the `k`-th next clone or default construction panic (0-based).
pub fn arm(k: usize) {
	FUSE.with(|f| f.set(Some(k)));
}

pub fn disarm() {
	FUSE.with(|f| f.set(None));
}

pub fn created() -> usize {
	CREATED.with(Cell::get)
}

pub fn dropped() -> usize {
	DROPPED.with(Cell::get)
}

/// Number of `Tracked` values currently alive on this thread.
pub fn live() -> usize {
	created() - dropped()
}

pub fn tracked(values: &[u32]) -> Vec<Tracked> {
	values.iter().map(|v| Tracked::new(*v)).collect()
}

pub fn values(items: &[Tracked]) -> Vec<u32> {
	items.iter().map(|t| t.0).collect()
}

/// Allocator handle that fails once its budget of allocations is spent.
///
/// Clones share the same budget and counters.
#[derive(Clone)]
pub struct FailingAllocator {
	state: Rc<AllocatorState>
}

struct AllocatorState {
	budget: Cell<usize>,
	allocations: Cell<usize>,
	deallocations: Cell<usize>
}

impl FailingAllocator {
	pub fn new(budget: usize) -> Self {
		FailingAllocator {
			state: Rc::new(AllocatorState {
				budget: Cell::new(budget),
				allocations: Cell::new(0),
				deallocations: Cell::new(0)
			})
		}
	}

	pub fn set_budget(&self, budget: usize) {
		self.state.budget.set(budget)
	}

	pub fn allocations(&self) -> usize {
		self.state.allocations.get()
	}

	pub fn deallocations(&self) -> usize {
		self.state.deallocations.get()
	}

	pub fn outstanding(&self) -> usize {
		self.allocations() - self.deallocations()
	}
}

unsafe impl Allocator for FailingAllocator {
	fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
		let budget = self.state.budget.get();
		if budget == 0 {
			return Err(AllocError)
		}

		let ptr = Global.allocate(layout)?;
		self.state.budget.set(budget - 1);
		self.state.allocations.set(self.state.allocations.get() + 1);
		Ok(ptr)
	}

	unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
		self.state.deallocations.set(self.state.deallocations.get() + 1);
		Global.deallocate(ptr, layout)
	}
}
