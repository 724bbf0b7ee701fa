mod common;

use std::panic::{catch_unwind, AssertUnwindSafe};
use grow_vec::{EmplaceError, Vector};
use common::{arm, created, disarm, dropped, live, tracked, values, Tracked};

/// Snapshot of what must survive a failed call.
fn state(v: &Vector<Tracked>) -> (usize, usize, Vec<u32>) {
	(v.len(), v.capacity(), values(v))
}

/// Runs `f`, which must panic, and checks that it left `v` as it was and
/// that every value built during the attempt was dropped.
fn assert_rolled_back<F>(v: &mut Vector<Tracked>, f: F) where F: FnOnce(&mut Vector<Tracked>) {
	let before = state(v);
	let live_before = live();

	let result = catch_unwind(AssertUnwindSafe(|| f(v)));
	disarm();

	assert!(result.is_err(), "the operation was expected to panic");
	assert_eq!(state(v), before);
	assert_eq!(live(), live_before);
}

#[test]
fn panicking_emplace_back_on_full_buffer() {
	let mut v = Vector::from(tracked(&[1, 2, 3, 4]));
	assert_eq!(v.len(), v.capacity());

	assert_rolled_back(&mut v, |v| {
		v.emplace_back_with(|| panic!("boom"));
	});
}

#[test]
fn panicking_emplace_back_with_spare_capacity() {
	let mut v = Vector::with_capacity(8);
	v.extend(tracked(&[1, 2]));

	assert_rolled_back(&mut v, |v| {
		v.emplace_back_with(|| -> Tracked { panic!("boom") });
	});
}

#[test]
fn panicking_insert_construction() {
	let mut full = Vector::from(tracked(&[1, 2, 3]));
	assert_rolled_back(&mut full, |v| {
		v.emplace_with(1, || -> Tracked { panic!("boom") });
	});

	let mut roomy = Vector::with_capacity(10);
	roomy.extend(tracked(&[1, 2, 3]));
	assert_rolled_back(&mut roomy, |v| {
		v.emplace_with(0, || -> Tracked { panic!("boom") });
	});
}

#[test]
fn panicking_clone_during_resize_value() {
	for k in 0..4 {
		// full buffer: a new one is needed.
		let mut v = Vector::from(tracked(&[1, 2]));
		assert_rolled_back(&mut v, |v| {
			arm(k);
			v.resize_value(7, Tracked::new(9));
		});

		// enough capacity: built in place.
		let mut v = Vector::with_capacity(10);
		v.extend(tracked(&[1, 2]));
		assert_rolled_back(&mut v, |v| {
			arm(k);
			v.resize_value(7, Tracked::new(9));
		});
	}
}

#[test]
fn panicking_default_during_resize() {
	for k in 0..3 {
		let mut v = Vector::from(tracked(&[5, 6, 7]));
		assert_rolled_back(&mut v, |v| {
			arm(k);
			v.resize(6);
		});
	}
}

#[test]
fn panicking_default_during_sized_construction() {
	let live_before = live();
	let result = catch_unwind(|| {
		arm(2);
		Vector::<Tracked>::with_len(5)
	});
	disarm();

	assert!(result.is_err());
	assert_eq!(live(), live_before);
}

#[test]
fn panicking_clone_during_extend_from_slice() {
	let source = tracked(&[10, 20, 30]);
	for k in 0..3 {
		let mut v = Vector::from(tracked(&[1]));
		assert_rolled_back(&mut v, |v| {
			arm(k);
			v.extend_from_slice(&source);
		});
	}
}

#[test]
fn panicking_clone_during_copy_construction() {
	let source = Vector::from(tracked(&[1, 2, 3, 4]));
	for k in 0..4 {
		let created_before = created();
		let dropped_before = dropped();

		let result = catch_unwind(AssertUnwindSafe(|| {
			arm(k);
			source.clone()
		}));
		disarm();

		assert!(result.is_err());
		assert_eq!(created() - created_before, k);
		assert_eq!(dropped() - dropped_before, k);
		assert_eq!(values(&source), [1, 2, 3, 4]);
	}
}

#[test]
fn panicking_clone_during_reallocating_copy_assignment() {
	let source = Vector::from(tracked(&[1, 2, 3, 4, 5]));
	for k in 0..5 {
		let mut dst = Vector::from(tracked(&[8, 9]));
		assert_rolled_back(&mut dst, |dst| {
			arm(k);
			dst.clone_from(&source);
		});
	}
}

#[test]
fn panicking_clone_during_in_place_copy_assignment() {
	let source = Vector::from(tracked(&[1, 2, 3, 4, 5]));
	let mut dst = Vector::with_capacity(8);
	dst.extend(tracked(&[8, 9]));
	let capacity = dst.capacity();
	let live_before = live();

	// clone_from on the common prefix uses `clone`, then the tail is cloned.
	let result = catch_unwind(AssertUnwindSafe(|| {
		arm(3);
		dst.clone_from(&source);
	}));
	disarm();

	// weaker guarantee: the prefix was assigned, nothing leaked.
	assert!(result.is_err());
	assert_eq!(dst.capacity(), capacity);
	assert_eq!(dst.len(), 2);
	assert_eq!(values(&dst), [1, 2]);
	assert_eq!(live(), live_before);
}

#[test]
fn failing_closure_leaves_the_vector_untouched() {
	let mut v = Vector::from(tracked(&[1, 2]));
	let before = state(&v);
	let live_before = live();

	let err = v.try_emplace_back_with(|| Err::<Tracked, _>("nope")).unwrap_err();
	assert!(matches!(err, EmplaceError::Element("nope")));
	assert_eq!(state(&v), before);

	let err = v.try_emplace_with(1, || Err::<Tracked, _>("still nope")).unwrap_err();
	assert_eq!(err.into_element(), Some("still nope"));
	assert_eq!(state(&v), before);
	assert_eq!(live(), live_before);

	v.try_emplace_with(1, || Ok::<_, &str>(Tracked::new(7))).unwrap();
	assert_eq!(values(&v), [1, 7, 2]);
}
