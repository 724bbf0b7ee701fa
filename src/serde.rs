use core::{
	cmp,
	fmt,
	marker::PhantomData
};
use serde::{
	de::{
		Deserialize,
		Deserializer,
		SeqAccess,
		Visitor
	},
	ser::{
		Serialize,
		Serializer
	}
};
use crate::{
	alloc::Allocator,
	vector::Vector
};

impl<T: Serialize, A: Allocator> Serialize for Vector<T, A> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter())
	}
}

struct VectorVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for VectorVisitor<T> {
	type Value = Vector<T>;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a sequence")
	}

	fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Vector<T>, S::Error> {
		// do not trust the size hint too much.
		let capacity = cmp::min(seq.size_hint().unwrap_or(0), 4096);
		let mut vec = Vector::with_capacity(capacity);

		while let Some(elem) = seq.next_element()? {
			vec.push(elem);
		}

		Ok(vec)
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_seq(VectorVisitor(PhantomData))
	}
}
