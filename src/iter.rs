//! Contains the arena iterator types.

use alloc::vec;
use core::{iter::FusedIterator, slice};

use crate::{collection::DenseArena, key::Key, slot::Slot};

macro_rules! impl_iterator {
	($doc:literal, $name:ident, $values:ty, $owners:ty, $item:ty, [$($lt:lifetime)?]) => {
		impl<$($lt,)? K: Key, T> Iterator for $name<$($lt,)? K, T> {
			type Item = (K, $item);

			#[inline]
			fn next(&mut self) -> Option<Self::Item> {
				let value = self.values.next()?;
				let owner = self.owners.next()?.owner?;

				Some((K::new(owner), value))
			}

			#[inline]
			fn size_hint(&self) -> (usize, Option<usize>) {
				self.values.size_hint()
			}
		}

		impl<$($lt,)? K: Key, T> DoubleEndedIterator for $name<$($lt,)? K, T> {
			#[inline]
			fn next_back(&mut self) -> Option<Self::Item> {
				let value = self.values.next_back()?;
				let owner = self.owners.next_back()?.owner?;

				Some((K::new(owner), value))
			}
		}

		impl<$($lt,)? K: Key, T> ExactSizeIterator for $name<$($lt,)? K, T> {}

		impl<$($lt,)? K: Key, T> FusedIterator for $name<$($lt,)? K, T> {}

		#[doc = $doc]
		pub struct $name<$($lt,)? K: Key, T> {
			values: $values,
			owners: $owners,
		}
	};
}

impl_iterator!(
	"An iterator over the keys and values of the arena, in dense order.",
	Iter,
	slice::Iter<'a, T>,
	slice::Iter<'a, Slot<K::Index>>,
	&'a T,
	['a]
);
impl_iterator!(
	"A mutable iterator over the keys and values of the arena, in dense order.",
	IterMut,
	slice::IterMut<'a, T>,
	slice::Iter<'a, Slot<K::Index>>,
	&'a mut T,
	['a]
);
impl_iterator!(
	"An owning iterator over the keys and values of the arena.",
	IntoIter,
	vec::IntoIter<T>,
	vec::IntoIter<Slot<K::Index>>,
	T,
	[]
);
impl_iterator!(
	"A draining iterator over the keys and values of the arena.",
	Drain,
	vec::Drain<'a, T>,
	vec::IntoIter<Slot<K::Index>>,
	T,
	['a]
);

pub struct Keys<'a, K: Key, T> {
	iter: Iter<'a, K, T>,
}

impl<'a, K: Key, T> Iterator for Keys<'a, K, T> {
	type Item = K;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		self.iter.next().map(|entry| entry.0)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<'a, K: Key, T> DoubleEndedIterator for Keys<'a, K, T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		self.iter.next_back().map(|entry| entry.0)
	}
}

impl<K: Key, T> ExactSizeIterator for Keys<'_, K, T> {}

impl<K: Key, T> FusedIterator for Keys<'_, K, T> {}

impl<K: Key, T> DenseArena<K, T> {
	#[inline]
	fn owners(&self) -> slice::Iter<'_, Slot<K::Index>> {
		self.slots[..self.values.len()].iter()
	}

	/// Returns an iterator over the arena keys and values.
	#[must_use]
	pub fn iter(&self) -> Iter<'_, K, T> {
		Iter {
			values: self.values.iter(),
			owners: self.owners(),
		}
	}

	/// Returns a mutable iterator over the arena keys and values.
	#[must_use]
	pub fn iter_mut(&mut self) -> IterMut<'_, K, T> {
		let len = self.values.len();

		IterMut {
			values: self.values.iter_mut(),
			owners: self.slots[..len].iter(),
		}
	}

	/// Returns an iterator over the arena keys.
	#[must_use]
	pub fn keys(&self) -> Keys<'_, K, T> {
		Keys { iter: self.iter() }
	}

	/// Returns an iterator over the arena values. This is a plain walk
	/// over dense storage.
	#[must_use]
	pub fn values(&self) -> slice::Iter<'_, T> {
		self.values.iter()
	}

	/// Returns a mutable iterator over the arena values.
	#[must_use]
	pub fn values_mut(&mut self) -> slice::IterMut<'_, T> {
		self.values.iter_mut()
	}

	/// Removes every value, returning them with their keys. All keys
	/// are forgotten, even if the iterator is not fully consumed.
	pub fn drain(&mut self) -> Drain<'_, K, T> {
		let mut owners = core::mem::take(&mut self.slots);

		owners.truncate(self.values.len());
		self.next = None;

		Drain {
			values: self.values.drain(..),
			owners: owners.into_iter(),
		}
	}
}

impl<'a, K: Key, T> IntoIterator for &'a DenseArena<K, T> {
	type Item = (K, &'a T);
	type IntoIter = Iter<'a, K, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, K: Key, T> IntoIterator for &'a mut DenseArena<K, T> {
	type Item = (K, &'a mut T);
	type IntoIter = IterMut<'a, K, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl<K: Key, T> IntoIterator for DenseArena<K, T> {
	type Item = (K, T);
	type IntoIter = IntoIter<K, T>;

	fn into_iter(self) -> Self::IntoIter {
		let Self {
			values, mut slots, ..
		} = self;

		slots.truncate(values.len());

		IntoIter {
			values: values.into_iter(),
			owners: slots.into_iter(),
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::{
		collection::DenseArena,
		key::{Id, Key},
	};

	#[test]
	fn iterate_all() {
		const COUNT: i32 = 100;

		let mut arena = DenseArena::<Id, i32>::with_capacity(COUNT as usize);

		for i in 0..COUNT {
			let _id = arena.insert(COUNT - i);
		}

		let mut count = 0;

		for (id, value) in &arena {
			assert_eq!(*value, COUNT - id.index());

			count += 1;
		}

		assert_eq!(count, COUNT);
	}

	#[test]
	fn iterate_after_removals() {
		let mut arena = DenseArena::<Id, i32>::new();
		let keys: Vec<_> = (0..10).map(|i| arena.insert(i)).collect();

		arena.remove(keys[0]);
		arena.remove(keys[4]);

		assert_eq!(arena.iter().len(), 8);
		assert_eq!(arena.keys().rev().count(), 8);

		for (id, value) in &mut arena {
			*value = id.index() * 10;
		}

		let mut seen: Vec<_> = arena.iter().map(|(id, &value)| (id.index(), value)).collect();

		seen.sort_unstable();

		let expected: Vec<_> = [1, 2, 3, 5, 6, 7, 8, 9].iter().map(|&i| (i, i * 10)).collect();

		assert_eq!(seen, expected);
		assert_eq!(arena.values().sum::<i32>(), expected.iter().map(|e| e.1).sum::<i32>());
	}

	#[test]
	fn drain_forgets_keys() {
		let mut arena = DenseArena::<Id, &str>::new();

		let a = arena.insert("a");
		let b = arena.insert("b");
		let c = arena.insert("c");

		arena.remove(b);

		let mut drained: Vec<_> = arena.drain().collect();

		drained.sort_unstable();

		assert_eq!(drained, [(a, "a"), (c, "c")]);
		assert!(arena.is_empty());
		assert_eq!(arena.count(a), 0);

		let d = arena.insert("d");

		assert_eq!(d.index(), 0);
	}

	#[test]
	fn into_iter_owns_values() {
		let mut arena = DenseArena::<Id, String>::new();

		let a = arena.insert("a".to_owned());
		let _b = arena.insert("b".to_owned());

		arena.remove(a);

		let rest: Vec<_> = arena.into_iter().rev().map(|(_, value)| value).collect();

		assert_eq!(rest, ["b"]);
	}
}
