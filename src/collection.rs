//! Contains the [`DenseArena`] type, which is the main type of this crate.

use alloc::vec::Vec;
use core::{
	fmt::{self, Debug, Formatter},
	ops::{Index, IndexMut},
};

use crate::{
	error::{Error, Result},
	key::{Key, Signed},
	slot::Slot,
};

/// A [`DenseArena`] is a collection of values that can be accessed by a [`Key`].
/// Values are kept packed in a [`Vec`] so iterating them touches no gaps,
/// while keys stay stable across insertions and removals of other values.
///
/// Removal moves the last value into the freed position, so the order of
/// values is unspecified and changes over time.
pub struct DenseArena<K: Key, T> {
	pub(crate) values: Vec<T>,
	pub(crate) slots: Vec<Slot<K::Index>>,
	pub(crate) next: Option<K::Index>,
}

impl<K: Key, T> DenseArena<K, T> {
	/// Creates a new, empty [`DenseArena`].
	#[inline]
	#[must_use]
	pub const fn new() -> Self {
		Self {
			values: Vec::new(),
			slots: Vec::new(),
			next: None,
		}
	}

	/// Creates a new, empty [`DenseArena`] with the specified capacity.
	#[inline]
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			values: Vec::with_capacity(capacity),
			slots: Vec::with_capacity(capacity),
			next: None,
		}
	}

	/// Clears the [`DenseArena`], removing all values and forgetting every key.
	#[inline]
	pub fn clear(&mut self) {
		self.values.clear();
		self.slots.clear();
		self.next = None;
	}

	/// Returns the total number of values the [`DenseArena`] can hold without reallocating.
	#[inline]
	#[must_use]
	pub fn capacity(&self) -> usize {
		self.values.capacity()
	}

	#[inline]
	fn vacant_slots(&self) -> usize {
		self.slots.len() - self.values.len()
	}

	/// Reserves capacity for at least `additional` more values to be
	/// inserted in the given [`DenseArena`]. The collection may reserve more
	/// space to speculatively avoid frequent reallocations.
	pub fn reserve(&mut self, additional: usize) {
		let fresh = additional.saturating_sub(self.vacant_slots());

		self.values.reserve(additional);
		self.slots.reserve(fresh);
	}

	/// Reserves the minimum capacity for exactly `additional` more values to be
	/// inserted in the given [`DenseArena`].
	pub fn reserve_exact(&mut self, additional: usize) {
		let fresh = additional.saturating_sub(self.vacant_slots());

		self.values.reserve_exact(additional);
		self.slots.reserve_exact(fresh);
	}

	/// Shrinks the capacity of the arena as much as possible. Slots that
	/// were ever handed out are kept so their keys can be reused.
	pub fn shrink_to_fit(&mut self) {
		self.values.shrink_to_fit();
		self.slots.shrink_to_fit();
	}

	/// Returns the number of values in the [`DenseArena`].
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns `true` if the [`DenseArena`] contains no values.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the values as a slice, in dense order.
	#[inline]
	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		&self.values
	}

	/// Returns the values as a mutable slice, in dense order.
	#[inline]
	#[must_use]
	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.values
	}

	// A key is live only if the position it points at points back to it.
	#[inline]
	fn position_of(&self, key: K) -> Option<usize> {
		let index = key.index();
		let position = self.slots.get(index.try_into_usize()?)?.position()?.into_usize();

		if position >= self.values.len() {
			return None;
		}

		(self.slots[position].owner? == index).then_some(position)
	}

	#[inline]
	fn position_unchecked(&self, key: K) -> usize {
		debug_assert!(self.position_of(key).is_some(), "invalid key");

		let slot = &self.slots[key.index().into_usize()];

		slot.position().expect("invalid key").into_usize()
	}

	/// Returns a reference to the value corresponding to the key.
	#[inline]
	#[must_use]
	pub fn get(&self, key: K) -> Option<&T> {
		self.position_of(key).map(|position| &self.values[position])
	}

	/// Returns a mutable reference to the value corresponding to the key.
	#[inline]
	#[must_use]
	pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
		self.position_of(key).map(|position| &mut self.values[position])
	}

	/// Returns a reference to the value corresponding to the key, or
	/// [`Error::InvalidHandle`] if the key is not live.
	#[inline]
	pub fn at(&self, key: K) -> Result<&T> {
		self.get(key).ok_or_else(|| Error::invalid_handle(key))
	}

	/// Returns a mutable reference to the value corresponding to the key, or
	/// [`Error::InvalidHandle`] if the key is not live.
	#[inline]
	pub fn at_mut(&mut self, key: K) -> Result<&mut T> {
		self.get_mut(key).ok_or_else(|| Error::invalid_handle(key))
	}

	/// Returns `true` if the [`DenseArena`] contains the key.
	#[inline]
	#[must_use]
	pub fn contains_key(&self, key: K) -> bool {
		self.position_of(key).is_some()
	}

	/// Returns `1` if the [`DenseArena`] contains the key, `0` otherwise.
	#[inline]
	#[must_use]
	pub fn count(&self, key: K) -> usize {
		usize::from(self.contains_key(key))
	}

	/// Returns the position of the key's value within [`DenseArena::as_slice`].
	#[inline]
	#[must_use]
	pub fn find(&self, key: K) -> Option<usize> {
		self.position_of(key)
	}

	/// Returns the key owning the value at `position` of [`DenseArena::as_slice`].
	#[inline]
	#[must_use]
	pub fn key_at(&self, position: usize) -> Option<K> {
		if position >= self.values.len() {
			return None;
		}

		self.slots[position].owner.map(K::new)
	}

	/// Attempts to insert the value built by `f`, returning its key. The
	/// function is only called once a slot for the value is available.
	pub fn try_emplace(&mut self, f: impl FnOnce() -> T) -> Result<K> {
		let position = self.values.len();
		// The live count may not exceed `MAX`, so the last usable position is `MAX - 1`.
		let dense = K::Index::try_from_usize(position)
			.filter(|&dense| dense != K::Index::MAX)
			.ok_or_else(Error::full::<K>)?;
		let value = f();

		let index = if let Some(index) = self.next {
			debug_assert!(self.slots[position].owner.is_none());

			self.next = self.slots[index.into_usize()].set(dense);
			self.slots[position].owner = Some(index);

			index
		} else {
			debug_assert_eq!(self.slots.len(), position);

			self.slots.push(Slot::occupied(dense));

			dense
		};

		self.values.push(value);

		let key = K::new(index);

		debug_assert_eq!(self.position_of(key), Some(position));

		Ok(key)
	}

	/// Inserts the value built by `f`, returning its key.
	///
	/// # Panics
	///
	/// Panics if the key type cannot address another slot.
	#[inline]
	#[must_use]
	pub fn emplace(&mut self, f: impl FnOnce() -> T) -> K {
		self.try_emplace(f).unwrap_or_else(|error| panic!("{error}"))
	}

	/// Inserts a value into the [`DenseArena`], returning the key.
	///
	/// # Panics
	///
	/// Panics if the key type cannot address another slot.
	#[inline]
	#[must_use]
	pub fn insert(&mut self, value: T) -> K {
		self.emplace(|| value)
	}

	// Exchanges which position each key points at and fixes the back links.
	fn relink(&mut self, a: K, from: usize, b: K, to: usize) {
		let owner = self.slots[from].owner;

		self.slots[from].owner = self.slots[to].owner;
		self.slots[to].owner = owner;

		let (a, b) = (a.index().into_usize(), b.index().into_usize());
		let link = self.slots[a].link;

		self.slots[a].link = self.slots[b].link;
		self.slots[b].link = link;
	}

	/// Swaps which value each key refers to, without moving the values.
	/// Afterwards `a` refers to what `b` referred to, and the reverse.
	///
	/// # Panics
	///
	/// Panics if either key is not live.
	pub fn shuffle(&mut self, a: K, b: K) {
		let from = self.position_unchecked(a);
		let to = self.position_unchecked(b);

		self.relink(a, from, b, to);

		debug_assert_eq!(self.position_of(a), Some(to));
		debug_assert_eq!(self.position_of(b), Some(from));
	}

	/// Attempts to swap which value each key refers to, failing with
	/// [`Error::InvalidHandle`] if either key is not live.
	pub fn try_shuffle(&mut self, a: K, b: K) -> Result<()> {
		let from = self.position_of(a).ok_or_else(|| Error::invalid_handle(a))?;
		let to = self.position_of(b).ok_or_else(|| Error::invalid_handle(b))?;

		self.relink(a, from, b, to);

		Ok(())
	}

	fn remove_at(&mut self, key: K, position: usize) -> T {
		let last = self.values.len() - 1;

		if position != last {
			let moved = self.slots[last].owner;

			debug_assert!(moved.is_some(), "position {last} has no owner");

			if let Some(moved) = moved {
				self.relink(key, position, K::new(moved), last);
			}
		}

		let index = key.index();
		let next = self.next.replace(index);
		let vacated = self.slots[index.into_usize()].unset(next);

		debug_assert_eq!(vacated.into_usize(), last);

		self.slots[last].owner = None;
		self.values.swap_remove(position)
	}

	/// Attempts to remove a value from the [`DenseArena`], returning the value if successful.
	#[inline]
	pub fn try_remove(&mut self, key: K) -> Option<T> {
		let position = self.position_of(key)?;

		Some(self.remove_at(key, position))
	}

	/// Removes a value from the [`DenseArena`], returning the value.
	/// The last value takes its place in dense storage.
	///
	/// # Panics
	///
	/// Panics if the key is not live.
	#[inline]
	pub fn remove(&mut self, key: K) -> T {
		let position = self.position_unchecked(key);

		self.remove_at(key, position)
	}

	/// Retains only the values specified by the predicate.
	pub fn retain(&mut self, mut f: impl FnMut(K, &T) -> bool) {
		self.retain_mut(|key, value| f(key, value));
	}

	/// Retains only the values specified by the predicate, passing a mutable reference to it.
	pub fn retain_mut(&mut self, mut f: impl FnMut(K, &mut T) -> bool) {
		let mut position = 0;

		while let Some(key) = self.key_at(position) {
			if f(key, &mut self.values[position]) {
				position += 1;
			} else {
				// The last value now sits at `position` and is visited next.
				self.remove_at(key, position);
			}
		}
	}
}

impl<K: Key, T> Default for DenseArena<K, T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<K: Key, T: Clone> Clone for DenseArena<K, T> {
	fn clone(&self) -> Self {
		Self {
			values: self.values.clone(),
			slots: self.slots.clone(),
			next: self.next,
		}
	}
}

impl<K: Key + Debug, T: Debug> Debug for DenseArena<K, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K: Key, T> Index<K> for DenseArena<K, T> {
	type Output = T;

	#[inline]
	fn index(&self, key: K) -> &Self::Output {
		&self.values[self.position_unchecked(key)]
	}
}

impl<K: Key, T> IndexMut<K> for DenseArena<K, T> {
	#[inline]
	fn index_mut(&mut self, key: K) -> &mut Self::Output {
		let position = self.position_unchecked(key);

		&mut self.values[position]
	}
}

impl<K: Key, T> Extend<T> for DenseArena<K, T> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		let iter = iter.into_iter();

		self.reserve(iter.size_hint().0);

		for value in iter {
			let _key = self.insert(value);
		}
	}
}

impl<K: Key, T> FromIterator<T> for DenseArena<K, T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		let mut arena = Self::new();

		arena.extend(iter);
		arena
	}
}
