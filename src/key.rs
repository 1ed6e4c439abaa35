//! Contains the [`Key`] trait and a default implementation.
//! It is used to address values stored in a [`DenseArena`](crate::collection::DenseArena).

macro_rules! impl_signed {
	($t:ty) => {
		impl Signed for $t {
			const MAX: Self = Self::MAX;
			const INVALID: Self = -1;

			#[inline]
			fn try_from_usize(value: usize) -> Option<Self> {
				Self::try_from(value).ok()
			}

			#[inline]
			fn try_into_usize(self) -> Option<usize> {
				usize::try_from(self).ok()
			}

			#[inline]
			fn widen(self) -> i64 {
				// Lossless for every implementor on targets up to 64 bits.
				self as i64
			}
		}
	};
}

/// A signed integer usable as the index of a [`Key`]. Its width bounds
/// how many slots an arena can ever allocate.
pub trait Signed: Copy + Eq + core::fmt::Debug {
	/// The largest representable slot index.
	const MAX: Self;

	/// A value that is never issued as a slot index.
	const INVALID: Self;

	/// Returns the value, if it is representable.
	fn try_from_usize(value: usize) -> Option<Self>;

	/// Returns the value as a `usize`, or `None` if it is negative.
	fn try_into_usize(self) -> Option<usize>;

	/// Returns the value as an `i64`, for reporting.
	fn widen(self) -> i64;

	/// Returns the value as a `usize`, assuming it was produced by the arena.
	#[inline]
	fn into_usize(self) -> usize {
		self.try_into_usize().expect("value must be representable")
	}
}

impl_signed!(i8);
impl_signed!(i16);
impl_signed!(i32);
impl_signed!(i64);
impl_signed!(isize);

/// A key for a value in an arena. It can be implemented to allow
/// for better type safety, such as one newtype per stored type.
pub trait Key: Copy + Eq {
	type Index: Signed;

	/// Constructs a key from a raw slot index.
	fn new(index: Self::Index) -> Self;

	/// The slot index of the key.
	fn index(self) -> Self::Index;
}

/// A well rounded key type that can be used in most situations.
/// It wraps a signed slot index, `i32` unless stated otherwise.
///
/// Keys carry no version: once a value is removed, its slot may be
/// handed out again and an old copy of the key will address the newcomer.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Id<I = i32> {
	index: I,
}

impl<I: Signed> Key for Id<I> {
	type Index = I;

	#[inline]
	fn new(index: Self::Index) -> Self {
		Self { index }
	}

	#[inline]
	fn index(self) -> Self::Index {
		self.index
	}
}

impl<I: Signed> Default for Id<I> {
	#[inline]
	fn default() -> Self {
		Self { index: I::INVALID }
	}
}

impl<I: core::fmt::Display> core::fmt::Display for Id<I> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "I{}", self.index)
	}
}
