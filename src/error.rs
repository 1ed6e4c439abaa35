//! Error types for the checked arena operations.

use thiserror::Error;

use crate::key::{Key, Signed};

/// Result type alias for fallible arena operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Failures reported by the checked arena operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
	#[error("key I{index} does not refer to a live value")]
	InvalidHandle { index: i64 },

	#[error("arena is full: the key type allows at most {max} live values")]
	Full { max: usize },
}

impl Error {
	pub(crate) fn invalid_handle<K: Key>(key: K) -> Self {
		Self::InvalidHandle {
			index: key.index().widen(),
		}
	}

	pub(crate) fn full<K: Key>() -> Self {
		let max = K::Index::MAX.into_usize();

		Self::Full { max }
	}
}
