#![forbid(unsafe_code)]

//! A `DenseArena` keeps its values packed together in a [`Vec`], as a sparse set does, while handing out keys that stay valid until their own value is removed. Removal moves the last value into the hole, and a table of slots threaded with a free list keeps every other key pointing at the same value.
//!
//! ## Example
//!
//! ```rust
//! # use dense_arena::{collection::DenseArena, key::Id};
//! let mut arena = DenseArena::<Id, &str>::new();
//!
//! let hello = arena.insert("Hello");
//! let world = arena.insert("World");
//!
//! arena.remove(hello);
//!
//! assert_eq!(arena[world], "World");
//! assert_eq!(arena.as_slice(), ["World"]);
//! assert_eq!(arena.at(hello), Err(dense_arena::Error::InvalidHandle { index: 0 }));
//! ```
//!
//! ## Features
//!
//! - `O(1)` insertion, removal and access by key
//! - Values iterated as one contiguous slice
//! - Keys can trade the values they address with `shuffle`
//! - Custom key types and index widths
//! - No `unsafe` code
//!
//! Keys are not versioned. After a removal the slot is reused, and a stale
//! copy of the old key then addresses the new value.

extern crate alloc;

pub mod collection;
pub mod error;
pub mod iter;
pub mod key;
mod slot;

pub use error::{Error, Result};
