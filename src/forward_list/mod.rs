//! Forward list implementation: the node chain, its cursors and iterators.

/// Equality, lexicographic ordering and hashing.
pub mod comparison;
/// Read-only and mutable forward cursors.
pub mod cursor;
pub mod error;
/// Standard iterators over the list.
pub mod iterators;
pub mod list;
/// Serde support (requires the `serde` feature).
#[cfg(feature = "serde")]
pub mod serialization;

pub use cursor::{Cursor, CursorMut};
pub use error::ForwardListError;
pub use iterators::{IntoIter, Iter, IterMut};
pub use list::{ForwardList, swap};
