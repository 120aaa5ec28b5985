//! # Singly-Linked Forward List
//!
//! A generic singly-linked sequence container written in safe Rust. The list
//! supports forward traversal, insertion and removal after any position, and
//! O(1) push/pop at the front, with the value semantics expected from a
//! standard sequence container: deep clone, copy-and-swap assignment,
//! equality and lexicographic ordering.
//!
//! ## Key Features
//!
//! - **Sentinel Head**: The list keeps a sentinel link in front of the first
//!   element. Every element therefore has a predecessor position, and edits
//!   at the front use the same "insert after" / "erase after" operations as
//!   edits anywhere else.
//!
//! - **Single Ownership**: Each node is owned by exactly one link, the one
//!   preceding it. No reference counting, no shared nodes, no cycles. Nodes
//!   are released iteratively, so dropping a very long list never recurses.
//!
//! - **Cached Length**: `len()` is O(1). The count is updated on every
//!   insertion and removal, never recomputed by walking the chain.
//!
//! - **Forward Cursors**: [`Cursor`] is a cheap read-only position;
//!   [`CursorMut`] owns the list exclusively and splices nodes in and out
//!   after its position. Cursors of both kinds compare by position.
//!
//! - **Checked Positions**: Operations that have no node to act on (advance
//!   past the end, erase after the last element, pop from an empty list)
//!   return [`ForwardListError`] or `None` instead of misbehaving. Cursors
//!   borrow their list, so a position from another list or from a node that
//!   was removed cannot be used at all.
//!
//! - **Serde Support**: With the default `serde` feature a list serializes
//!   as a plain sequence.
//!
//! ## Positions
//!
//! | Position     | Read-only                  | Mutable                        |
//! |--------------|----------------------------|--------------------------------|
//! | before-begin | `before_begin()`           | `before_begin_mut()`           |
//! | first        | `begin()`                  | `begin_mut()`                  |
//! | end          | `end()` / `Cursor::default()` | reached by `move_next()`    |
//!
//! ## Example
//!
//! ```rust
//! use forwardlist_rs::ForwardList;
//!
//! let mut list = ForwardList::from([1, 2, 3]);
//!
//! // Insert a new first element through the sentinel position.
//! list.before_begin_mut().insert_after(0).unwrap();
//! assert_eq!(list.len(), 4);
//!
//! // Remove the element after the first one.
//! let removed = list.begin_mut().erase_after().unwrap();
//! assert_eq!(removed, 1);
//!
//! assert_eq!(list, ForwardList::from([0, 2, 3]));
//! assert!(ForwardList::from([1, 2]) < ForwardList::from([1, 2, 3]));
//! ```
//!
//! ## Thread Safety
//!
//! The list does no internal synchronization. It is `Send` and `Sync`
//! whenever `T` is, and concurrent mutation needs an external lock, as with
//! any `std` collection.
//!
//! ## Logging
//!
//! Bulk operations (`clear`, copy-and-swap assignment, deserialization)
//! emit `tracing` events at `TRACE` level. Per-element operations do not
//! log.

pub mod forward_list;

pub mod prelude;

pub use forward_list::{
    Cursor, CursorMut, ForwardList, ForwardListError, IntoIter, Iter, IterMut, swap,
};
