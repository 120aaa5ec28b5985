//! Singly-linked forward list with a sentinel head link.
//!
//! The list owns its nodes through a chain of `Option<Box<Node<T>>>` links.
//! The `head` field plays the role of the sentinel node: it holds no value
//! and its link points at the first real element. Because every real node
//! has a predecessor link (the sentinel's for the first one), insertion and
//! removal are uniformly expressed as "after a position".

use crate::forward_list::cursor::{Cursor, CursorMut};
use crate::forward_list::iterators::{Iter, IterMut};
use std::fmt;
use std::mem;
use tracing::trace;

/// Exclusive link to the next node; `None` marks the end of the chain.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of the chain, owned by its predecessor link.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Link<T>) -> Self {
        Self { value, next }
    }
}

/// Walks to the link that terminates the chain starting at `link`.
fn last_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// A singly-linked sequence container.
///
/// `ForwardList` supports forward traversal, O(1) insertion and removal
/// after any position reached by a [`CursorMut`], and O(1) front push/pop.
/// The element count is cached and maintained on every edit.
///
/// # Positions
///
/// Three kinds of position exist:
/// - the *before-begin* position (the sentinel), returned by
///   [`before_begin`](Self::before_begin) and
///   [`before_begin_mut`](Self::before_begin_mut), needed to edit the front;
/// - one position per element, starting at [`begin`](Self::begin);
/// - the *end* position, [`end`](Self::end), which references no node.
///
/// Cursors borrow the list, so a position can never outlive the node it
/// references or be used with a different list.
///
/// # Thread Safety
///
/// The list has no internal synchronization. It is `Send`/`Sync` exactly
/// when `T` is; shared mutation across threads requires an external lock.
///
/// # Examples
///
/// ```
/// use forwardlist_rs::ForwardList;
///
/// let mut list = ForwardList::new();
/// list.push_front(5);
/// list.push_front(3);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![3, 5]);
/// assert_eq!(list.len(), 2);
/// ```
pub struct ForwardList<T> {
    /// Sentinel: the link preceding the first element.
    head: Link<T>,
    len: usize,
}

impl<T> ForwardList<T> {
    /// Creates an empty list holding only the sentinel.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of elements, in O(1).
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element, or `None` if empty.
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.value)
    }

    /// Prepends `value` in O(1).
    pub fn push_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node::new(value, next)));
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// This is [`CursorMut::erase_after`] applied at the before-begin
    /// position.
    pub fn pop_front(&mut self) -> Option<T> {
        self.before_begin_mut().erase_after().ok()
    }

    /// Removes every element, keeping the sentinel.
    ///
    /// Nodes are released one at a time, so arbitrarily long chains do not
    /// recurse. Calling this on an empty list is a no-op.
    pub fn clear(&mut self) {
        let released = self.release_chain();
        if released > 0 {
            trace!(released, "forward list cleared");
        }
    }

    /// Exchanges the contents of two lists in O(1).
    ///
    /// Only the sentinel links and the cached counts move; no node is
    /// touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.head, &mut other.head);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Returns a read-only cursor at the before-begin position.
    #[must_use]
    pub fn before_begin(&self) -> Cursor<'_, T> {
        Cursor::before_begin(&self.head)
    }

    /// Same as [`before_begin`](Self::before_begin).
    #[must_use]
    pub fn cbefore_begin(&self) -> Cursor<'_, T> {
        self.before_begin()
    }

    /// Returns a mutable cursor at the before-begin position.
    ///
    /// This is the position to use for inserting or erasing at the front
    /// of the list.
    #[must_use]
    pub fn before_begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::before_begin(&mut self.head, &mut self.len)
    }

    /// Returns a read-only cursor at the first element, or at the end
    /// position if the list is empty.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::at(self.head.as_deref())
    }

    /// Same as [`begin`](Self::begin).
    #[must_use]
    pub fn cbegin(&self) -> Cursor<'_, T> {
        self.begin()
    }

    /// Returns a mutable cursor at the first element, or at the end
    /// position if the list is empty.
    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::at(self.head.as_deref_mut(), &mut self.len)
    }

    /// Returns the end position, which references no node.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::default()
    }

    /// Same as [`end`](Self::end).
    #[must_use]
    pub fn cend(&self) -> Cursor<'_, T> {
        self.end()
    }

    /// Returns an iterator over shared references, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Returns an iterator over mutable references, front to back.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.head.as_deref_mut(), self.len)
    }

    /// Appends every value of `values` after the current last element,
    /// preserving their order.
    fn append<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let Self { head, len } = self;
        let mut tail = last_link(head);
        for value in values {
            let node = tail.insert(Box::new(Node::new(value, None)));
            tail = &mut node.next;
            *len += 1;
        }
    }

    /// Drops every node iteratively and returns how many were released.
    fn release_chain(&mut self) -> usize {
        let released = mem::take(&mut self.len);
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        released
    }
}

/// Exchanges the contents of two lists in O(1).
pub fn swap<T>(lhs: &mut ForwardList<T>, rhs: &mut ForwardList<T>) {
    lhs.swap(rhs);
}

impl<T> Default for ForwardList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ForwardList<T> {
    fn drop(&mut self) {
        self.release_chain();
    }
}

impl<T: Clone> Clone for ForwardList<T> {
    /// Deep-copies the chain; the copy shares no node with `self`.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy-and-swap assignment.
    ///
    /// The full copy of `source` is built before `self` is touched, so a
    /// panic while cloning an element leaves `self` unchanged. The previous
    /// contents are dropped with the temporary.
    fn clone_from(&mut self, source: &Self) {
        let mut replacement = source.clone();
        self.swap(&mut replacement);
        trace!(
            len = self.len,
            replaced = replacement.len,
            "forward list assigned by copy-and-swap"
        );
    }
}

impl<T> FromIterator<T> for ForwardList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut list = Self::new();
        list.append(values);
        list
    }
}

impl<T> Extend<T> for ForwardList<T> {
    /// Appends the values after the last element, in order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.append(values);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for ForwardList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, values: I) {
        self.append(values.into_iter().copied());
    }
}

impl<T, const N: usize> From<[T; N]> for ForwardList<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for ForwardList<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
