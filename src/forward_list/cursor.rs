//! Forward cursors over a [`ForwardList`].
//!
//! A cursor references one position of the chain: the before-begin
//! sentinel, a node, or the end. [`Cursor`] is a read-only `Copy` handle;
//! [`CursorMut`] holds the list exclusively and carries the "insert after"
//! and "erase after" protocol.
//!
//! Both kinds compare by position identity, so a `Cursor` can be compared
//! with a `CursorMut` and the end position compares equal to
//! `Cursor::default()`.
//!
//! [`ForwardList`]: crate::ForwardList

use crate::forward_list::error::ForwardListError;
use crate::forward_list::list::{Link, Node};
use std::fmt;
use std::mem;
use std::ptr;

enum Position<'a, T> {
    BeforeBegin(&'a Link<T>),
    Node(&'a Node<T>),
    End,
}

impl<T> Clone for Position<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<'_, T> {}

/// Address identifying a position: the sentinel link, the node, or null for
/// the end.
fn position_address<T>(position: &Position<'_, T>) -> *const () {
    match *position {
        Position::BeforeBegin(link) => ptr::from_ref::<Link<T>>(link).cast(),
        Position::Node(node) => ptr::from_ref::<Node<T>>(node).cast(),
        Position::End => ptr::null(),
    }
}

/// A read-only forward cursor.
///
/// Cheap to copy. Advancing never changes the list, and every copy stays
/// valid for as long as the list is borrowed.
///
/// # Examples
///
/// ```
/// use forwardlist_rs::ForwardList;
///
/// let list = ForwardList::from([1, 2, 3]);
/// let mut cursor = list.begin();
/// assert_eq!(cursor.get(), Some(&1));
///
/// let previous = cursor.advance().unwrap();
/// assert_eq!(previous.get(), Some(&1));
/// assert_eq!(cursor.get(), Some(&2));
/// ```
pub struct Cursor<'a, T> {
    position: Position<'a, T>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn before_begin(head: &'a Link<T>) -> Self {
        Self {
            position: Position::BeforeBegin(head),
        }
    }

    pub(crate) fn at(node: Option<&'a Node<T>>) -> Self {
        let position = match node {
            Some(node) => Position::Node(node),
            None => Position::End,
        };
        Self { position }
    }

    /// Returns `true` at the before-begin (sentinel) position.
    #[must_use]
    pub fn is_before_begin(&self) -> bool {
        matches!(self.position, Position::BeforeBegin(_))
    }

    /// Returns `true` at the end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self.position, Position::End)
    }

    /// Returns the element at the cursor.
    ///
    /// `None` at the before-begin and end positions, which hold no value.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        match self.position {
            Position::Node(node) => Some(&node.value),
            Position::BeforeBegin(_) | Position::End => None,
        }
    }

    /// Returns the element right after the cursor, if any.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'a T> {
        self.next_link()?.as_deref().map(|node| &node.value)
    }

    /// Moves to the next position.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardListError::PastTheEnd`] if the cursor is already at
    /// the end; the cursor does not move.
    pub fn move_next(&mut self) -> Result<(), ForwardListError> {
        let link = self.next_link().ok_or(ForwardListError::PastTheEnd)?;
        *self = Self::at(link.as_deref());
        Ok(())
    }

    /// Moves to the next position and returns the position held before
    /// the move.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardListError::PastTheEnd`] if the cursor is already at
    /// the end; the cursor does not move.
    pub fn advance(&mut self) -> Result<Self, ForwardListError> {
        let previous = *self;
        self.move_next()?;
        Ok(previous)
    }

    fn next_link(&self) -> Option<&'a Link<T>> {
        match self.position {
            Position::BeforeBegin(link) => Some(link),
            Position::Node(node) => Some(&node.next),
            Position::End => None,
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Default for Cursor<'_, T> {
    /// The singular cursor: references no node and equals any end cursor.
    fn default() -> Self {
        Self {
            position: Position::End,
        }
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        ptr::eq(
            position_address(&self.position),
            position_address(&other.position),
        )
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::BeforeBegin(_) => f.write_str("Cursor(before-begin)"),
            Position::Node(node) => f.debug_tuple("Cursor").field(&node.value).finish(),
            Position::End => f.write_str("Cursor(end)"),
        }
    }
}

enum Slot<'a, T> {
    BeforeBegin(&'a mut Link<T>),
    Node(&'a mut Node<T>),
    End,
}

impl<'a, T> Slot<'a, T> {
    fn at(node: Option<&'a mut Node<T>>) -> Self {
        match node {
            Some(node) => Slot::Node(node),
            None => Slot::End,
        }
    }

    fn into_next_link(self) -> Option<&'a mut Link<T>> {
        match self {
            Slot::BeforeBegin(link) => Some(link),
            Slot::Node(node) => Some(&mut node.next),
            Slot::End => None,
        }
    }
}

/// A read/write forward cursor holding its list exclusively.
///
/// Besides moving forward and editing the current value, a `CursorMut`
/// splices nodes in and out right after its position. Starting from
/// [`ForwardList::before_begin_mut`] every element, the first included, can
/// be reached that way.
///
/// The cached element count of the list is updated by every edit.
///
/// # Examples
///
/// ```
/// use forwardlist_rs::ForwardList;
///
/// let mut list = ForwardList::from([1, 2, 3]);
///
/// let mut cursor = list.before_begin_mut();
/// cursor.insert_after(0).unwrap();
/// assert_eq!(cursor.current(), Some(&mut 0));
///
/// let removed = cursor.erase_after().unwrap();
/// assert_eq!(removed, 1);
/// assert_eq!(cursor.peek_next(), Some(&mut 2));
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3]);
/// ```
///
/// [`ForwardList::before_begin_mut`]: crate::ForwardList::before_begin_mut
pub struct CursorMut<'a, T> {
    slot: Slot<'a, T>,
    len: &'a mut usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn before_begin(head: &'a mut Link<T>, len: &'a mut usize) -> Self {
        Self {
            slot: Slot::BeforeBegin(head),
            len,
        }
    }

    pub(crate) fn at(node: Option<&'a mut Node<T>>, len: &'a mut usize) -> Self {
        Self {
            slot: Slot::at(node),
            len,
        }
    }

    /// Returns `true` at the before-begin (sentinel) position.
    #[must_use]
    pub fn is_before_begin(&self) -> bool {
        matches!(self.slot, Slot::BeforeBegin(_))
    }

    /// Returns `true` at the end position.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self.slot, Slot::End)
    }

    /// Returns the element at the cursor, `None` at before-begin and end.
    #[must_use]
    pub fn current(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Node(node) => Some(&mut node.value),
            Slot::BeforeBegin(_) | Slot::End => None,
        }
    }

    /// Returns the element right after the cursor, if any.
    #[must_use]
    pub fn peek_next(&mut self) -> Option<&mut T> {
        self.next_link()?.as_deref_mut().map(|node| &mut node.value)
    }

    /// Returns a read-only view of the current position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        match &self.slot {
            Slot::BeforeBegin(link) => Cursor::before_begin(&**link),
            Slot::Node(node) => Cursor::at(Some(&**node)),
            Slot::End => Cursor::default(),
        }
    }

    /// Moves to the next position.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardListError::PastTheEnd`] if the cursor is already at
    /// the end.
    pub fn move_next(&mut self) -> Result<(), ForwardListError> {
        let link = mem::replace(&mut self.slot, Slot::End)
            .into_next_link()
            .ok_or(ForwardListError::PastTheEnd)?;
        self.slot = Slot::at(link.as_deref_mut());
        Ok(())
    }

    /// Allocates a node holding `value` and splices it right after the
    /// cursor. The cursor then references the new node.
    ///
    /// Valid at every position but the end, including before-begin, where
    /// it inserts a new first element.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardListError::PastTheEnd`] at the end position; the
    /// list is unchanged and `value` is dropped.
    pub fn insert_after(&mut self, value: T) -> Result<(), ForwardListError> {
        let link = mem::replace(&mut self.slot, Slot::End)
            .into_next_link()
            .ok_or(ForwardListError::PastTheEnd)?;
        let next = link.take();
        let node = link.insert(Box::new(Node::new(value, next)));
        *self.len += 1;
        self.slot = Slot::Node(&mut **node);
        Ok(())
    }

    /// Unlinks the node right after the cursor and returns its value.
    ///
    /// The cursor does not move; its next position becomes the node that
    /// followed the removed one, or the end.
    ///
    /// # Errors
    ///
    /// - [`ForwardListError::NoSuccessor`] if no node follows the cursor.
    /// - [`ForwardListError::PastTheEnd`] at the end position.
    ///
    /// The list is unchanged in both cases.
    pub fn erase_after(&mut self) -> Result<T, ForwardListError> {
        let link = self.next_link().ok_or(ForwardListError::PastTheEnd)?;
        let mut removed = link.take().ok_or(ForwardListError::NoSuccessor)?;
        *link = removed.next.take();
        *self.len -= 1;
        Ok(removed.value)
    }

    fn next_link(&mut self) -> Option<&mut Link<T>> {
        match &mut self.slot {
            Slot::BeforeBegin(link) => Some(&mut **link),
            Slot::Node(node) => Some(&mut node.next),
            Slot::End => None,
        }
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        self.as_cursor() == other.as_cursor()
    }
}

impl<'b, T> PartialEq<Cursor<'b, T>> for CursorMut<'_, T> {
    fn eq(&self, other: &Cursor<'b, T>) -> bool {
        self.as_cursor() == *other
    }
}

impl<'b, T> PartialEq<CursorMut<'b, T>> for Cursor<'_, T> {
    fn eq(&self, other: &CursorMut<'b, T>) -> bool {
        *self == other.as_cursor()
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_cursor(), f)
    }
}
