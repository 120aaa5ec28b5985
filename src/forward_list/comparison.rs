//! Equality, lexicographic ordering and hashing for [`ForwardList`].
//!
//! Two lists are equal when they have the same length and equal elements in
//! the same order. Ordering is lexicographic: the first differing element
//! decides, and a list that is a proper prefix of another is the smaller.
//!
//! `<` only ever asks the elements `x < y`. The other relational operators
//! are derived from it:
//!
//! | operator | definition    |
//! |----------|---------------|
//! | `a <= b` | `!(b < a)`    |
//! | `a > b`  | `b < a`       |
//! | `a >= b` | `!(a < b)`    |
//!
//! For element types with a total order this matches [`Ord::cmp`]. For
//! partially ordered elements (floats with NaN) incomparable pairs are
//! treated as equivalent and the walk continues.

use crate::forward_list::list::ForwardList;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for ForwardList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ForwardList<T> {}

impl<T: PartialOrd> PartialOrd for ForwardList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }

    fn lt(&self, other: &Self) -> bool {
        let mut rhs = other.iter();
        for left in self {
            match rhs.next() {
                None => return false,
                Some(right) if left < right => return true,
                Some(right) if right < left => return false,
                Some(_) => {}
            }
        }
        rhs.next().is_some()
    }

    fn le(&self, other: &Self) -> bool {
        !other.lt(self)
    }

    fn gt(&self, other: &Self) -> bool {
        other.lt(self)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl<T: Ord> Ord for ForwardList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for ForwardList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}
