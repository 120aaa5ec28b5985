//! Forward list error types

use thiserror::Error;

/// Errors returned by positional operations on a [`ForwardList`].
///
/// Every variant describes a position that has no node to act on. The list
/// is left exactly as it was before the failing call.
///
/// [`ForwardList`]: crate::ForwardList
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ForwardListError {
    /// The cursor is at the end position, which has no next link to
    /// advance through, insert after, or erase after.
    #[error("cursor is past the end of the list")]
    PastTheEnd,

    /// The cursor references the last position of the chain, so there is no
    /// node after it to erase.
    #[error("no element follows the cursor")]
    NoSuccessor,
}
