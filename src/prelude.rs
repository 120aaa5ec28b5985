/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Prelude module that re-exports commonly used types.
//!
//! Instead of importing each type individually, you can use:
//!
//! ```rust
//! use forwardlist_rs::prelude::*;
//!
//! let list: ForwardList<u32> = ForwardList::from([1, 2, 3]);
//! assert_eq!(list.len(), 3);
//! ```

// Container
pub use crate::forward_list::{ForwardList, swap};

// Positions and iteration
pub use crate::forward_list::{Cursor, CursorMut, IntoIter, Iter, IterMut};

// Errors
pub use crate::forward_list::ForwardListError;
