//! Serde support for [`ForwardList`].
//!
//! A list serializes as a plain sequence, front to back, and deserializes
//! from any sequence keeping its order. With `serde_json`:
//!
//! ```
//! use forwardlist_rs::ForwardList;
//!
//! let list = ForwardList::from([1, 2, 3]);
//! let json = serde_json::to_string(&list).unwrap();
//! assert_eq!(json, "[1,2,3]");
//!
//! let restored: ForwardList<i32> = serde_json::from_str(&json).unwrap();
//! assert_eq!(restored, list);
//! ```
//!
//! # Feature Gate
//!
//! Enabled by the `serde` feature (on by default):
//!
//! ```toml
//! [dependencies]
//! forwardlist-rs = { version = "0.1", features = ["serde"] }
//! ```

use crate::forward_list::list::ForwardList;
use serde::de::{Error as _, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

impl<T: Serialize> Serialize for ForwardList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ForwardList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ForwardListVisitor(PhantomData))
    }
}

struct ForwardListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ForwardListVisitor<T> {
    type Value = ForwardList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = ForwardList::new();
        let mut cursor = list.before_begin_mut();
        while let Some(value) = seq.next_element()? {
            cursor.insert_after(value).map_err(A::Error::custom)?;
        }
        trace!(len = list.len(), "forward list deserialized");
        Ok(list)
    }
}
