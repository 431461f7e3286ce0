// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Vector`](crate::Vector).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence. Storage failures while growing are
//!   reported as deserialization errors rather than aborting.

// Crate imports
use crate::vec::Vector;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on what a sequence's `size_hint` may pre-reserve.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for Vector<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for VecVisitor<T> {
    type Value = Vector<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = Vector::<T>::with_capacity(hint).map_err(de::Error::custom)?;
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::Vector;
    use alloc::string::String;

    #[test]
    fn test_serde_roundtrip_json() {
        let v: Vector<i32> = [1, 2, 3].into();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let back: Vector<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(back.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let v: Vector<i32> = Vector::with_capacity(4).unwrap();
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[]");
        let back: Vector<i32> = serde_json::from_str(&s).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_serde_owned_elements() {
        let back: Vector<String> = serde_json::from_str(r#"["a","bc"]"#).unwrap();
        assert_eq!(back.as_slice(), &["a", "bc"]);
    }

    #[test]
    fn test_vecvisitor_expecting_message() {
        let err = serde_json::from_str::<Vector<i32>>(r#"{"not":"an array"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence"), "unexpected error message: {msg}");
    }

    #[test]
    fn test_deserialize_move_only_type() {
        use serde::Deserialize;

        #[derive(Debug, PartialEq, Eq, Deserialize)]
        struct NoClone(i32);

        let v: Vector<NoClone> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(v.as_slice(), &[NoClone(1), NoClone(2), NoClone(3)]);
    }
}
