// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::handle_error, error::Error, vec::Vector};

impl<T, const M: usize> From<[T; M]> for Vector<T> {
    /// Moves the array's elements into a vector with `capacity == M`.
    fn from(arr: [T; M]) -> Self {
        let mut v = Self::with_capacity(M).unwrap_or_else(|e| handle_error(e));
        for item in arr {
            // SAFETY: `v.len < M == capacity`, slot is vacant.
            unsafe { v.buf.write(v.len, item) };
            v.len += 1;
        }
        v
    }
}

impl<T: Clone> TryFrom<&[T]> for Vector<T> {
    type Error = Error;

    /// Clones `src` into a vector with `capacity == src.len()`.
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        let mut v = Self::with_capacity(src.len())?;
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
