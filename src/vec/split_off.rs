// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)` (capacity unchanged),
    /// - the returned vector contains the tail `[at..len)`, with capacity
    ///   equal to its length.
    ///
    /// On `Err`, `self` is left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `at > len()`.
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        assert!(at <= len, "split index (is {at}) should be <= len (is {len})");

        let tail_len = len - at;
        let mut other = Self::with_capacity(tail_len)?;
        // SAFETY: `[at, len)` is live in `self`; `other` has `tail_len` vacant
        // slots in a different block. Ownership moves with `len` updates.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(at), other.buf.slot_mut(0), tail_len);
        }
        self.len = at;
        other.len = tail_len;
        Ok(other)
    }
}
