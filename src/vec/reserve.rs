// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::RawBuffer, error::Error, vec::Vector};

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Ensures `capacity() >= new_capacity`.
    ///
    /// - No-op if `new_capacity <= capacity()`; capacity is never reduced.
    /// - Otherwise allocates a buffer of **exactly** `new_capacity` slots,
    ///   moves the live elements into it and releases the old one.
    ///
    /// On `Err` the vector is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) -> Result<(), Error> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let new_buf = RawBuffer::allocate(new_capacity)?;
        self.relocate(new_buf);
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    ///
    /// Growing reserves exactly `new_len` if needed; shrinking drops the
    /// excess elements from the back. See [`resize_with`](Self::resize_with).
    #[inline]
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error>
    where
        T: Default,
    {
        self.resize_with(new_len, T::default)
    }

    /// Resizes to `new_len`, filling new slots with values produced by `f`.
    ///
    /// Storage is acquired before `f` is first called, so an `Err` leaves the
    /// vector unchanged. If `f` panics, the elements constructed before the
    /// panic stay in the vector.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), Error> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        self.reserve(new_len)?;
        while self.len < new_len {
            let value = f();
            // SAFETY: `len < new_len <= capacity`, and slot `len` is vacant.
            unsafe { self.buf.write(self.len, value) };
            self.len += 1;
        }
        Ok(())
    }

    /// Drops the elements `[new_len, len)`. No-op if `new_len >= len`.
    ///
    /// Keeps the capacity.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len;
        if new_len >= len {
            return;
        }
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: `[new_len, len)` was live and is no longer reachable through
        // `self.len`.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.slot_mut(new_len), len - new_len);
            ptr::drop_in_place(tail);
        }
    }

    /// Drops every element. Keeps the capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }
}
