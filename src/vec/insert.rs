// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::RawBuffer, error::Error, vec::Vector};

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Inserts `value` before position `index`, shifting later elements right,
    /// and returns a reference to the inserted element.
    ///
    /// `index == len()` appends. On `Err`, `value` is dropped and the vector is
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<&mut T, Error> {
        self.emplace(index, || value)
    }

    /// Inserts the value produced by `make` before position `index` and
    /// returns a reference to it.
    ///
    /// - **Growth** (`len == capacity`): a buffer of `max(1, 2 * capacity)`
    ///   slots is allocated, `make`'s value is written at `index`, and the
    ///   prefix `[0, index)` and suffix `[index, len)` are moved around it.
    /// - **No growth**: `make` runs before any existing element is touched;
    ///   then the suffix shifts one slot right and the value lands at `index`.
    ///
    /// Either way, a panic in `make` leaves the vector unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    ///
    /// ```rust
    /// use raw_buffer_vec::Vector;
    ///
    /// let mut v: Vector<&str> = ["a", "c"].into();
    /// v.emplace(1, || "b").unwrap();
    /// assert_eq!(v.as_slice(), &["a", "b", "c"]);
    /// ```
    pub fn emplace<F: FnOnce() -> T>(&mut self, index: usize, make: F) -> Result<&mut T, Error> {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if index == len {
            return self.emplace_back(make);
        }
        if len == self.capacity() {
            return self.emplace_growing(index, make);
        }

        let value = make();
        // SAFETY: `len < capacity`, so `[index, len)` can move one slot right
        // into `[index + 1, len + 1)`; `ptr::copy` handles the overlap. Slot
        // `index` is then vacant and receives `value`.
        unsafe {
            let at = self.buf.slot_mut(index);
            ptr::copy(at, at.add(1), len - index);
            at.write(value);
        }
        self.len = len + 1;
        // SAFETY: slot `index` was just initialized.
        Ok(unsafe { &mut *self.buf.slot_mut(index) })
    }

    /// Growth path shared by `emplace` and `emplace_back`.
    ///
    /// Nothing observable happens to `self` until every fallible step
    /// (allocation, `make`) has succeeded.
    pub(crate) fn emplace_growing<F: FnOnce() -> T>(
        &mut self,
        index: usize,
        make: F,
    ) -> Result<&mut T, Error> {
        let len = self.len;
        debug_assert!(index <= len);
        let mut new_buf = RawBuffer::allocate(self.grown_capacity()?)?;

        // If `make` panics, `new_buf` is dropped (freed, nothing to destroy)
        // and `self` was never touched.
        let value = make();
        // SAFETY: `index <= len < new capacity`; the new block is all vacant.
        unsafe { new_buf.write(index, value) };

        // SAFETY: the old block has `[0, len)` live; the new block has room for
        // `len + 1` values with slot `index` already taken. The blocks are
        // distinct, so the copies never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(0), new_buf.slot_mut(0), index);
            ptr::copy_nonoverlapping(
                self.buf.slot(index),
                new_buf.slot_mut(index + 1),
                len - index,
            );
        }
        self.buf.exchange(&mut new_buf);
        self.len = len + 1;
        // `new_buf` now owns the old block; its values were moved out, so it
        // is only deallocated.
        drop(new_buf);

        // SAFETY: slot `index` of the adopted block was initialized above.
        Ok(unsafe { &mut *self.buf.slot_mut(index) })
    }
}
