// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::Vector};

impl<T> Vector<T> {
    /// Appends `value` to the back.
    ///
    /// At capacity, grows to `max(1, 2 * capacity)`: the new element goes
    /// into its final slot of the new buffer before the existing elements are
    /// moved over.
    ///
    /// On `Err`, `value` is dropped and the vector is unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        self.emplace_back(|| value).map(|_| ())
    }

    /// Appends the value produced by `make` and returns a reference to it.
    ///
    /// When growth is needed, `make` runs only after the new storage was
    /// obtained, and its result is written straight into its final slot. If
    /// `make` panics, the fresh storage is released and the vector is left as
    /// it was.
    ///
    /// ```rust
    /// use raw_buffer_vec::Vector;
    ///
    /// let mut v: Vector<(u8, char)> = Vector::new();
    /// let slot = v.emplace_back(|| (1, 'a')).unwrap();
    /// slot.1 = 'b';
    /// assert_eq!(v.as_slice(), &[(1, 'b')]);
    /// ```
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> Result<&mut T, Error> {
        let len = self.len;
        if len == self.capacity() {
            return self.emplace_growing(len, make);
        }
        let value = make();
        // SAFETY: `len < capacity`, so slot `len` exists and is vacant.
        unsafe { self.buf.write(len, value) };
        self.len = len + 1;
        // SAFETY: slot `len` was just initialized.
        Ok(unsafe { &mut *self.buf.slot_mut(len) })
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// Never panics and never touches capacity.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: Before decrementing, `buf[..old_len]` was live, so the
            // old last slot still holds a value that is no longer counted.
            let out = unsafe { self.buf.read(self.len) };
            Some(out)
        }
    }
}
