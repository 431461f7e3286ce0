// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::handle_error, error::Error, vec::Vector};

impl<T: Clone> Vector<T> {
    /// Clones into a new vector whose capacity is exactly `self.len()`.
    ///
    /// If an element's `clone` panics, the clones made so far are dropped and
    /// `self` is untouched.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut out = Self::with_capacity(self.len)?;
        for item in self.as_slice() {
            let value = item.clone();
            // SAFETY: `out.len < self.len == out.capacity()`, slot is vacant.
            unsafe { out.buf.write(out.len, value) };
            out.len += 1;
        }
        Ok(out)
    }

    /// Makes `self` equal to `source`, reusing storage when it is large enough.
    ///
    /// - `source.len() > self.capacity()`: a complete clone of `source` is
    ///   built first and then exchanged in. Any failure (an `Err`, or a panic
    ///   in `T::clone`) leaves `self` unmodified.
    /// - Otherwise the existing buffer is kept: missing tail elements are
    ///   cloned in, excess ones are dropped, and the shared prefix is updated
    ///   element-wise with [`Clone::clone_from`]. A panic part-way leaves a
    ///   valid vector whose contents are a mix of old and new values.
    ///
    /// ```rust
    /// use raw_buffer_vec::Vector;
    ///
    /// let src: Vector<i32> = [7, 8].into();
    /// let mut dst: Vector<i32> = [1, 2, 3, 4, 5].into();
    /// dst.try_clone_from(&src).unwrap();
    /// assert_eq!(dst.as_slice(), &[7, 8]);
    /// assert_eq!(dst.capacity(), 5);
    /// ```
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error> {
        if source.len > self.capacity() {
            let mut copy = source.try_clone()?;
            self.exchange(&mut copy);
            return Ok(());
        }

        let shared = self.len.min(source.len);
        if self.len < source.len {
            for item in &source.as_slice()[self.len..] {
                let value = item.clone();
                // SAFETY: `self.len < source.len <= capacity`, slot is vacant.
                unsafe { self.buf.write(self.len, value) };
                self.len += 1;
            }
        } else {
            self.truncate(source.len);
        }

        for (dst, src) in self.as_mut_slice()[..shared]
            .iter_mut()
            .zip(source.as_slice())
        {
            dst.clone_from(src);
        }
        Ok(())
    }
}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| handle_error(e))
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(e) = self.try_clone_from(source) {
            handle_error(e)
        }
    }
}
