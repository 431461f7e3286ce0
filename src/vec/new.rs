// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{buffer::RawBuffer, error::Error, vec::Vector};

impl<T> Vector<T> {
    /// Constructs an empty vector. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Constructs an empty vector with room for exactly `capacity` elements.
    ///
    /// Returns an [`Error`] if the storage cannot be obtained.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuffer::allocate(capacity)?,
            len: 0,
        })
    }

    /// Constructs a vector of `len` default values, with `capacity == len`.
    ///
    /// If `T::default()` panics, the elements built so far are dropped and
    /// the storage is released before the panic propagates.
    ///
    /// ```rust
    /// use raw_buffer_vec::Vector;
    ///
    /// let v: Vector<u8> = Vector::with_len(5).unwrap();
    /// assert_eq!(v.as_slice(), &[0; 5]);
    /// assert_eq!(v.capacity(), 5);
    /// ```
    pub fn with_len(len: usize) -> Result<Self, Error>
    where
        T: Default,
    {
        let mut v = Self::with_capacity(len)?;
        v.resize_with(len, T::default)?;
        Ok(v)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}
