// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    buffer::{handle_error, RawBuffer},
    error::Error,
    vec::Vector,
};

// Core imports
use core::{mem, ptr};

impl<T> Extend<T> for Vector<T> {
    /// Appends every item, growing as `push` does.
    ///
    /// Aborts through `handle_alloc_error` (or panics on capacity overflow)
    /// if storage cannot be obtained; use [`Vector::try_extend_from_iter`] to
    /// observe the error instead.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if let Err(e) = self.try_extend_from_iter(iter) {
            handle_error(e)
        }
    }
}

impl<T> Vector<T> {
    /// Appends every item of `iter`, reporting storage failures.
    ///
    /// The iterator's lower size bound is reserved up front. Items appended
    /// before an error stay in the vector; the item that could not be placed
    /// is dropped, and the rest of the iterator is left unconsumed.
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve_additional(lower)?;
        for item in iter {
            self.push(item)?;
        }
        Ok(())
    }

    /// Tries to construct from an iterator, stopping at the first storage error.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        v.try_extend_from_iter(iter)?;
        Ok(v)
    }

    /// Appends clones of every element of `src`.
    ///
    /// All-or-nothing: on `Err`, or if a `clone` panics, the vector is exactly
    /// as it was, storage included. When `src` does not fit, the clones are
    /// written into a fresh buffer first and the existing elements are moved
    /// over only once every clone succeeded.
    ///
    /// ```rust
    /// use raw_buffer_vec::Vector;
    ///
    /// let mut v: Vector<u8> = Vector::new();
    /// v.extend_from_slice(&[1, 2]).unwrap();
    /// v.extend_from_slice(&[3]).unwrap();
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let len = self.len;
        let required = len.checked_add(src.len()).ok_or(Error::CapacityOverflow)?;
        if required <= self.capacity() {
            // SAFETY: `[len, required)` is inside the block and vacant.
            unsafe { clone_into(&mut self.buf, len, src) };
            self.len = required;
            return Ok(());
        }

        let target = self.grown_capacity().map_or(required, |c| c.max(required));
        let mut new_buf = RawBuffer::allocate(target)?;
        // If a `clone` panics, the written clones are dropped, `new_buf` is
        // freed and `self` was never touched.
        // SAFETY: `required <= target`, and the new block is all vacant.
        unsafe { clone_into(&mut new_buf, len, src) };
        self.relocate(new_buf);
        self.len = required;
        Ok(())
    }

    /// Makes room for `additional` more elements, growing to at least the
    /// doubled capacity so repeated calls stay amortized O(1).
    pub(crate) fn reserve_additional(&mut self, additional: usize) -> Result<(), Error> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        if required <= self.capacity() {
            return Ok(());
        }
        let target = self.grown_capacity().map_or(required, |c| c.max(required));
        self.reserve(target)
    }
}

/// Writes clones of `src` into slots `[start, start + src.len())` of `buf`.
///
/// # Safety
///
/// Those slots must exist and be vacant.
unsafe fn clone_into<T: Clone>(buf: &mut RawBuffer<T>, start: usize, src: &[T]) {
    let mut tail = PendingTail {
        buf,
        start,
        written: 0,
    };
    for item in src {
        let value = item.clone();
        let at = tail.start + tail.written;
        // SAFETY: `at < start + src.len()`, which the caller guarantees is
        // in bounds and vacant.
        unsafe { tail.buf.write(at, value) };
        tail.written += 1;
    }
    tail.commit();
}

/// Clones written into `buf` from slot `start` on, not yet owned by anyone.
///
/// Dropped without `commit` (an unwinding `clone`), it destroys them so no
/// value leaks.
struct PendingTail<'a, T> {
    buf: &'a mut RawBuffer<T>,
    start: usize,
    written: usize,
}

impl<T> PendingTail<'_, T> {
    fn commit(self) {
        mem::forget(self);
    }
}

impl<T> Drop for PendingTail<'_, T> {
    fn drop(&mut self) {
        // SAFETY: `[start, start + written)` was initialized by `clone_into`
        // and nothing else owns it.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.slot_mut(self.start), self.written);
            ptr::drop_in_place(tail);
        }
    }
}
