// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Vector`](crate::Vector).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it never yields are
//!   dropped with it.
//! - `&Vector` and `&mut Vector` iterate as slices.

// Crate imports
use crate::{buffer::RawBuffer, vec::Vector};

// Core imports
use core::{fmt, iter::FusedIterator, mem, ptr};

/// Owned iterator returned by `Vector::into_iter()`.
///
/// Takes over the vector's buffer; slots `[front, back)` are the elements
/// not yet yielded.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// The elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` is live and inside the block.
        unsafe { core::slice::from_raw_parts(self.buf.slot(self.front), self.back - self.front) }
    }

    /// Drops the next `n` elements from the front (clamped to what is left).
    fn drop_front(&mut self, n: usize) {
        let start = self.front;
        self.front += n;
        // SAFETY: `[start, start + n)` was live and is no longer reachable.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot_mut(start), n)) }
    }

    /// Drops the last `n` elements (clamped to what is left).
    fn drop_back(&mut self, n: usize) {
        self.back -= n;
        let start = self.back;
        // SAFETY: `[back, back + n)` was live and is no longer reachable.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.slot_mut(start), n)) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was live and is now outside `[front, back)`.
            Some(unsafe { self.buf.read(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        self.drop_front(n.min(rem));
        self.next()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was live and is now outside `[front, back)`.
            Some(unsafe { self.buf.read(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        self.drop_back(n.min(rem));
        self.next_back()
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let rem = self.back - self.front;
        self.drop_front(rem);
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        // Leave `self` empty and unallocated so its `Drop` has nothing to do.
        let back = mem::replace(&mut self.len, 0);
        IntoIter {
            buf: mem::take(&mut self.buf),
            front: 0,
            back,
        }
    }
}
