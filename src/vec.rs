// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Vector` type and its inherent API.
//!
//! `Vector<T>` is a growable, heap-backed sequence built on one
//! [`RawBuffer<T>`](crate::RawBuffer). The buffer provides uninitialized slots;
//! the vector decides which of them hold live values. Methods generally mirror
//! slice/`Vec` semantics, with storage acquisition reported through
//! [`Error`](crate::Error) instead of aborting.

mod clone;
mod extend;
mod from;
mod insert;
mod new;
mod push;
mod remove;
mod reserve;
mod retain;
mod slice;
mod split_off;

// Crate imports
use crate::{buffer::RawBuffer, error::Error};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, contiguous sequence with explicit control over storage.
///
/// `Vector<T>` owns a [`RawBuffer<T>`] of some capacity and a length
/// `len ∈ 0..=capacity`. Slots `[0, len)` hold live values in insertion order;
/// slots `[len, capacity)` are uninitialized.
///
/// # Growth
///
/// Operations that add a single element at capacity (`push`, `emplace_back`,
/// `insert`, `emplace`) grow to `max(1, 2 * capacity)`. [`reserve`] and
/// [`resize`] grow to exactly the requested amount. Growth always builds a new
/// buffer, places the new element (if any) in its final slot first, moves the
/// live elements around it, and only then exchanges the buffers. Capacity is
/// never reduced implicitly.
///
/// # Failure model
///
/// - Storage acquisition failures return [`Error`] and leave the vector
///   exactly as it was.
/// - A panic inside an element's `Clone`, `Default` or a constructor closure
///   passed to [`emplace_back`] / [`emplace`] leaves the vector unchanged on
///   every growth path and on in-place insertion. No value is ever dropped
///   twice or leaked by an unwind.
/// - Out-of-bounds indices passed to `insert`, `erase`, `remove`,
///   `swap_remove` or indexing are contract violations and panic.
///
/// Moving elements between buffers is a bitwise copy in Rust and cannot fail,
/// so relocation never needs `T: Clone`. Move-only types are fully supported;
/// only the operations that must leave a source intact (`Clone`,
/// `extend_from_slice`, `TryFrom<&[T]>`) require `T: Clone`.
///
/// # Cursors
///
/// Positions are plain indices. Every mutating method takes `&mut self`, so
/// the borrow checker already rejects slices or references that a
/// reallocation or a shift could invalidate.
///
/// # Examples
///
/// ```rust
/// use raw_buffer_vec::Vector;
///
/// let mut v: Vector<i32> = Vector::new();
/// v.push(10).unwrap();
/// v.push(30).unwrap();
/// v.insert(1, 20).unwrap();
/// assert_eq!(v.as_slice(), &[10, 20, 30]);
/// assert_eq!(v.erase(0), 0);
/// assert_eq!(v.as_slice(), &[20, 30]);
/// ```
///
/// A vector of a type without `Clone` cannot be cloned:
///
/// ```compile_fail
/// use raw_buffer_vec::Vector;
///
/// struct NoClone;
/// let v: Vector<NoClone> = Vector::new();
/// let _copy: Vector<NoClone> = v.clone();
/// ```
///
/// [`reserve`]: Vector::reserve
/// [`resize`]: Vector::resize
/// [`emplace_back`]: Vector::emplace_back
/// [`emplace`]: Vector::emplace
pub struct Vector<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Returns the number of slots in the owned buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `capacity - len`, the number of elements that fit without growing.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns `true` if the vector contains `x` (linear search).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Swaps storage and length with `other` in O(1).
    ///
    /// No element is cloned, moved or dropped.
    #[inline]
    pub fn exchange(&mut self, other: &mut Self) {
        self.buf.exchange(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Move-assigns `source` into `self`.
    ///
    /// Drops the current elements of `self`, then exchanges storage with
    /// `source`. Afterwards `self` holds exactly what `source` held, and
    /// `source` is empty but owns the (now empty) buffer `self` used to have,
    /// so `source.capacity()` reports the old capacity of `self`.
    ///
    /// ```rust
    /// use raw_buffer_vec::Vector;
    ///
    /// let mut target: Vector<u8> = Vector::with_capacity(8).unwrap();
    /// let mut source: Vector<u8> = [1, 2].into();
    /// target.assign_from(&mut source);
    /// assert_eq!(target.as_slice(), &[1, 2]);
    /// assert!(source.is_empty());
    /// assert_eq!(source.capacity(), 8);
    /// ```
    pub fn assign_from(&mut self, source: &mut Self) {
        self.clear();
        self.exchange(source);
    }

    /// Capacity used by single-element growth: `max(1, 2 * current)`.
    #[inline]
    pub(crate) fn grown_capacity(&self) -> Result<usize, Error> {
        next_capacity(self.capacity())
    }

    /// Moves every live element into `new_buf` (same indices) and adopts it.
    ///
    /// The previous block is released without running destructors: its
    /// elements now live in the new block.
    ///
    /// `new_buf.capacity()` must be at least `len`.
    pub(crate) fn relocate(&mut self, mut new_buf: RawBuffer<T>) {
        debug_assert!(new_buf.capacity() >= self.len);
        // SAFETY: `[0, len)` is live in the old block, the new block has room
        // for `len` slots, and the two blocks are distinct allocations.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.slot(0), new_buf.slot_mut(0), self.len);
        }
        self.buf.exchange(&mut new_buf);
    }
}

/// `max(1, 2 * capacity)`, or [`Error::CapacityOverflow`] if that overflows.
#[inline]
pub(crate) fn next_capacity(capacity: usize) -> Result<usize, Error> {
    if capacity == 0 {
        return Ok(1);
    }
    capacity.checked_mul(2).ok_or(Error::CapacityOverflow)
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` holds live values owned by `self`. The block
        // itself is released afterwards by `RawBuffer`'s own `Drop`.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: PartialEq> PartialEq<[T]> for Vector<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, const M: usize> PartialEq<[T; M]> for Vector<T> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}
impl<T: Eq> Eq for Vector<T> {}
impl<T: Ord> Ord for Vector<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for Vector<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
