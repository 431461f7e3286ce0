// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw, uninitialized heap storage for `T` values.
//!
//! [`RawBuffer<T>`] owns memory for exactly `capacity` slots and nothing more.
//! It never constructs or drops a `T`: which slots are live is the business of
//! the owner (normally a [`Vector`](crate::Vector)).

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error};

// Core imports
use core::{alloc::Layout, fmt, marker::PhantomData, mem, ptr::NonNull};

/// An owned, fixed-size block of uninitialized slots for `T`.
///
/// # Invariants
///
/// - `address()` is `None` iff `capacity() == 0`.
/// - When `capacity() > 0` and `T` is not zero-sized, the block was obtained
///   from the global allocator with `Layout::array::<T>(capacity)`.
/// - Zero-sized `T` never touches the allocator; the recorded capacity is the
///   requested one and the pointer is dangling (but well aligned).
/// - Dropping a `RawBuffer` releases the block and runs **no** destructors.
///
/// `RawBuffer` is deliberately not `Clone`: copying bytes that may or may not
/// hold live values has no meaning. Ownership of a block changes hands only
/// through [`exchange`](RawBuffer::exchange).
pub struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuffer<T>` uniquely owns its block, like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for RawBuffer<T> {}
// SAFETY: shared access only hands out `*const T`; see above.
unsafe impl<T: Sync> Sync for RawBuffer<T> {}

impl<T> RawBuffer<T> {
    /// Constructs the empty buffer. Never allocates.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Reserves raw storage for `capacity` slots.
    ///
    /// A capacity of `0` never allocates. On failure nothing is allocated.
    ///
    /// # Errors
    ///
    /// - [`Error::CapacityOverflow`] if `capacity * size_of::<T>()` exceeds
    ///   `isize::MAX`.
    /// - [`Error::AllocFailed`] if the global allocator returns null.
    pub fn allocate(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed { layout })?;
        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Number of `T`-sized slots in this block.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Start of the block, or `None` for the empty buffer.
    #[inline]
    pub fn address(&self) -> Option<NonNull<T>> {
        (self.capacity != 0).then_some(self.ptr)
    }

    /// Start of the block. Dangling (never null) when `capacity() == 0`.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable start of the block. Dangling (never null) when `capacity() == 0`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `index`.
    ///
    /// `index == capacity()` is allowed and yields the one-past-the-end
    /// address. Larger indices are a contract violation; computing the
    /// address is harmless but dereferencing it is undefined behavior.
    #[inline]
    pub fn slot(&self, index: usize) -> *const T {
        debug_assert!(
            index <= self.capacity,
            "slot {index} out of bounds (capacity {})",
            self.capacity
        );
        self.ptr.as_ptr().wrapping_add(index)
    }

    /// Mutable address of slot `index`. Same bounds as [`slot`](Self::slot).
    #[inline]
    pub fn slot_mut(&mut self, index: usize) -> *mut T {
        debug_assert!(
            index <= self.capacity,
            "slot {index} out of bounds (capacity {})",
            self.capacity
        );
        self.ptr.as_ptr().wrapping_add(index)
    }

    /// Places `value` into slot `index` without reading or dropping what was there.
    ///
    /// # Safety
    ///
    /// `index < capacity()`. If the slot held a live value, it is leaked.
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);
        // SAFETY: the caller guarantees `index < capacity`, so the slot lies
        // inside the block and is properly aligned.
        unsafe { self.slot_mut(index).write(value) }
    }

    /// Moves the value out of slot `index`, leaving the slot logically vacant.
    ///
    /// # Safety
    ///
    /// `index < capacity()` and the slot holds a live value that the caller
    /// will not read or drop again.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.capacity);
        // SAFETY: guaranteed by the caller.
        unsafe { self.slot(index).read() }
    }

    /// Swaps the blocks (and capacities) owned by `self` and `other` in O(1).
    ///
    /// No element is copied, moved, constructed or dropped.
    #[inline]
    pub fn exchange(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    fn current_layout(&self) -> Option<Layout> {
        if self.capacity == 0 || mem::size_of::<T>() == 0 {
            return None;
        }
        Layout::array::<T>(self.capacity).ok()
    }
}

impl<T> Default for RawBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        if let Some(layout) = self.current_layout() {
            // SAFETY: by invariant the block was allocated with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
        }
    }
}

impl<T> fmt::Debug for RawBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawBuffer")
            .field("address", &self.address())
            .field("capacity", &self.capacity)
            .finish()
    }
}

/// Turns a storage error into the same outcome `alloc::vec::Vec` produces.
///
/// Used by trait impls whose signatures cannot report failure.
#[cold]
pub(crate) fn handle_error(err: Error) -> ! {
    match err {
        Error::AllocFailed { layout } => handle_alloc_error(layout),
        Error::CapacityOverflow => panic!("capacity overflow"),
    }
}
