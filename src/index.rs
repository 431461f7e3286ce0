// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Vector`](crate::Vector).
//!
//! `Index` and `IndexMut` forward to the live prefix `[0..len)` and therefore
//! mirror slice behavior:
//! - panics on out-of-bounds, including indices in `[len, capacity)`;
//! - supports every standard range form through [`SliceIndex`].

// Crate imports
use crate::vec::Vector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for Vector<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}
