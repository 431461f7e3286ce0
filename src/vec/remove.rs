// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Drops the element at `index`, shifting later elements left.
    ///
    /// Returns the position of the element that followed the erased one,
    /// which is `index` itself (equal to the new `len()` if the erased element
    /// was last). Never reallocates.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// ```rust
    /// use raw_buffer_vec::Vector;
    ///
    /// let mut v: Vector<i32> = [10, 99, 20, 30].into();
    /// let next = v.erase(1);
    /// assert_eq!(v[next], 20);
    /// assert_eq!(v.as_slice(), &[10, 20, 30]);
    /// ```
    #[inline]
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index < len`, so slot `index` is live. After reading it
        // out, `[index + 1, len)` shifts left by one (overlap handled by
        // `ptr::copy`) and slot `len - 1` is no longer counted.
        unsafe {
            let at = self.buf.slot_mut(index);
            let out = at.read();
            ptr::copy(at.add(1), at, len - index - 1);
            self.len = len - 1;
            out
        }
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place. O(1), does not preserve order.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn swap_remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "swap_remove index (is {index}) should be < len (is {len})"
        );
        // SAFETY: `index < len` and `len - 1 < len` are both live slots.
        // Reading `index` out and then moving `len - 1` over it leaves
        // `[0, len - 1)` live. When `index == len - 1` the copy is a self-copy.
        unsafe {
            let out = self.buf.read(index);
            let last = self.buf.slot(len - 1);
            ptr::copy(last, self.buf.slot_mut(index), 1);
            self.len = len - 1;
            out
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{testing::Ledger, Vector};

    #[test]
    fn test_erase_returns_following_position() {
        let mut v: Vector<i32> = [1, 2, 3].into();
        assert_eq!(v.erase(2), 2);
        assert_eq!(v.len(), 2);
        assert_eq!(v.erase(0), 0);
        assert_eq!(v, [2]);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_erase_drops_exactly_one() {
        let ledger = Ledger::new();
        let mut v = ledger.items(&[1, 2, 3, 4]);
        v.erase(1);
        assert_eq!(ledger.live(), 3);
        assert_eq!(ledger.values(&v), [1, 3, 4]);
    }

    #[test]
    fn test_remove_hands_back_element() {
        let mut v: Vector<alloc::string::String> = Vector::new();
        v.push("a".into()).unwrap();
        v.push("b".into()).unwrap();
        assert_eq!(v.remove(0), "a");
        assert_eq!(v.as_slice(), &["b"]);
    }

    #[test]
    fn test_swap_remove_moves_last_into_hole() {
        let mut v: Vector<i32> = [1, 2, 3, 4].into();
        assert_eq!(v.swap_remove(1), 2);
        assert_eq!(v, [1, 4, 3]);
        assert_eq!(v.swap_remove(2), 3);
        assert_eq!(v, [1, 4]);
    }

    #[test]
    #[should_panic(expected = "removal index")]
    fn test_erase_on_empty_panics() {
        let mut v: Vector<i32> = Vector::new();
        v.erase(0);
    }

    #[test]
    #[should_panic(expected = "swap_remove index")]
    fn test_swap_remove_out_of_bounds_panics() {
        let mut v: Vector<i32> = [1].into();
        v.swap_remove(1);
    }
}
