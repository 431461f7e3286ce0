// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::Vector;

// Core imports
use core::ptr;

impl<T> Vector<T> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order; rejected
    /// elements are dropped in place. If `f` or a destructor panics, the
    /// elements not yet visited are kept after the survivors.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let len = self.len;
        // Nothing is reachable through `len` while the prefix is compacted.
        self.len = 0;
        let mut state = Compaction {
            vec: self,
            len,
            read: 0,
            kept: 0,
        };

        while state.read < len {
            let cur = state.vec.buf.slot_mut(state.read);
            // SAFETY: `read < len`, so the slot is live and not yet moved.
            if f(unsafe { &*cur }) {
                if state.kept != state.read {
                    // SAFETY: `kept < read`; slot `kept` was vacated earlier.
                    unsafe { ptr::copy_nonoverlapping(cur, state.vec.buf.slot_mut(state.kept), 1) };
                }
                state.kept += 1;
                state.read += 1;
            } else {
                // Advance first so an unwinding destructor does not see it again.
                state.read += 1;
                // SAFETY: the slot is live and is dropped exactly once here.
                unsafe { ptr::drop_in_place(cur) };
            }
        }
    }
}

struct Compaction<'a, T> {
    vec: &'a mut Vector<T>,
    len: usize,
    read: usize,
    kept: usize,
}

impl<T> Drop for Compaction<'_, T> {
    fn drop(&mut self) {
        let rest = self.len - self.read;
        // SAFETY: `[read, len)` is still live (unvisited); it moves down to
        // follow the `kept` survivors at `[0, kept)`.
        unsafe {
            if rest > 0 && self.kept != self.read {
                let src = self.vec.buf.slot(self.read);
                ptr::copy(src, self.vec.buf.slot_mut(self.kept), rest);
            }
        }
        self.vec.len = self.kept + rest;
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{testing::Ledger, Vector};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn test_retain_keeps_order() {
        let mut v: Vector<i32> = [1, 2, 3, 4, 5, 6].into();
        v.retain(|x| x % 2 == 0);
        assert_eq!(v, [2, 4, 6]);
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn test_retain_drops_rejected() {
        let ledger = Ledger::new();
        let mut v = ledger.items(&[1, 2, 3]);
        v.retain(|t| t.value != 2);
        assert_eq!(ledger.values(&v), [1, 3]);
        assert_eq!(ledger.live(), 2);
    }

    #[test]
    fn test_retain_panicking_predicate_keeps_unvisited() {
        let ledger = Ledger::new();
        let mut v = ledger.items(&[1, 2, 3, 4]);
        let r = catch_unwind(AssertUnwindSafe(|| {
            v.retain(|t| {
                assert!(t.value != 3, "boom");
                t.value != 1
            })
        }));
        assert!(r.is_err());
        assert_eq!(ledger.values(&v), [2, 3, 4]);
        assert_eq!(ledger.live(), 3);
    }
}
