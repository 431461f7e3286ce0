// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instrumented element types for unit tests.
//!
//! [`Ledger`] counts every [`Tracked`] value it hands out and every drop, so a
//! test can assert that each constructed value is destroyed exactly once. It
//! can also make `Clone` or `Default` panic after a budget, to drive the
//! unwinding paths.

// Imports
use crate::Vector;
use alloc::{rc::Rc, vec::Vec};
use core::cell::{Cell, RefCell};

#[derive(Default)]
struct Counters {
    created: Cell<usize>,
    dropped: Cell<usize>,
    clones: Cell<usize>,
    clone_budget: Cell<Option<usize>>,
    default_budget: Cell<Option<usize>>,
}

/// Shared bookkeeping for a family of [`Tracked`] values.
#[derive(Clone, Default)]
pub(crate) struct Ledger(Rc<Counters>);

std::thread_local! {
    static DEFAULT_LEDGER: RefCell<Option<Ledger>> = const { RefCell::new(None) };
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn item(&self, value: i32) -> Tracked {
        self.0.created.set(self.0.created.get() + 1);
        Tracked {
            value,
            ledger: self.clone(),
        }
    }

    /// A vector holding one tracked item per value, with `capacity == len`.
    pub(crate) fn items(&self, values: &[i32]) -> Vector<Tracked> {
        let mut v = Vector::with_capacity(values.len()).unwrap();
        for &x in values {
            v.push(self.item(x)).unwrap();
        }
        v
    }

    pub(crate) fn values(&self, items: &[Tracked]) -> Vec<i32> {
        items.iter().map(|t| t.value).collect()
    }

    /// Values created and not yet dropped.
    pub(crate) fn live(&self) -> usize {
        self.0.created.get() - self.0.dropped.get()
    }

    /// Successful clones so far.
    pub(crate) fn clones(&self) -> usize {
        self.0.clones.get()
    }

    /// Allow `n` more clones, then panic on the next one.
    pub(crate) fn fail_clone_after(&self, n: usize) {
        self.0.clone_budget.set(Some(n));
    }

    /// Allow `n` more `Tracked::default()` calls, then panic on the next one.
    pub(crate) fn fail_default_after(&self, n: usize) {
        self.0.default_budget.set(Some(n));
    }

    /// Runs `f` with `self` as the ledger used by `Tracked::default()`.
    pub(crate) fn with_defaults<R>(&self, f: impl FnOnce() -> R) -> R {
        struct Reset;
        impl Drop for Reset {
            fn drop(&mut self) {
                DEFAULT_LEDGER.with(|l| l.borrow_mut().take());
            }
        }

        DEFAULT_LEDGER.with(|l| *l.borrow_mut() = Some(self.clone()));
        let _reset = Reset;
        f()
    }
}

fn spend(budget: &Cell<Option<usize>>, what: &str) {
    match budget.get() {
        Some(0) => panic!("{what} budget exhausted"),
        Some(n) => budget.set(Some(n - 1)),
        None => {}
    }
}

/// An `i32` whose construction, clones and drops are recorded in a [`Ledger`].
pub(crate) struct Tracked {
    pub(crate) value: i32,
    ledger: Ledger,
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        spend(&self.ledger.0.clone_budget, "clone");
        self.ledger.0.clones.set(self.ledger.0.clones.get() + 1);
        self.ledger.item(self.value)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        let ledger = DEFAULT_LEDGER
            .with(|l| l.borrow().clone())
            .expect("Tracked::default() outside Ledger::with_defaults");
        spend(&ledger.0.default_budget, "default");
        ledger.item(0)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.ledger.0.dropped.set(self.ledger.0.dropped.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl core::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Tracked").field(&self.value).finish()
    }
}

/// A zero-sized element whose drops are counted per thread.
pub(crate) struct Marker;

std::thread_local! {
    static MARKER_DROPS: Cell<usize> = const { Cell::new(0) };
}

impl Marker {
    /// `Marker` values dropped on this thread so far.
    pub(crate) fn drops() -> usize {
        MARKER_DROPS.with(Cell::get)
    }
}

impl Drop for Marker {
    fn drop(&mut self) {
        MARKER_DROPS.with(|d| d.set(d.get() + 1));
    }
}

/// A vector of a zero-sized type with `len == capacity`, for driving the
/// growth policy past `usize::MAX` without allocating.
///
/// Its length is forced; the values were never constructed, so their
/// destructors are skipped when it is dropped.
pub(crate) fn full_of_zsts<T>(capacity: usize) -> core::mem::ManuallyDrop<Vector<T>> {
    assert_eq!(core::mem::size_of::<T>(), 0);
    let mut v = Vector::with_capacity(capacity).unwrap();
    v.len = capacity;
    core::mem::ManuallyDrop::new(v)
}

/// An element type that can be moved but never cloned.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct MoveOnly(pub(crate) i32);

mod tests {
    // Imports
    use super::Ledger;

    #[test]
    fn test_ledger_counts_lifetimes() {
        let ledger = Ledger::new();
        let a = ledger.item(1);
        let b = a.clone();
        assert_eq!(ledger.live(), 2);
        assert_eq!(ledger.clones(), 1);
        drop(a);
        drop(b);
        assert_eq!(ledger.live(), 0);
    }

    #[test]
    #[should_panic(expected = "clone budget exhausted")]
    fn test_clone_budget_panics() {
        let ledger = Ledger::new();
        let a = ledger.item(1);
        ledger.fail_clone_after(1);
        let _b = a.clone();
        let _c = a.clone();
    }
}
