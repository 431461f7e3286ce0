// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `raw-buffer-vec`
//!
//! A `no_std` (with `alloc`), heap-backed, growable vector that keeps
//! **storage** and **object lifetime** apart.
//!
//! Two types cooperate:
//!
//! - [`RawBuffer<T>`] owns raw, uninitialized memory for exactly `capacity`
//!   slots. It never constructs or drops a `T`.
//! - [`Vector<T>`] owns one `RawBuffer<T>` and a length `len`. Slots
//!   `[0, len)` hold live elements; the rest are vacant.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You want storage failures reported as values ([`Error`]) instead of
//!   aborting the process.
//! - You need the strong guarantee on growth: if an allocation fails or an
//!   element constructor panics, the vector is exactly as it was.
//! - Your elements are move-only, or their `Clone` is expensive or may panic.
//!
//! ## Guarantees
//!
//! - Single-element growth (`push`, `emplace_back`, `insert`, `emplace`) uses
//!   `max(1, 2 * capacity)`, so appends are amortized O(1).
//! - Growth builds a new buffer, places the new element in its final slot,
//!   moves the old elements around it, and only then swaps buffers.
//! - Moving elements between buffers never clones: Rust moves cannot fail.
//! - [`Vector::try_clone_from`] copies into a temporary and swaps it in when
//!   existing capacity is too small (copy-and-swap); otherwise it reuses the
//!   buffer.
//! - [`Vector::assign_from`] and [`Vector::exchange`] transfer storage in
//!   O(1), never allocating.
//!
//! ## Range and indexing behavior
//!
//! Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//! inverted ranges, exactly like built-in slices. The same is true of the
//! positional mutators (`insert`, `erase`, `remove`, `swap_remove`,
//! `split_off`). Only storage acquisition returns [`Error`].
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `Vector<T>`.
//!
//! ## Example
//!
//! ```rust
//! use raw_buffer_vec::Vector;
//!
//! let mut v: Vector<u8> = Vector::new();
//! v.push(1).unwrap();
//! v.extend_from_slice(&[2, 3]).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(v.capacity(), 3);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod buffer;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod testing;
mod vec;

// Public exports (crate API surface)
pub use buffer::RawBuffer;
pub use error::Error;
pub use iter::IntoIter;
pub use vec::Vector;
