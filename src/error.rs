// This file is part of raw-buffer-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Vector`](crate::Vector) and [`RawBuffer`](crate::RawBuffer).
//!
//! Only storage acquisition can fail recoverably. Everything else is either
//! infallible or a contract violation (which panics).

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by operations that need to acquire storage.
///
/// Whenever one of these is returned, the container that triggered the
/// request is left exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The requested capacity does not fit in `isize::MAX` bytes, or the
    /// growth computation overflowed `usize`.
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// The layout that was passed to the allocator.
        layout: Layout,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { layout } => write!(
                f,
                "memory allocation of {} bytes (align {}) failed",
                layout.size(),
                layout.align()
            ),
        }
    }
}

impl CoreError for Error {}
