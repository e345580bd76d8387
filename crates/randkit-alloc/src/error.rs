// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for randkit-alloc.

use thiserror::Error;

/// Error type for checked allocation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// `nmemb * size` does not fit in `usize`, or exceeds the largest size the
    /// platform can describe as a layout (`isize::MAX` after alignment).
    ///
    /// Nothing was allocated.
    #[error("allocation of {nmemb} * {size} bytes overflows the maximum allocation size")]
    Overflow {
        /// Requested number of members.
        nmemb: usize,
        /// Requested size of each member.
        size: usize,
    },

    /// The underlying allocator returned null.
    #[error("allocation of {size} bytes failed")]
    Failed {
        /// Total number of bytes requested.
        size: usize,
    },

    /// Source data does not match the block length.
    #[error("length mismatch: block holds {expected} bytes, source has {actual}")]
    LengthMismatch {
        /// Block length.
        expected: usize,
        /// Source length.
        actual: usize,
    },
}
