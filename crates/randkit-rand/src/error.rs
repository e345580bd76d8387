// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors raised by an [`EntropySource`](crate::EntropySource).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// System entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// Errors raised by the bounded and ranged generators.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// The requested bounds describe an empty or inverted set of values.
    ///
    /// Raised for `bound == 0`, for `lower >= upper - 1` on open intervals, and
    /// for inclusive ranges whose end does not fit the target width.
    #[error("InvalidRange")]
    InvalidRange,

    /// A random byte buffer of `len` bytes could not be allocated.
    #[error("random byte buffer of {len} bytes cannot be allocated")]
    BufferTooLarge {
        /// Requested buffer length.
        len: usize,
    },

    /// The underlying entropy source failed.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] EntropyError),
}
