// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::Layout;

use crate::error::AllocError;

/// Alignment of every block: the `max_align_t` guarantee of C `malloc` on
/// 64-bit targets.
pub const BLOCK_ALIGN: usize = 16;

/// Computes `nmemb * size`, failing instead of wrapping.
///
/// # Errors
///
/// Returns [`AllocError::Overflow`] if the product does not fit in `usize`.
///
/// # Example
///
/// ```rust
/// use randkit_alloc::{AllocError, checked_size};
///
/// assert_eq!(checked_size(16, 4), Ok(64));
/// assert_eq!(
///     checked_size(usize::MAX, 2),
///     Err(AllocError::Overflow { nmemb: usize::MAX, size: 2 })
/// );
/// ```
#[inline]
pub fn checked_size(nmemb: usize, size: usize) -> Result<usize, AllocError> {
    nmemb
        .checked_mul(size)
        .ok_or(AllocError::Overflow { nmemb, size })
}

/// Layout for `nmemb * size` bytes aligned to [`BLOCK_ALIGN`].
///
/// A product above `isize::MAX` (after rounding to the alignment) is reported
/// as an overflow too: the allocator could never satisfy it.
pub(crate) fn checked_layout(nmemb: usize, size: usize) -> Result<Layout, AllocError> {
    let total = checked_size(nmemb, size)?;

    Layout::from_size_align(total, BLOCK_ALIGN).map_err(|_| AllocError::Overflow { nmemb, size })
}
