// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::GlobalAlloc;

use crate::allocator::SystemAllocator;
use crate::block::{SaferBlock, UninitBlock};
use crate::error::AllocError;

/// Allocates `nmemb * size` uninitialized bytes.
///
/// The product is checked before anything is allocated. A zero-byte request
/// succeeds with an empty block that owns no memory.
///
/// # Errors
///
/// - [`AllocError::Overflow`] if `nmemb * size` overflows.
/// - [`AllocError::Failed`] if the system allocator returns null.
///
/// # Example
///
/// ```rust
/// use randkit_alloc::safer_malloc;
///
/// let block = safer_malloc(8, 4)?.fill(0xAB);
/// assert_eq!(block.len(), 32);
/// assert!(block.iter().all(|b| *b == 0xAB));
/// # Ok::<(), randkit_alloc::AllocError>(())
/// ```
pub fn safer_malloc(nmemb: usize, size: usize) -> Result<UninitBlock, AllocError> {
    safer_malloc_in(SystemAllocator, nmemb, size)
}

/// Allocates `nmemb * size` zeroed bytes.
///
/// # Errors
///
/// Same as [`safer_malloc`].
///
/// # Example
///
/// ```rust
/// use randkit_alloc::safer_calloc;
///
/// let block = safer_calloc(16, 4)?;
/// assert_eq!(block.len(), 64);
/// assert!(block.iter().all(|b| *b == 0));
/// # Ok::<(), randkit_alloc::AllocError>(())
/// ```
pub fn safer_calloc(nmemb: usize, size: usize) -> Result<SaferBlock, AllocError> {
    safer_calloc_in(SystemAllocator, nmemb, size)
}

/// [`safer_malloc`] with an explicit allocator.
pub fn safer_malloc_in<A: GlobalAlloc>(
    allocator: A,
    nmemb: usize,
    size: usize,
) -> Result<UninitBlock<A>, AllocError> {
    UninitBlock::allocate(allocator, nmemb, size)
}

/// [`safer_calloc`] with an explicit allocator.
pub fn safer_calloc_in<A: GlobalAlloc>(
    allocator: A,
    nmemb: usize,
    size: usize,
) -> Result<SaferBlock<A>, AllocError> {
    SaferBlock::allocate_zeroed(allocator, nmemb, size)
}

/// Releases whatever `slot` holds and leaves it `None`.
///
/// Calling it again on the same slot is a no-op, so a block can never be
/// released twice through it.
///
/// # Example
///
/// ```rust
/// use randkit_alloc::{safer_calloc, safer_free};
///
/// let mut slot = Some(safer_calloc(4, 4)?);
/// safer_free(&mut slot);
/// assert!(slot.is_none());
///
/// safer_free(&mut slot);
/// assert!(slot.is_none());
/// # Ok::<(), randkit_alloc::AllocError>(())
/// ```
#[inline]
pub fn safer_free<T>(slot: &mut Option<T>) {
    drop(slot.take());
}
