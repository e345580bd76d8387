// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::{GlobalAlloc, Layout};

/// Forwards to the registered global allocator.
///
/// Default allocator for every block in this crate. Any other
/// [`GlobalAlloc`] can be injected through
/// [`safer_malloc_in`](crate::safer_malloc_in) /
/// [`safer_calloc_in`](crate::safer_calloc_in).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemAllocator;

unsafe impl GlobalAlloc for SystemAllocator {
    #[inline]
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded caller contract (non-zero layout size).
        unsafe { alloc::alloc::alloc(layout) }
    }

    #[inline]
    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded caller contract (non-zero layout size).
        unsafe { alloc::alloc::alloc_zeroed(layout) }
    }

    #[inline]
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded caller contract (ptr came from this allocator with layout).
        unsafe { alloc::alloc::dealloc(ptr, layout) }
    }
}
