// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::{GlobalAlloc, Layout};
use core::cell::Cell;

use crate::allocator::SystemAllocator;

/// Configurable behavior for [`MockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`SystemAllocator`]).
    None,
    /// Every allocation returns null.
    FailAlways,
    /// Fail the Nth allocation (1-indexed: 1 = first call fails).
    FailAtNthAlloc(usize),
}

/// Mock allocator for testing.
///
/// Counts allocations and deallocations and can simulate a null return.
/// `&MockAllocator` is an allocator too, so a test can keep the mock and
/// inspect the counters after the block is dropped.
#[derive(Debug)]
pub struct MockAllocator {
    inner: SystemAllocator,
    behaviour: MockAllocatorBehaviour,
    alloc_count: Cell<usize>,
    dealloc_count: Cell<usize>,
}

impl MockAllocator {
    /// Creates a new mock allocator with the specified behavior.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        Self {
            inner: SystemAllocator,
            behaviour,
            alloc_count: Cell::new(0),
            dealloc_count: Cell::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockAllocatorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of allocation calls, failed ones included.
    pub fn alloc_count(&self) -> usize {
        self.alloc_count.get()
    }

    /// Number of deallocation calls.
    pub fn dealloc_count(&self) -> usize {
        self.dealloc_count.get()
    }

    /// Resets both counters.
    pub fn reset_counts(&self) {
        self.alloc_count.set(0);
        self.dealloc_count.set(0);
    }

    fn should_fail(&self) -> bool {
        let current = self.alloc_count.get() + 1;
        self.alloc_count.set(current);

        match self.behaviour {
            MockAllocatorBehaviour::None => false,
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthAlloc(n) => current == n,
        }
    }
}

unsafe impl GlobalAlloc for MockAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if self.should_fail() {
            return core::ptr::null_mut();
        }

        // SAFETY: forwarded caller contract.
        unsafe { self.inner.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        if self.should_fail() {
            return core::ptr::null_mut();
        }

        // SAFETY: forwarded caller contract.
        unsafe { self.inner.alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.dealloc_count.set(self.dealloc_count.get() + 1);

        // SAFETY: forwarded caller contract.
        unsafe { self.inner.dealloc(ptr, layout) }
    }
}

unsafe impl GlobalAlloc for &MockAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded caller contract.
        unsafe { (**self).alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded caller contract.
        unsafe { (**self).alloc_zeroed(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded caller contract.
        unsafe { (**self).dealloc(ptr, layout) }
    }
}
