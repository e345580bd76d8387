// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::alloc::{GlobalAlloc, Layout};

use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};

fn layout() -> Layout {
    Layout::from_size_align(32, 16).expect("Failed to build layout")
}

#[test]
fn test_mock_allocator_behaviour_none() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);

    // SAFETY: non-zero layout; pointer released with the same layout.
    unsafe {
        let ptr = mock.alloc(layout());
        assert!(!ptr.is_null());
        mock.dealloc(ptr, layout());
    }

    assert_eq!(mock.alloc_count(), 1);
    assert_eq!(mock.dealloc_count(), 1);
}

#[test]
fn test_mock_allocator_behaviour_fail_always() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);

    // SAFETY: non-zero layout; null is never released.
    unsafe {
        assert!(mock.alloc(layout()).is_null());
        assert!(mock.alloc_zeroed(layout()).is_null());
    }

    assert_eq!(mock.alloc_count(), 2);
}

#[test]
fn test_mock_allocator_fail_at_nth_first_call() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthAlloc(1));

    // SAFETY: non-zero layout; only the non-null pointer is released.
    unsafe {
        assert!(mock.alloc(layout()).is_null());

        let ptr = mock.alloc_zeroed(layout());
        assert!(!ptr.is_null());
        mock.dealloc(ptr, layout());
    }
}

#[test]
fn test_mock_allocator_change_behaviour_and_reset() {
    let mut mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);

    // SAFETY: non-zero layout.
    unsafe {
        assert!(mock.alloc(layout()).is_null());
    }

    mock.change_behaviour(MockAllocatorBehaviour::None);
    mock.reset_counts();

    // SAFETY: non-zero layout; pointer released with the same layout.
    unsafe {
        let ptr = (&&mock).alloc(layout());
        assert!(!ptr.is_null());
        (&&mock).dealloc(ptr, layout());
    }

    assert_eq!(mock.alloc_count(), 1);
    assert_eq!(mock.dealloc_count(), 1);
}
