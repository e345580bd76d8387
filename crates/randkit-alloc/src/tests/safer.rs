// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::error::AllocError;
use crate::safer::{safer_calloc, safer_calloc_in, safer_free, safer_malloc, safer_malloc_in};
use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};

#[test]
fn test_safer_calloc_zeroes_product() {
    let block = safer_calloc(16, 4).expect("Failed to safer_calloc(..)");

    assert_eq!(block.len(), 64);
    assert!(block.iter().all(|b| *b == 0));
}

#[test]
fn test_safer_malloc_overflow_never_under_allocates() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);

    let result = safer_malloc_in(&mock, usize::MAX, 2);

    assert!(matches!(
        result,
        Err(AllocError::Overflow {
            nmemb: usize::MAX,
            size: 2
        })
    ));
    assert_eq!(mock.alloc_count(), 0);
}

#[test]
fn test_safer_calloc_overflow() {
    let result = safer_calloc(usize::MAX / 3, 4);

    assert!(matches!(result, Err(AllocError::Overflow { .. })));
}

#[test]
fn test_allocator_failure_propagates() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAlways);

    let malloc = safer_malloc_in(&mock, 10, 10);
    let calloc = safer_calloc_in(&mock, 10, 10);

    assert!(matches!(malloc, Err(AllocError::Failed { size: 100 })));
    assert!(matches!(calloc, Err(AllocError::Failed { size: 100 })));
    assert_eq!(mock.alloc_count(), 2);
    assert_eq!(mock.dealloc_count(), 0);
}

#[test]
fn test_allocator_failure_at_nth_call() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthAlloc(2));

    let first = safer_calloc_in(&mock, 1, 8);
    let second = safer_calloc_in(&mock, 1, 8);
    let third = safer_calloc_in(&mock, 1, 8);

    assert!(first.is_ok());
    assert!(matches!(second, Err(AllocError::Failed { size: 8 })));
    assert!(third.is_ok());
}

#[test]
fn test_safer_free_clears_slot() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut slot = Some(safer_calloc_in(&mock, 4, 4).expect("Failed to safer_calloc_in(..)"));

    safer_free(&mut slot);

    assert!(slot.is_none());
    assert_eq!(mock.dealloc_count(), 1);
}

#[test]
fn test_safer_free_twice_is_noop() {
    let mock = MockAllocator::new(MockAllocatorBehaviour::None);
    let mut slot = Some(safer_malloc_in(&mock, 4, 4).expect("Failed to safer_malloc_in(..)"));

    safer_free(&mut slot);
    safer_free(&mut slot);

    assert!(slot.is_none());
    assert_eq!(mock.dealloc_count(), 1);
}

#[test]
fn test_safer_free_empty_slot() {
    let mut slot: Option<crate::SaferBlock> = None;

    safer_free(&mut slot);

    assert!(slot.is_none());
}

proptest! {
    #[test]
    fn proptest_safer_calloc_len_is_product(nmemb in 0usize..64, size in 0usize..64) {
        let block = safer_calloc(nmemb, size).expect("Failed to safer_calloc(..)");

        prop_assert_eq!(block.len(), nmemb * size);
        prop_assert!(block.iter().all(|b| *b == 0));
    }

    #[test]
    fn proptest_safer_malloc_fill_len_is_product(nmemb in 0usize..64, size in 0usize..64, byte in any::<u8>()) {
        let block = safer_malloc(nmemb, size).expect("Failed to safer_malloc(..)").fill(byte);

        prop_assert_eq!(block.len(), nmemb * size);
        prop_assert!(block.iter().all(|b| *b == byte));
    }
}
