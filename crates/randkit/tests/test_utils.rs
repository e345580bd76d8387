// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod test_utils_tests {
    use randkit::alloc::{AllocError, safer_calloc_in};
    use randkit::collections::SliceRandom;
    use randkit::rand::{EntropyError, Random, RandomError};
    use randkit::support::test_utils::alloc::{MockAllocator, MockAllocatorBehaviour};
    use randkit::support::test_utils::rand::{MockEntropySource, MockEntropySourceBehaviour};

    #[test]
    fn test_mock_entropy_source_through_umbrella() {
        let random = Random::new(MockEntropySource::new(MockEntropySourceBehaviour::FailAlways));
        let mut deck = [1, 2, 3, 4];

        assert_eq!(
            deck.shuffle(&random),
            Err(RandomError::Entropy(EntropyError::EntropyNotAvailable))
        );
    }

    #[test]
    fn test_mock_allocator_through_umbrella() {
        let mock = MockAllocator::new(MockAllocatorBehaviour::FailAtNthAlloc(1));

        let first = safer_calloc_in(&mock, 4, 4);
        assert!(matches!(first, Err(AllocError::Failed { size: 16 })));

        {
            let second = safer_calloc_in(&mock, 4, 4).expect("Failed to safer_calloc_in(..)");
            assert_eq!(second.len(), 16);
        }

        assert_eq!(mock.alloc_count(), 2);
        assert_eq!(mock.dealloc_count(), 1);
    }
}
