// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::traits::EntropySource;

#[test]
fn test_mock_entropy_source_behaviour_none() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_ok());
}

#[test]
fn test_mock_entropy_source_behaviour_fail_always() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buf = [0u8; 32];

    let result = mock.fill_bytes(&mut buf);

    assert!(result.is_err());
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
}

#[test]
fn test_mock_entropy_source_behaviour_fail_at_nth_third_call() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::FailAtNthFillBytes(3));
    let mut buf = [0u8; 32];

    // First two calls succeed
    assert!(mock.fill_bytes(&mut buf).is_ok());
    assert!(mock.fill_bytes(&mut buf).is_ok());

    // Third call fails
    let result = mock.fill_bytes(&mut buf);
    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));

    // Fourth call succeeds
    assert!(mock.fill_bytes(&mut buf).is_ok());
}

#[test]
fn test_mock_entropy_source_replay_wraps_across_calls() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::Replay(&[1, 2, 3]));

    let mut first = [0u8; 2];
    let mut second = [0u8; 4];
    mock.fill_bytes(&mut first).expect("Failed to fill_bytes(..) (#0)");
    mock.fill_bytes(&mut second).expect("Failed to fill_bytes(..) (#1)");

    assert_eq!(first, [1, 2]);
    assert_eq!(second, [3, 1, 2, 3]);
}

#[test]
fn test_mock_entropy_source_replay_empty_script_fills_zeros() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::Replay(&[]));
    let mut buf = [0xFFu8; 8];

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..)");

    assert_eq!(buf, [0u8; 8]);
}

#[test]
fn test_mock_entropy_source_call_count() {
    let mock = MockEntropySource::new(MockEntropySourceBehaviour::None);
    let mut buf = [0u8; 32];

    assert_eq!(mock.call_count(), 0);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#0)");
    assert_eq!(mock.call_count(), 1);

    mock.fill_bytes(&mut buf).expect("Failed to fill_bytes(..) (#1)");
    assert_eq!(mock.call_count(), 2);

    mock.reset_count();
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_mock_entropy_source_change_behaviour() {
    let mut mock = MockEntropySource::new(MockEntropySourceBehaviour::Replay(&[9, 8]));
    let mut bytes = [0u8; 1];

    mock.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..) (#0)");
    assert_eq!(bytes, [9]);

    mock.change_behaviour(MockEntropySourceBehaviour::FailAlways);
    assert!(mock.fill_bytes(&mut bytes).is_err());

    // Replay restarts from the first byte
    mock.change_behaviour(MockEntropySourceBehaviour::Replay(&[9, 8]));
    mock.fill_bytes(&mut bytes).expect("Failed to fill_bytes(..) (#1)");
    assert_eq!(bytes, [9]);
}
