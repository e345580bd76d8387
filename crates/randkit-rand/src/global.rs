// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Free functions over the process-wide OS source.

use alloc::vec::Vec;

use crate::error::RandomError;
use crate::generator::Random;
use crate::system::SystemEntropySource;
use crate::traits::{Sample, SampleBelow, SampleBetween};

/// Process-wide generator. Zero-sized, so sharing it needs no initialization.
pub(crate) const SYSTEM: Random<SystemEntropySource> = Random::system();

/// Draws a value of any [`Sample`] type from the OS source.
///
/// ```rust
/// let coin: bool = randkit_rand::random().expect("Failed to flip coin");
/// let ratio: f64 = randkit_rand::random().expect("Failed to draw ratio");
///
/// assert!((0.0..1.0).contains(&ratio));
/// # let _ = coin;
/// ```
pub fn random<T: Sample>() -> Result<T, RandomError> {
    SYSTEM.random()
}

/// Draws an unsigned value in `[0, bound)` from the OS source.
pub fn random_with_bound<T: SampleBelow>(bound: T) -> Result<T, RandomError> {
    SYSTEM.random_with_bound(bound)
}

/// Draws a value strictly between `lower` and `upper` from the OS source.
pub fn random_between<T: SampleBetween>(lower: T, upper: T) -> Result<T, RandomError> {
    SYSTEM.random_between(lower, upper)
}

/// Draws a `usize` in `[start, start + length]` from the OS source.
pub fn random_usize_in_range(start: usize, length: usize) -> Result<usize, RandomError> {
    SYSTEM.random_usize_in_range(start, length)
}

/// Returns `len` random bytes from the OS source.
///
/// An unallocatable `len` is [`RandomError::BufferTooLarge`].
pub fn random_bytes(len: usize) -> Result<Vec<u8>, RandomError> {
    SYSTEM.random_bytes(len)
}

/// Fills `dest` with random bytes from the OS source.
pub fn fill_with_random_bytes(dest: &mut [u8]) -> Result<(), RandomError> {
    SYSTEM.fill_bytes(dest)
}
