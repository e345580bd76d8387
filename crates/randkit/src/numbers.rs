// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random values drawn from the numeric type itself.

use randkit_rand::{EntropySource, Random, RandomError, Sample, SampleBelow, SampleBetween};

/// Draws uniform values of `Self`.
///
/// Implemented for every [`Sample`] type: all integer widths, `bool`, `f32`
/// and `f64` (floats in `[0.0, 1.0)`).
///
/// # Example
///
/// ```rust
/// use randkit::numbers::RandomNumber;
///
/// let byte = u8::random().unwrap();
/// let unit = f32::random().unwrap();
/// assert!((0.0..1.0).contains(&unit));
/// # let _ = byte;
/// ```
pub trait RandomNumber: Sample {
    /// Draws from the process-wide system source.
    fn random() -> Result<Self, RandomError> {
        randkit_rand::random()
    }

    /// Draws from the given generator.
    fn random_from<E: EntropySource>(random: &Random<E>) -> Result<Self, RandomError> {
        random.random()
    }
}

impl<T: Sample> RandomNumber for T {}

/// Bounded draws for integer types.
///
/// # Example
///
/// ```rust
/// use randkit::numbers::RandomInteger;
///
/// let roll = u8::random_below(6).unwrap();
/// let inner = i16::random_exclusive(-4, 4).unwrap();
///
/// assert!(roll < 6);
/// assert!(-4 < inner && inner < 4);
/// ```
pub trait RandomInteger: SampleBetween {
    /// Value in `[0, bound)` from the system source.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] if `bound == 0`.
    fn random_below(bound: Self) -> Result<Self, RandomError>
    where
        Self: SampleBelow,
    {
        randkit_rand::random_with_bound(bound)
    }

    /// Value strictly between `lower` and `upper` from the system source.
    ///
    /// # Errors
    ///
    /// [`RandomError::InvalidRange`] unless `lower < upper - 1`.
    fn random_exclusive(lower: Self, upper: Self) -> Result<Self, RandomError> {
        randkit_rand::random_between(lower, upper)
    }
}

impl<T: SampleBetween> RandomInteger for T {}
