// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::{EntropyError, RandomError};

/// A source of uniformly distributed random bytes.
///
/// Every generator in this crate is built on top of this trait, so callers can
/// swap the OS-backed [`SystemEntropySource`](crate::SystemEntropySource) for a
/// seeded [`Xorshift64Source`](crate::Xorshift64Source) or a test double.
pub trait EntropySource {
    /// Fills the destination buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source is unavailable
    /// or fails to generate random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(dest)
    }
}

/// Types that can be drawn uniformly from an [`EntropySource`].
///
/// Integers cover their full representable range. Floats are drawn from the
/// half-open interval `[0.0, 1.0)`. Booleans are fair coin flips.
pub trait Sample: Sized {
    /// Draws one value from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the source's [`EntropyError`].
    fn sample<E: EntropySource + ?Sized>(source: &E) -> Result<Self, EntropyError>;
}

/// Unsigned integer types that support draws below an exclusive bound.
pub trait SampleBelow: Sample + Copy {
    /// Draws a value in `[0, bound)` without modulo bias.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidRange`] if `bound == 0`.
    /// - [`RandomError::Entropy`] if the source fails.
    fn sample_below<E: EntropySource + ?Sized>(source: &E, bound: Self)
    -> Result<Self, RandomError>;
}

/// Integer types that support draws inside an open interval.
pub trait SampleBetween: Sample + Copy {
    /// Draws a value strictly greater than `lower` and strictly less than `upper`.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidRange`] unless `lower < upper - 1`.
    /// - [`RandomError::Entropy`] if the source fails.
    fn sample_between<E: EntropySource + ?Sized>(
        source: &E,
        lower: Self,
        upper: Self,
    ) -> Result<Self, RandomError>;
}
