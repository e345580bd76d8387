// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform sampling of scalars and bounded integer draws.
//!
//! # Bounded draws
//!
//! Reducing a raw `n`-bit draw modulo `bound` over-represents the residues
//! below `2^n mod bound`. Draws below that threshold are rejected, which leaves
//! exactly `2^n - (2^n mod bound)` accepted values, a multiple of `bound`.
//! The expected number of draws is below 2 for every bound.
//!
//! # Open intervals
//!
//! `lower < v < upper` is mapped onto `[0, upper - lower - 1)` in the unsigned
//! counterpart of the width, so signed and unsigned intervals share the same
//! rejection sampler and never overflow.

use core::mem::size_of;

use crate::error::{EntropyError, RandomError};
use crate::traits::{EntropySource, Sample, SampleBelow, SampleBetween};

macro_rules! impl_sample_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sample for $ty {
                #[inline]
                fn sample<E: EntropySource + ?Sized>(source: &E) -> Result<Self, EntropyError> {
                    let mut bytes = [0u8; size_of::<$ty>()];
                    source.fill_bytes(&mut bytes)?;

                    Ok(<$ty>::from_le_bytes(bytes))
                }
            }
        )*
    };
}

impl_sample_int!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

macro_rules! impl_sample_below {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SampleBelow for $ty {
                fn sample_below<E: EntropySource + ?Sized>(
                    source: &E,
                    bound: Self,
                ) -> Result<Self, RandomError> {
                    if bound == 0 {
                        return Err(RandomError::InvalidRange);
                    }

                    // 2^n mod bound
                    let threshold = bound.wrapping_neg() % bound;

                    loop {
                        let r = <$ty>::sample(source)?;

                        if r >= threshold {
                            return Ok(r % bound);
                        }
                    }
                }
            }
        )*
    };
}

impl_sample_below!(u8, u16, u32, u64, u128, usize);

macro_rules! impl_sample_between {
    ($($ty:ty => $unsigned:ty),* $(,)?) => {
        $(
            impl SampleBetween for $ty {
                fn sample_between<E: EntropySource + ?Sized>(
                    source: &E,
                    lower: Self,
                    upper: Self,
                ) -> Result<Self, RandomError> {
                    if lower >= upper {
                        return Err(RandomError::InvalidRange);
                    }

                    // Fits the unsigned width because lower < upper.
                    let gap = (upper as $unsigned).wrapping_sub(lower as $unsigned);
                    if gap < 2 {
                        return Err(RandomError::InvalidRange);
                    }

                    let offset = <$unsigned>::sample_below(source, gap - 1)?;
                    let value = (lower as $unsigned).wrapping_add(1).wrapping_add(offset);

                    Ok(value as $ty)
                }
            }
        )*
    };
}

impl_sample_between!(
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
    u128 => u128,
    usize => usize,
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    i128 => u128,
    isize => usize,
);

impl Sample for bool {
    #[inline]
    fn sample<E: EntropySource + ?Sized>(source: &E) -> Result<Self, EntropyError> {
        Ok(u8::sample(source)? & 1 == 1)
    }
}

impl Sample for f32 {
    /// Top 24 bits of a `u32` scaled by 2^-24: `[0.0, 1.0)`.
    #[inline]
    fn sample<E: EntropySource + ?Sized>(source: &E) -> Result<Self, EntropyError> {
        const SCALE: f32 = 1.0 / (1u32 << f32::MANTISSA_DIGITS) as f32;

        let bits = u32::sample(source)? >> (32 - f32::MANTISSA_DIGITS);
        Ok(bits as f32 * SCALE)
    }
}

impl Sample for f64 {
    /// Top 53 bits of a `u64` scaled by 2^-53: `[0.0, 1.0)`.
    #[inline]
    fn sample<E: EntropySource + ?Sized>(source: &E) -> Result<Self, EntropyError> {
        const SCALE: f64 = 1.0 / (1u64 << f64::MANTISSA_DIGITS) as f64;

        let bits = u64::sample(source)? >> (64 - f64::MANTISSA_DIGITS);
        Ok(bits as f64 * SCALE)
    }
}

/// Draws a `usize` in the inclusive range `[start, start + length]`.
///
/// # Errors
///
/// - [`RandomError::InvalidRange`] if `start + length` overflows `usize`.
/// - [`RandomError::Entropy`] if the source fails.
pub(crate) fn sample_usize_in_range<E: EntropySource + ?Sized>(
    source: &E,
    start: usize,
    length: usize,
) -> Result<usize, RandomError> {
    start
        .checked_add(length)
        .ok_or(RandomError::InvalidRange)?;

    match length.checked_add(1) {
        Some(count) => Ok(start + usize::sample_below(source, count)?),
        // length == usize::MAX, which only fits with start == 0: full range.
        None => Ok(usize::sample(source)?),
    }
}
