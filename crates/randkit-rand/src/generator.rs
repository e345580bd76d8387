// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use pastey::paste;

use crate::error::RandomError;
use crate::system::SystemEntropySource;
use crate::traits::{EntropySource, Sample, SampleBelow, SampleBetween};
use crate::uniform::sample_usize_in_range;

/// Random value generator over an injectable [`EntropySource`].
///
/// # Bound semantics
///
/// The generators deliberately use three different bound conventions:
///
/// | Method | Result |
/// |---|---|
/// | `random_<uint>_with_bound(bound)` | `[0, bound)` |
/// | `random_<int>_between(lower, upper)` | `(lower, upper)`, both ends excluded |
/// | `random_usize_in_range(start, length)` | `[start, start + length]`, both ends included |
///
/// # Example
///
/// ```rust
/// use randkit_rand::{Random, RandomError};
///
/// fn roll() -> Result<u8, RandomError> {
///     let random = Random::system();
///
///     // 1..=6 as an open interval
///     random.random_u8_between(0, 7)
/// }
///
/// let face = roll().expect("Failed to roll");
/// assert!((1..=6).contains(&face));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Random<E: EntropySource = SystemEntropySource> {
    source: E,
}

impl Random<SystemEntropySource> {
    /// Generator backed by the OS random source.
    pub const fn system() -> Self {
        Self {
            source: SystemEntropySource::new(),
        }
    }
}

impl<E: EntropySource> Random<E> {
    /// Creates a generator drawing from `source`.
    pub const fn new(source: E) -> Self {
        Self { source }
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &E {
        &self.source
    }

    /// Consumes the generator, returning the underlying source.
    pub fn into_source(self) -> E {
        self.source
    }

    /// Draws a value of any [`Sample`] type.
    pub fn random<T: Sample>(&self) -> Result<T, RandomError> {
        Ok(T::sample(&self.source)?)
    }

    /// Draws an unsigned value in `[0, bound)`.
    pub fn random_with_bound<T: SampleBelow>(&self, bound: T) -> Result<T, RandomError> {
        T::sample_below(&self.source, bound)
    }

    /// Draws a value strictly between `lower` and `upper`.
    pub fn random_between<T: SampleBetween>(&self, lower: T, upper: T) -> Result<T, RandomError> {
        T::sample_between(&self.source, lower, upper)
    }

    /// Fair coin flip.
    pub fn random_bool(&self) -> Result<bool, RandomError> {
        self.random()
    }

    /// `f32` in `[0.0, 1.0)`.
    pub fn random_f32(&self) -> Result<f32, RandomError> {
        self.random()
    }

    /// `f64` in `[0.0, 1.0)`.
    ///
    /// Also the target for extended-precision requests: there is no wider
    /// stable float type.
    pub fn random_f64(&self) -> Result<f64, RandomError> {
        self.random()
    }

    /// Draws a `usize` in the inclusive range `[start, start + length]`.
    ///
    /// Unlike the other bounded generators both ends are valid results.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidRange`] if `start + length` overflows `usize`.
    /// - [`RandomError::Entropy`] if the source fails.
    pub fn random_usize_in_range(&self, start: usize, length: usize) -> Result<usize, RandomError> {
        sample_usize_in_range(&self.source, start, length)
    }

    /// Returns a new buffer of `len` random bytes, owned by the caller.
    ///
    /// # Errors
    ///
    /// - [`RandomError::BufferTooLarge`] if `len` bytes cannot be allocated.
    /// - [`RandomError::Entropy`] if the source fails.
    pub fn random_bytes(&self, len: usize) -> Result<Vec<u8>, RandomError> {
        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| RandomError::BufferTooLarge { len })?;
        bytes.resize(len, 0);

        self.fill_bytes(&mut bytes)?;

        Ok(bytes)
    }

    /// Overwrites every byte of `dest` with random data.
    pub fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        Ok(self.source.fill_bytes(dest)?)
    }
}

macro_rules! impl_full_range {
    ($($ty:ident),* $(,)?) => {
        paste! {
            impl<E: EntropySource> Random<E> {
                $(
                    #[doc = "Draws a `" $ty "` uniformly across its full range."]
                    #[inline]
                    pub fn [<random_ $ty>](&self) -> Result<$ty, RandomError> {
                        self.random()
                    }

                    #[doc = "Draws a `" $ty "` strictly greater than `lower` and strictly less than `upper`."]
                    ///
                    /// # Errors
                    ///
                    /// - [`RandomError::InvalidRange`] unless `lower < upper - 1`.
                    /// - [`RandomError::Entropy`] if the source fails.
                    #[inline]
                    pub fn [<random_ $ty _between>](
                        &self,
                        lower: $ty,
                        upper: $ty,
                    ) -> Result<$ty, RandomError> {
                        self.random_between(lower, upper)
                    }
                )*
            }
        }
    };
}

impl_full_range!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize
);

macro_rules! impl_with_bound {
    ($($ty:ident),* $(,)?) => {
        paste! {
            impl<E: EntropySource> Random<E> {
                $(
                    #[doc = "Draws a `" $ty "` in `[0, bound)`."]
                    ///
                    /// # Errors
                    ///
                    /// - [`RandomError::InvalidRange`] if `bound == 0`.
                    /// - [`RandomError::Entropy`] if the source fails.
                    #[inline]
                    pub fn [<random_ $ty _with_bound>](&self, bound: $ty) -> Result<$ty, RandomError> {
                        self.random_with_bound(bound)
                    }
                )*
            }
        }
    };
}

impl_with_bound!(u8, u16, u32, u64, u128, usize);
