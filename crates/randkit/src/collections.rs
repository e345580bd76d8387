// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random operations on slices.
//!
//! Shuffling is Fisher-Yates driven by bias-free bounded draws, so every
//! permutation is equally likely for an unbiased source.

use liballoc::vec::Vec;

use randkit_rand::{EntropySource, Random, RandomError};

/// Extension trait for shuffling and picking from slices.
///
/// # Example
///
/// ```rust
/// use randkit::collections::SliceRandom;
/// use randkit::rand::{Random, Xorshift64Source};
///
/// let random = Random::new(Xorshift64Source::new(42));
/// let words = ["alpha", "beta", "gamma"];
///
/// let shuffled = words.shuffled(&random).unwrap();
/// assert_eq!(shuffled.len(), 3);
///
/// let picked = words.choose(&random).unwrap();
/// assert!(picked.is_some_and(|w| words.contains(w)));
///
/// let empty: [u8; 0] = [];
/// assert_eq!(empty.choose(&random), Ok(None));
/// ```
pub trait SliceRandom {
    /// Element type.
    type Item;

    /// Shuffles the slice in place.
    ///
    /// # Errors
    ///
    /// Propagates [`RandomError::Entropy`] from the source. On error the slice
    /// holds a partial shuffle, still a permutation of the input.
    fn shuffle<E: EntropySource>(&mut self, random: &Random<E>) -> Result<(), RandomError>;

    /// Returns a shuffled copy, leaving the slice untouched.
    fn shuffled<E: EntropySource>(&self, random: &Random<E>) -> Result<Vec<Self::Item>, RandomError>
    where
        Self::Item: Clone;

    /// Returns a uniformly chosen element, or `None` for an empty slice.
    ///
    /// An empty slice draws nothing from the source.
    fn choose<E: EntropySource>(&self, random: &Random<E>) -> Result<Option<&Self::Item>, RandomError>;
}

impl<T> SliceRandom for [T] {
    type Item = T;

    fn shuffle<E: EntropySource>(&mut self, random: &Random<E>) -> Result<(), RandomError> {
        if self.len() <= 1 {
            return Ok(());
        }

        for i in (1..self.len()).rev() {
            let j = random.random_usize_with_bound(i + 1)?;
            self.swap(i, j);
        }

        Ok(())
    }

    fn shuffled<E: EntropySource>(&self, random: &Random<E>) -> Result<Vec<T>, RandomError>
    where
        T: Clone,
    {
        let mut copy = self.to_vec();
        copy.shuffle(random)?;

        Ok(copy)
    }

    fn choose<E: EntropySource>(&self, random: &Random<E>) -> Result<Option<&T>, RandomError> {
        if self.is_empty() {
            return Ok(None);
        }

        let index = random.random_usize_with_bound(self.len())?;

        Ok(self.get(index))
    }
}
