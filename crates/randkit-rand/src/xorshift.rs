// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Deterministic xorshift64 source.
//!
//! Xorshift64 is a fast PRNG with good statistical properties and a period of
//! 2^64 - 1. It is NOT cryptographically secure: its whole state leaks after a
//! single 8-byte output. Use it where reproducibility matters (simulations,
//! tests, replays) and [`SystemEntropySource`](crate::SystemEntropySource)
//! everywhere else.
//!
//! # Reference
//!
//! Marsaglia, George (2003). "Xorshift RNGs". Journal of Statistical Software.

use core::cell::Cell;
use core::fmt;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Replacement state for a zero seed (xorshift64 is stuck at zero forever).
///
/// 2^64 / golden ratio, the usual odd constant for seed scrambling.
pub const ZERO_SEED_REPLACEMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded, reproducible [`EntropySource`].
///
/// State lives in a [`Cell`], so the source is `!Sync`: keep one per thread.
///
/// # Example
///
/// ```rust
/// use randkit_rand::{Random, Xorshift64Source};
///
/// let a = Random::new(Xorshift64Source::new(42));
/// let b = Random::new(Xorshift64Source::new(42));
///
/// assert_eq!(a.random_u64().unwrap(), b.random_u64().unwrap());
/// ```
pub struct Xorshift64Source {
    state: Cell<u64>,
}

impl Xorshift64Source {
    /// Creates a source from `seed`.
    ///
    /// A zero seed is replaced by [`ZERO_SEED_REPLACEMENT`].
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 {
            ZERO_SEED_REPLACEMENT
        } else {
            seed
        };

        Self {
            state: Cell::new(seed),
        }
    }

    /// Creates a source seeded with 8 bytes drawn from `entropy`.
    ///
    /// # Errors
    ///
    /// Propagates the seeding source's [`EntropyError`].
    pub fn from_entropy<E: EntropySource + ?Sized>(entropy: &E) -> Result<Self, EntropyError> {
        let mut seed = [0u8; 8];
        entropy.fill_bytes(&mut seed)?;

        Ok(Self::new(u64::from_le_bytes(seed)))
    }

    /// Advances the state and returns the next output.
    ///
    /// Shifts (13, 7, 17).
    #[inline(always)]
    pub fn next_u64(&self) -> u64 {
        let mut x = self.state.get();
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state.set(x);

        x
    }
}

impl EntropySource for Xorshift64Source {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let mut chunks = dest.chunks_exact_mut(8);

        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }

        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }

        Ok(())
    }
}

impl fmt::Debug for Xorshift64Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Xorshift64Source([REDACTED])")
    }
}
