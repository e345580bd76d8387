// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randkit_rand
//!
//! Uniform random scalars, bounded integer draws and random byte buffers over
//! an injectable entropy source.
//!
//! ## Core Types
//!
//! - [`Random`]: Generator facade with one method per width and bound style
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`Xorshift64Source`]: Seeded, reproducible source
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for byte sources
//! - [`Sample`]: Types drawn uniformly across their range
//! - [`SampleBelow`]: Unsigned draws in `[0, bound)`
//! - [`SampleBetween`]: Integer draws in `(lower, upper)`
//!
//! ## Example
//!
//! ```rust
//! use randkit_rand::{Random, RandomError, Xorshift64Source};
//!
//! fn example() -> Result<(), RandomError> {
//!     // OS-backed
//!     let random = Random::system();
//!     let die = random.random_u8_with_bound(6)? + 1;
//!     let offset = random.random_i32_between(-10, 10)?;
//!     let index = random.random_usize_in_range(100, 5)?;
//!     let key = random.random_bytes(32)?;
//!
//!     assert!((1..=6).contains(&die));
//!     assert!(-10 < offset && offset < 10);
//!     assert!((100..=105).contains(&index));
//!     assert_eq!(key.len(), 32);
//!
//!     // Reproducible
//!     let seeded = Random::new(Xorshift64Source::new(7));
//!     let _ = seeded.random_f64()?;
//!
//!     // Empty open interval
//!     assert_eq!(random.random_i8_between(3, 4), Err(RandomError::InvalidRange));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Bound conventions
//!
//! `*_with_bound` excludes its bound, `*_between` excludes both ends and
//! `random_usize_in_range` includes both ends. See [`Random`].
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `ProcessPrng`
//! - WASI: `random_get`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod generator;
mod global;
mod system;
mod traits;
mod uniform;
mod xorshift;

/// Support utilities (mock entropy sources behind `test-utils`).
pub mod support;

pub use error::{EntropyError, RandomError};
pub use generator::Random;
pub use global::{
    fill_with_random_bytes, random, random_between, random_bytes, random_usize_in_range,
    random_with_bound,
};
pub use system::SystemEntropySource;
pub use traits::{EntropySource, Sample, SampleBelow, SampleBetween};
pub use xorshift::{Xorshift64Source, ZERO_SEED_REPLACEMENT};
