// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Bias-free bounded random numbers and overflow-checked allocation in Rust.</em></p>
//!
//! ---
//!
//! Randkit bundles two small, independent cores:
//!
//! - [`rand`]: uniform scalars of every integer and float width, bounded and
//!   ranged integer draws without modulo bias, random byte buffers, over an
//!   injectable entropy source.
//! - [`alloc`]: `malloc`/`calloc` style allocation that checks `nmemb * size`
//!   for overflow before the allocator is called, with owned blocks and
//!   optional fail-fast helpers.
//!
//! On top of them, [`collections::SliceRandom`] shuffles and picks from
//! slices, and [`numbers::RandomNumber`] draws any sampleable number straight
//! from its type.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! randkit = "0.1.0"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use randkit::alloc::safer_calloc;
//! use randkit::collections::SliceRandom;
//! use randkit::numbers::RandomNumber;
//! use randkit::rand::Random;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let random = Random::system();
//!
//!     // Bounded draws
//!     let die = random.random_u8_with_bound(6)? + 1;
//!     let inner = random.random_i32_between(-10, 10)?;
//!     assert!((1..=6).contains(&die));
//!     assert!(-10 < inner && inner < 10);
//!
//!     // Straight from the type
//!     let ratio = f64::random()?;
//!     assert!((0.0..1.0).contains(&ratio));
//!
//!     // Slices
//!     let mut deck: Vec<u8> = (0..52).collect();
//!     deck.shuffle(&random)?;
//!     let top = deck.choose(&random)?;
//!     assert!(top.is_some());
//!
//!     // Checked allocation
//!     let table = safer_calloc(16, 4)?;
//!     assert_eq!(table.len(), 64);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `std` (default): fail-fast `*_or_exit` helpers in [`alloc`]
//! - `tracing`: allocation failures emitted as `tracing` events
//! - `test-utils`: mock entropy source and mock allocator under [`support`]

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc as liballoc;

#[cfg(test)]
mod tests;

pub mod collections;
pub mod numbers;
pub mod support;

mod version;

pub use randkit_alloc as alloc;
pub use randkit_rand as rand;

pub use version::{VERSION, VERSION_MAJOR, VERSION_MINOR, VERSION_PATCH};
