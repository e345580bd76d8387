// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Overflow-checked `malloc`/`calloc` style allocation.
//!
//! `nmemb * size` is validated before the allocator is ever called: a product
//! that wraps `usize` is an error, never a short allocation.
//!
//! # Core Types
//!
//! - [`UninitBlock`]: Result of [`safer_malloc`], bytes not yet initialized
//! - [`SaferBlock`]: Initialized block, dereferences to `[u8]`
//! - [`SystemAllocator`]: Default allocator (the registered global one)
//! - [`AllocError`]: Overflow, allocator failure, length mismatch
//!
//! # Example
//!
//! ```rust
//! use randkit_alloc::{AllocError, safer_calloc, safer_free, safer_malloc};
//!
//! fn example() -> Result<(), AllocError> {
//!     let zeroed = safer_calloc(16, 4)?;
//!     assert_eq!(zeroed.len(), 64);
//!     assert!(zeroed.iter().all(|b| *b == 0));
//!
//!     let mut slot = Some(safer_malloc(3, 1)?.copy_from(b"abc")?);
//!     safer_free(&mut slot);
//!     assert!(slot.is_none());
//!
//!     assert_eq!(
//!         safer_malloc(usize::MAX, 2).map(|_| ()),
//!         Err(AllocError::Overflow { nmemb: usize::MAX, size: 2 })
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Fail-fast
//!
//! With the `std` feature (default), [`OrExit`] and the `*_or_exit` helpers
//! report the failure on stderr and terminate the process with status 1.
//!
//! ```rust,no_run
//! use randkit_alloc::{OrExit, safer_calloc, safer_calloc_or_exit};
//!
//! let table = safer_calloc_or_exit(1024, 8);
//! let other = safer_calloc(1024, 8).or_exit(&"build_index");
//! # let _ = (table, other);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod allocator;
mod block;
mod error;
mod safer;
mod size;

#[cfg(feature = "std")]
mod or_exit;

pub mod support;

pub use allocator::SystemAllocator;
pub use block::{SaferBlock, UninitBlock};
pub use error::AllocError;
pub use safer::{safer_calloc, safer_calloc_in, safer_free, safer_malloc, safer_malloc_in};
pub use size::{BLOCK_ALIGN, checked_size};

#[cfg(feature = "std")]
pub use or_exit::{
    EXIT_FAILURE, OrExit, exit_with_report, safer_calloc_or_exit, safer_calloc_or_exit_traceable,
    safer_malloc_or_exit, safer_malloc_or_exit_traceable, write_failure_report,
};
