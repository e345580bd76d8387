// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fail-fast layer over the recoverable allocation API.
//!
//! Every helper here writes a single line `"{func_name}: {error}"` to stderr
//! and terminates the process with [`EXIT_FAILURE`].

use core::fmt::Display;
use core::panic::Location;
use std::io::{self, Write};

use crate::block::{SaferBlock, UninitBlock};
use crate::error::AllocError;
use crate::safer::{safer_calloc, safer_malloc};

/// Exit status used on allocation failure.
pub const EXIT_FAILURE: i32 = 1;

/// Writes the one-line failure report used by the fail-fast helpers.
///
/// # Example
///
/// ```rust
/// use randkit_alloc::{AllocError, write_failure_report};
///
/// let mut out = Vec::new();
/// let err = AllocError::Failed { size: 64 };
/// write_failure_report(&mut out, &"load_table", &err).unwrap();
///
/// assert_eq!(out, b"load_table: allocation of 64 bytes failed\n");
/// ```
pub fn write_failure_report<W: Write>(
    writer: &mut W,
    func_name: &dyn Display,
    err: &AllocError,
) -> io::Result<()> {
    writeln!(writer, "{}: {}", func_name, err)?;
    writer.flush()
}

/// Reports `err` on stderr and exits with [`EXIT_FAILURE`].
pub fn exit_with_report(func_name: &dyn Display, err: &AllocError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(function = %func_name, error = %err, "allocation failed, exiting");

    // Nothing left to do if stderr is gone.
    let _ = write_failure_report(&mut io::stderr().lock(), func_name, err);

    std::process::exit(EXIT_FAILURE)
}

/// Turns an allocation result into its value or process termination.
pub trait OrExit<T> {
    /// Returns the value, or reports the error under `func_name` and exits.
    fn or_exit(self, func_name: &dyn Display) -> T;
}

impl<T> OrExit<T> for Result<T, AllocError> {
    fn or_exit(self, func_name: &dyn Display) -> T {
        match self {
            Ok(value) => value,
            Err(err) => exit_with_report(func_name, &err),
        }
    }
}

/// [`safer_malloc`], terminating the process on failure.
///
/// `func_name` names the caller in the report.
pub fn safer_malloc_or_exit_traceable(
    nmemb: usize,
    size: usize,
    func_name: &dyn Display,
) -> UninitBlock {
    safer_malloc(nmemb, size).or_exit(func_name)
}

/// [`safer_calloc`], terminating the process on failure.
///
/// `func_name` names the caller in the report.
pub fn safer_calloc_or_exit_traceable(
    nmemb: usize,
    size: usize,
    func_name: &dyn Display,
) -> SaferBlock {
    safer_calloc(nmemb, size).or_exit(func_name)
}

/// [`safer_malloc`], terminating the process on failure.
///
/// The report names the caller's source location.
#[track_caller]
pub fn safer_malloc_or_exit(nmemb: usize, size: usize) -> UninitBlock {
    safer_malloc_or_exit_traceable(nmemb, size, Location::caller())
}

/// [`safer_calloc`], terminating the process on failure.
///
/// The report names the caller's source location.
#[track_caller]
pub fn safer_calloc_or_exit(nmemb: usize, size: usize) -> SaferBlock {
    safer_calloc_or_exit_traceable(nmemb, size, Location::caller())
}
