// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// OS-provided random number generator.
///
/// Stateless handle on the platform CSPRNG via `getrandom`:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `ProcessPrng`
/// - WASI: `random_get`
/// - Browsers: `crypto.getRandomValues`
///
/// Zero-sized and thread-safe, so a single process-wide instance can be a
/// `const` (see [`Random::system`](crate::Random::system)).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemEntropySource {}

impl SystemEntropySource {
    /// Creates a handle on the OS random source.
    pub const fn new() -> Self {
        Self {}
    }

    pub(crate) fn fill_bytes_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        dest: &mut [u8],
    ) -> Result<(), EntropyError> {
        if dest.is_empty() {
            return Ok(());
        }

        fill_fn(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        Self::fill_bytes_with(&getrandom::fill, dest)
    }
}
