// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities re-exported from randkit-rand and randkit-alloc

/// Mock entropy source from randkit-rand.
#[cfg(feature = "test-utils")]
pub mod rand {
    pub use randkit_rand::support::test_utils::*;
}
/// Mock allocator from randkit-alloc.
#[cfg(feature = "test-utils")]
pub mod alloc {
    pub use randkit_alloc::support::test_utils::*;
}
