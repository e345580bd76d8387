// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Support utilities.

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
