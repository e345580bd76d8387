// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Full package version, e.g. `"0.1.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Major component of [`VERSION`].
pub const VERSION_MAJOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MAJOR"));

/// Minor component of [`VERSION`].
pub const VERSION_MINOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MINOR"));

/// Patch component of [`VERSION`].
pub const VERSION_PATCH: u32 = parse_component(env!("CARGO_PKG_VERSION_PATCH"));

/// Decimal digits to `u32`, evaluated at compile time.
///
/// Cargo guarantees the components are plain decimal numbers; anything else
/// fails the build.
pub(crate) const fn parse_component(s: &str) -> u32 {
    let bytes = s.as_bytes();
    assert!(!bytes.is_empty(), "empty version component");

    let mut value: u32 = 0;
    let mut i = 0;

    while i < bytes.len() {
        let digit = bytes[i];
        assert!(digit.is_ascii_digit(), "non-digit in version component");

        value = value * 10 + (digit - b'0') as u32;
        i += 1;
    }

    value
}
