// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Address display and validation helpers.
//!
//! Addresses are treated as opaque display strings. [`shorten_address`] never
//! looks at hex-ness, and [`is_valid_address`] is a purely syntactic check
//! with no EIP-55 checksum verification.

mod shorten;
mod validate;

pub use shorten::{
    shorten_address, shorten_address_default, DEFAULT_SHORTEN_END, DEFAULT_SHORTEN_START,
};
pub use validate::{is_valid_address, is_valid_tx_hash, parse_address};
