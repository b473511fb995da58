// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Syntactic checks for addresses and transaction hashes

use std::str::FromStr;
use std::sync::LazyLock;

use alloy_primitives::Address;
use regex::Regex;

use crate::errors::AddressError;

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is valid"));

static TX_HASH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{64}$").expect("tx hash pattern is valid"));

/// Check whether `address` is `0x` followed by exactly 40 hex digits.
///
/// The prefix must be a lowercase `0x`; the hex digits may be any case.
/// Mixed-case EIP-55 checksums are not verified.
///
/// # Examples
///
/// ```
/// use alphapoint::is_valid_address;
///
/// assert!(is_valid_address("0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d"));
/// assert!(!is_valid_address("0X8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d"));
/// assert!(!is_valid_address("8ac76a51cc950d9822d68b83fe1ad97b32cd580d"));
/// assert!(!is_valid_address(""));
/// ```
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}

/// Check whether `hash` is `0x` followed by exactly 64 hex digits.
///
/// ```
/// use alphapoint::is_valid_tx_hash;
///
/// let hash = format!("0x{}", "ab".repeat(32));
/// assert!(is_valid_tx_hash(&hash));
/// assert!(!is_valid_tx_hash("0xabc"));
/// ```
pub fn is_valid_tx_hash(hash: &str) -> bool {
    TX_HASH_PATTERN.is_match(hash)
}

/// Parse a display address into a typed [`Address`].
///
/// Applies the same shape rule as [`is_valid_address`] before decoding, so
/// inputs without the `0x` prefix are rejected even though [`Address`]'s own
/// parser would accept them.
///
/// # Errors
///
/// Returns [`AddressError::Empty`] for empty input and
/// [`AddressError::InvalidFormat`] when the shape check fails.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use alphapoint::parse_address;
///
/// let parsed = parse_address("0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d").unwrap();
/// assert_eq!(parsed, address!("8ac76a51cc950d9822d68b83fe1ad97b32cd580d"));
/// ```
pub fn parse_address(address: &str) -> Result<Address, AddressError> {
    if address.is_empty() {
        return Err(AddressError::Empty);
    }
    if !is_valid_address(address) {
        return Err(AddressError::invalid_format(address));
    }

    Address::from_str(address).map_err(|source| AddressError::Decode {
        input: address.to_string(),
        source,
    })
}
