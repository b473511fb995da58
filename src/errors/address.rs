// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for strict address parsing.
//!
//! The display helpers never fail. These errors are only returned by the
//! typed entry points such as [`crate::parse_address`].

/// Errors that can occur when turning a string into a typed address.
///
/// # Examples
///
/// ```rust
/// use alphapoint::{parse_address, AddressError};
///
/// match parse_address("0x1234") {
///     Err(AddressError::InvalidFormat { input }) => assert_eq!(input, "0x1234"),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// Input was empty.
    #[error("Address is empty")]
    Empty,

    /// Input does not have the `0x` + 40 hex digit shape.
    #[error("Invalid address format: {input}")]
    InvalidFormat {
        /// The rejected input
        input: String,
    },

    /// Input had the right shape but could not be decoded.
    #[error("Failed to decode address {input}")]
    Decode {
        /// The rejected input
        input: String,
        /// The underlying hex decoding error
        #[source]
        source: alloy_primitives::hex::FromHexError,
    },
}

impl AddressError {
    /// Create an `InvalidFormat` error for the given input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        AddressError::InvalidFormat {
            input: input.into(),
        }
    }
}
