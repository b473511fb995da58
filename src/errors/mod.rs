// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the alphapoint library.
//!
//! The core display helpers ([`crate::shorten_address`], [`crate::format_number`],
//! [`crate::closest_power_of_two`], the explorer link builders and
//! [`crate::is_valid_address`]) are total and never return errors. They fall
//! back to a well-defined sentinel instead.
//!
//! The stricter, typed entry points return module-specific errors:
//! - [`AddressError`] - Errors from [`crate::parse_address`]
//! - [`FormatOptionsError`] - Errors from [`crate::NumberFormatOptions::validate`]
//! - [`ExplorerError`] - Errors from [`crate::Explorer::parse`]
//!
//! [`AlphaPointError`] wraps all of them for callers that don't need to
//! distinguish between sources.
//!
//! # Examples
//!
//! ```rust
//! use alphapoint::{parse_address, AlphaPointError, DisplayConfigBuilder};
//!
//! fn load(address: &str) -> Result<(), AlphaPointError> {
//!     let _config = DisplayConfigBuilder::with_defaults()
//!         .maximum_fraction_digits(4)
//!         .try_build()?;
//!     let _address = parse_address(address)?;
//!     Ok(())
//! }
//!
//! assert!(load("0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d").is_ok());
//! assert!(load("not an address").is_err());
//! ```

mod address;
mod explorer;
mod format;

pub use address::AddressError;
pub use explorer::ExplorerError;
pub use format::FormatOptionsError;

/// Unified error type for all alphapoint operations.
///
/// All module-specific error types convert to `AlphaPointError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum AlphaPointError {
    /// Error from strict address parsing.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Error from number format option validation.
    #[error("Format options error: {0}")]
    FormatOptions(#[from] FormatOptionsError),

    /// Error from explorer construction.
    #[error("Explorer error: {0}")]
    Explorer(#[from] ExplorerError),
}
