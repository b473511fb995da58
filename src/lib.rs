// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Display helpers for BNB Smart Chain wallet viewers.
//!
//! Everything here is pure and synchronous:
//!
//! - [`shorten_address`] - compact `0x8ac7...580d` display form
//! - [`closest_power_of_two`] - nearest power-of-two exponent
//! - [`format_number`] - en-US number rendering driven by [`NumberFormatOptions`]
//! - [`explorer_address_url`] / [`explorer_tx_url`] - BscScan links, plus
//!   [`Explorer`] for other chains
//! - [`is_valid_address`] - `0x` + 40 hex digit shape check
//!
//! The core helpers never fail: malformed input yields a sentinel (`""`,
//! `"0"`, `0` or `false`). Typed entry points such as [`parse_address`]
//! return [`AlphaPointError`]-compatible errors instead.
//!
//! # Example
//!
//! ```
//! use alphapoint::{
//!     closest_power_of_two, explorer_tx_url, format_number, is_valid_address,
//!     shorten_address_default, NumberFormatOptions,
//! };
//!
//! let address = "0x55d398326f99059fF775485246999027B3197955";
//! assert!(is_valid_address(address));
//! assert_eq!(shorten_address_default(address), "0x55d3...7955");
//!
//! assert_eq!(format_number(Some(1234.567), None), "1,234.57");
//! let whole = NumberFormatOptions::new().maximum_fraction_digits(0);
//! assert_eq!(format_number(Some(1234.567), Some(&whole)), "1,235");
//!
//! assert_eq!(closest_power_of_two(1000.0), 10);
//! assert_eq!(explorer_tx_url("0xdef"), "https://bscscan.com/tx/0xdef");
//! ```

pub mod address;
pub mod config;
pub mod errors;
pub mod explorer;
pub mod number;
pub mod types;

pub use address::{
    is_valid_address, is_valid_tx_hash, parse_address, shorten_address, shorten_address_default,
    DEFAULT_SHORTEN_END, DEFAULT_SHORTEN_START,
};
pub use config::{DisplayConfig, DisplayConfigBuilder};
pub use errors::{AddressError, AlphaPointError, ExplorerError, FormatOptionsError};
pub use explorer::{explorer_address_url, explorer_tx_url, Explorer};
pub use number::{
    closest_power_of_two, format_number, format_number_default, NumberFormatOptions,
    ResolvedNumberFormat,
};
pub use types::{
    total_volume, NormalizedAmount, PriceMap, TokenDecimals, TokenInfo, Transaction, UsdValue,
    Wallet,
};
