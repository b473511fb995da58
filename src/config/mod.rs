// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Display configuration
//!
//! Bundles the knobs a wallet view needs: shortener widths, number and USD
//! formatting options, and which block explorer to link to.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use alphapoint::DisplayConfig;
//!
//! // BscScan links, 6/4 shortening, 2 fraction digits, USD with cents
//! let config = DisplayConfig::default();
//! assert_eq!(
//!     config.shorten("0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d"),
//!     "0x8ac7...580d"
//! );
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use alphapoint::DisplayConfigBuilder;
//! use alloy_chains::NamedChain;
//!
//! let config = DisplayConfigBuilder::with_defaults()
//!     .chain(NamedChain::Mainnet)
//!     .shorten_widths(4, 4)
//!     .maximum_fraction_digits(4)
//!     .build();
//! assert_eq!(config.tx_url("0x1"), "https://etherscan.io/tx/0x1");
//! ```

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};

use crate::address::{shorten_address, DEFAULT_SHORTEN_END, DEFAULT_SHORTEN_START};
use crate::errors::FormatOptionsError;
use crate::explorer::Explorer;
use crate::number::{format_number, NumberFormatOptions};
use crate::types::UsdValue;

pub mod constants;

/// Configuration for rendering wallet and transaction data
///
/// Use [`DisplayConfigBuilder`] for a fluent API to construct instances.
/// Missing fields take their [`Default`] values when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Leading characters kept when shortening addresses
    /// Default: 6
    pub shorten_start: usize,

    /// Trailing characters kept when shortening addresses
    /// Default: 4
    pub shorten_end: usize,

    /// Options for plain amounts, merged over the formatter defaults
    /// Default: none set (at most 2 fraction digits)
    pub number_format: NumberFormatOptions,

    /// Options for USD values, merged over the formatter defaults
    /// Default: exactly 2 fraction digits
    pub usd_format: NumberFormatOptions,

    /// Explorer used for address and transaction links
    /// Default: BscScan
    pub explorer: Explorer,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl DisplayConfig {
    /// Defaults for a BNB Smart Chain wallet view
    ///
    /// USD values always show cents; everything else uses the formatter
    /// defaults.
    pub fn with_common_defaults() -> Self {
        Self {
            usd_format: NumberFormatOptions::new()
                .minimum_fraction_digits(2)
                .maximum_fraction_digits(2),
            ..Self::minimal()
        }
    }

    /// Formatter defaults everywhere, including USD values
    ///
    /// ```rust
    /// use alphapoint::{DisplayConfig, UsdValue};
    ///
    /// let config = DisplayConfig::minimal();
    /// assert_eq!(config.format_usd(UsdValue::new(1500.0)), "$1,500");
    /// assert_eq!(DisplayConfig::default().format_usd(UsdValue::new(1500.0)), "$1,500.00");
    /// ```
    pub fn minimal() -> Self {
        Self {
            shorten_start: DEFAULT_SHORTEN_START,
            shorten_end: DEFAULT_SHORTEN_END,
            number_format: NumberFormatOptions::new(),
            usd_format: NumberFormatOptions::new(),
            explorer: Explorer::bscscan(),
        }
    }

    /// Check both option sets.
    ///
    /// # Errors
    ///
    /// Returns the first [`FormatOptionsError`] found.
    pub fn validate(&self) -> Result<(), FormatOptionsError> {
        self.number_format.validate()?;
        self.usd_format.validate()
    }

    /// Shorten an address with the configured widths
    pub fn shorten(&self, address: &str) -> String {
        shorten_address(address, self.shorten_start, self.shorten_end)
    }

    /// Format an amount with the configured number options
    pub fn format_number(&self, value: Option<f64>) -> String {
        format_number(value, Some(&self.number_format))
    }

    /// Format a USD value with the configured USD options
    pub fn format_usd(&self, value: UsdValue) -> String {
        value.format_with(&self.usd_format)
    }

    /// Explorer address page
    pub fn address_url(&self, hash: &str) -> String {
        self.explorer.address_url(hash)
    }

    /// Explorer transaction page
    pub fn tx_url(&self, hash: &str) -> String {
        self.explorer.tx_url(hash)
    }
}

/// Builder for [`DisplayConfig`]
///
/// # Example
///
/// ```rust
/// use alphapoint::{DisplayConfigBuilder, NumberFormatOptions};
///
/// let config = DisplayConfigBuilder::new()
///     .shorten_widths(8, 6)
///     .number_format(NumberFormatOptions::new().use_grouping(false))
///     .build();
/// assert_eq!(config.format_number(Some(12345.0)), "12345");
/// ```
pub struct DisplayConfigBuilder {
    config: DisplayConfig,
}

impl Default for DisplayConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayConfigBuilder {
    /// Create a new builder starting from [`DisplayConfig::minimal`]
    pub fn new() -> Self {
        Self {
            config: DisplayConfig::minimal(),
        }
    }

    /// Start from [`DisplayConfig::with_common_defaults`]
    pub fn with_defaults() -> Self {
        Self {
            config: DisplayConfig::with_common_defaults(),
        }
    }

    /// Set shortener widths
    pub fn shorten_widths(mut self, start: usize, end: usize) -> Self {
        self.config.shorten_start = start;
        self.config.shorten_end = end;
        self
    }

    /// Replace the number options
    pub fn number_format(mut self, options: NumberFormatOptions) -> Self {
        self.config.number_format = options;
        self
    }

    /// Convenience: set maximum fraction digits for plain amounts
    pub fn maximum_fraction_digits(mut self, digits: u32) -> Self {
        self.config.number_format = self.config.number_format.maximum_fraction_digits(digits);
        self
    }

    /// Replace the USD options
    pub fn usd_format(mut self, options: NumberFormatOptions) -> Self {
        self.config.usd_format = options;
        self
    }

    /// Use a specific explorer
    pub fn explorer(mut self, explorer: Explorer) -> Self {
        self.config.explorer = explorer;
        self
    }

    /// Convenience: use the canonical explorer for `chain`
    ///
    /// Chains without a known explorer keep the current one.
    pub fn chain(mut self, chain: NamedChain) -> Self {
        match Explorer::for_chain(chain) {
            Some(explorer) => self.config.explorer = explorer,
            None => {
                tracing::warn!(
                    chain = %chain,
                    explorer = %self.config.explorer,
                    "No known explorer for chain, keeping current explorer"
                );
            }
        }
        self
    }

    /// Build the final configuration
    ///
    /// Invalid format options are kept as given and clamped at format time.
    pub fn build(self) -> DisplayConfig {
        self.config
    }

    /// Build the final configuration, rejecting invalid format options
    ///
    /// # Errors
    ///
    /// Returns a [`FormatOptionsError`] if either option set fails
    /// [`NumberFormatOptions::validate`].
    ///
    /// ```rust
    /// use alphapoint::DisplayConfigBuilder;
    ///
    /// assert!(DisplayConfigBuilder::new().maximum_fraction_digits(101).try_build().is_err());
    /// ```
    pub fn try_build(self) -> Result<DisplayConfig, FormatOptionsError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
