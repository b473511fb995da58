// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Watched wallets

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::address::{is_valid_address, parse_address};
use crate::config::DisplayConfig;
use crate::errors::AddressError;
use crate::explorer::Explorer;

/// A wallet address with a user-chosen label
///
/// # Examples
///
/// ```
/// use alphapoint::{DisplayConfig, Wallet};
///
/// let wallet = Wallet::new("0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d", "");
/// assert!(wallet.is_valid());
/// assert_eq!(wallet.display_name(&DisplayConfig::default()), "0x8ac7...580d");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wallet {
    /// Wallet address
    pub address: String,
    /// Label shown instead of the address when set
    #[serde(default)]
    pub label: String,
}

impl Wallet {
    /// Create a wallet entry
    pub fn new(address: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            label: label.into(),
        }
    }

    /// Whether the address has the `0x` + 40 hex digit shape
    pub fn is_valid(&self) -> bool {
        is_valid_address(&self.address)
    }

    /// Typed address
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] if the address is not well formed.
    pub fn parsed_address(&self) -> Result<Address, AddressError> {
        parse_address(&self.address)
    }

    /// Address shortened with the configured widths
    pub fn short_address(&self, config: &DisplayConfig) -> String {
        config.shorten(&self.address)
    }

    /// Trimmed label, or the shortened address when the label is blank
    pub fn display_name(&self, config: &DisplayConfig) -> String {
        let label = self.label.trim();
        if label.is_empty() {
            self.short_address(config)
        } else {
            label.to_string()
        }
    }

    /// Explorer page for this wallet
    pub fn explorer_url(&self, explorer: &Explorer) -> String {
        explorer.address_url(&self.address)
    }
}
