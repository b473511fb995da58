// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Block explorer link builders
//!
//! The free functions [`explorer_address_url`] and [`explorer_tx_url`] target
//! BscScan. [`Explorer`] carries an arbitrary base URL and can be picked per
//! chain with [`Explorer::for_chain`].
//!
//! Identifiers are interpolated verbatim: no encoding, no validation and no
//! network access. Callers are responsible for passing URL-safe input.

use alloy_chains::NamedChain;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::constants::explorers;
use crate::errors::ExplorerError;

/// BscScan address page for `hash`.
///
/// ```
/// use alphapoint::explorer_address_url;
///
/// assert_eq!(explorer_address_url("0xABC"), "https://bscscan.com/address/0xABC");
/// ```
pub fn explorer_address_url(hash: &str) -> String {
    format!("{}/address/{hash}", explorers::BSCSCAN)
}

/// BscScan transaction page for `hash`.
///
/// ```
/// use alphapoint::explorer_tx_url;
///
/// assert_eq!(explorer_tx_url("0xdef"), "https://bscscan.com/tx/0xdef");
/// ```
pub fn explorer_tx_url(hash: &str) -> String {
    format!("{}/tx/{hash}", explorers::BSCSCAN)
}

/// An Etherscan-family block explorer identified by its base URL
///
/// # Examples
///
/// ```
/// use alloy_chains::NamedChain;
/// use alphapoint::Explorer;
///
/// let explorer = Explorer::for_chain(NamedChain::Mainnet).unwrap();
/// assert_eq!(explorer.tx_url("0xdef"), "https://etherscan.io/tx/0xdef");
///
/// let bsc = Explorer::default();
/// assert_eq!(bsc.address_url("0xABC"), "https://bscscan.com/address/0xABC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Explorer {
    base_url: String,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::bscscan()
    }
}

impl Explorer {
    /// Create an explorer from a base URL without checking it.
    ///
    /// Trailing slashes are trimmed so paths join cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        let trimmed_len = base_url.trim_end_matches('/').len();
        base_url.truncate(trimmed_len);
        Self { base_url }
    }

    /// Create an explorer from a base URL, rejecting anything that is not an
    /// absolute `http` or `https` URL.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidBaseUrl`] when the URL does not parse
    /// and [`ExplorerError::UnsupportedScheme`] for other schemes.
    ///
    /// ```
    /// use alphapoint::Explorer;
    ///
    /// let explorer = Explorer::parse("https://testnet.bscscan.com/").unwrap();
    /// assert_eq!(explorer.base_url(), "https://testnet.bscscan.com");
    /// assert!(Explorer::parse("bscscan.com").is_err());
    /// ```
    pub fn parse(base_url: &str) -> Result<Self, ExplorerError> {
        let url = Url::parse(base_url).map_err(|source| ExplorerError::InvalidBaseUrl {
            base: base_url.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self::new(base_url)),
            scheme => Err(ExplorerError::UnsupportedScheme {
                base: base_url.to_string(),
                scheme: scheme.to_string(),
            }),
        }
    }

    /// BscScan, the BNB Smart Chain explorer
    pub fn bscscan() -> Self {
        Self::new(explorers::BSCSCAN)
    }

    /// The canonical explorer for a chain, if one is known.
    pub fn for_chain(chain: NamedChain) -> Option<Self> {
        let base_url = match chain {
            NamedChain::BinanceSmartChain => explorers::BSCSCAN,
            NamedChain::BinanceSmartChainTestnet => explorers::BSCSCAN_TESTNET,
            NamedChain::Mainnet => explorers::ETHERSCAN,
            NamedChain::Arbitrum => explorers::ARBISCAN,
            NamedChain::Base => explorers::BASESCAN,
            NamedChain::Optimism => explorers::OPTIMISTIC_ETHERSCAN,
            NamedChain::Polygon => explorers::POLYGONSCAN,
            _ => return None,
        };
        Some(Self::new(base_url))
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Address page for `hash`
    pub fn address_url(&self, hash: &str) -> String {
        format!("{}/address/{hash}", self.base_url)
    }

    /// Transaction page for `hash`
    pub fn tx_url(&self, hash: &str) -> String {
        format!("{}/tx/{hash}", self.base_url)
    }

    /// Token tracker page for a token contract
    pub fn token_url(&self, token: &str) -> String {
        format!("{}/token/{token}", self.base_url)
    }
}

impl From<String> for Explorer {
    fn from(base_url: String) -> Self {
        Self::new(base_url)
    }
}

impl From<Explorer> for String {
    fn from(explorer: Explorer) -> Self {
        explorer.base_url
    }
}

impl std::fmt::Display for Explorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.base_url)
    }
}
