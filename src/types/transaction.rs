// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token legs and swap transactions as shown in a wallet view

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::price::{lookup_price, PriceMap};
use super::tokens::{NormalizedAmount, TokenDecimals, UsdValue};
use crate::address::is_valid_tx_hash;
use crate::config::DisplayConfig;
use crate::explorer::Explorer;
use crate::number::closest_power_of_two;

/// One side of a transaction: a token and how much of it moved
///
/// # Examples
///
/// ```
/// use alphapoint::{DisplayConfig, PriceMap, TokenDecimals, TokenInfo, UsdValue};
///
/// let usdt = TokenInfo::new(
///     "0x55d398326f99059fF775485246999027B3197955",
///     "USDT",
///     TokenDecimals::STANDARD,
///     1234.5678,
/// );
/// assert_eq!(usdt.format_amount(&DisplayConfig::default()), "1,234.57 USDT");
///
/// let prices = PriceMap::from([("USDT".to_string(), 1.0)]);
/// assert_eq!(usdt.usd_value(&prices), Some(UsdValue::new(1234.5678)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Token contract address
    pub address: String,
    /// Ticker symbol
    pub symbol: String,
    /// On-chain decimal precision
    pub decimals: TokenDecimals,
    /// Human-readable amount
    pub amount: NormalizedAmount,
}

impl TokenInfo {
    /// Create a token leg from a human-readable amount
    pub fn new(
        address: impl Into<String>,
        symbol: impl Into<String>,
        decimals: TokenDecimals,
        amount: f64,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
            amount: NormalizedAmount::new(amount),
        }
    }

    /// Create a token leg from an on-chain integer amount
    pub fn from_raw(
        address: impl Into<String>,
        symbol: impl Into<String>,
        decimals: TokenDecimals,
        raw: U256,
    ) -> Self {
        Self {
            address: address.into(),
            symbol: symbol.into(),
            decimals,
            amount: decimals.normalize(raw),
        }
    }

    /// USD price of this token, looked up by address, lowercase address,
    /// then symbol
    pub fn price_in(&self, prices: &PriceMap) -> Option<f64> {
        lookup_price(prices, &self.address, &self.symbol)
    }

    /// USD value of the amount, `None` when the token is unpriced
    pub fn usd_value(&self, prices: &PriceMap) -> Option<UsdValue> {
        self.price_in(prices).map(|price| self.amount.to_usd(price))
    }

    /// Amount followed by the symbol, e.g. `1,234.57 USDT`
    pub fn format_amount(&self, config: &DisplayConfig) -> String {
        format!(
            "{} {}",
            self.amount.format_with(&config.number_format),
            self.symbol
        )
    }
}

/// A swap as listed in a wallet's history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Transaction hash
    pub hash: String,
    /// Block timestamp, seconds since the Unix epoch
    pub timestamp: u64,
    /// Status as reported by the indexer, e.g. `success`
    pub status: String,
    /// Gas used
    pub gas: f64,
    /// Token sent
    pub from: TokenInfo,
    /// Token received
    pub to: TokenInfo,
    /// Trade volume in USD
    #[serde(rename = "volumeUSD")]
    pub volume_usd: UsdValue,
}

impl Transaction {
    /// Whether the status is `success`, ignoring case
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
    }

    /// Whether `hash` is `0x` + 64 hex digits
    pub fn has_valid_hash(&self) -> bool {
        is_valid_tx_hash(&self.hash)
    }

    /// Block time, `None` if the timestamp is out of range
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.timestamp).ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Nearest power-of-two exponent of the USD volume
    ///
    /// Volume tiers double in size: $1,000 and $1,024 are both tier 10.
    /// Zero or negative volume is tier 0.
    pub fn volume_tier(&self) -> i32 {
        closest_power_of_two(self.volume_usd.as_f64())
    }

    /// Explorer page for this transaction
    pub fn explorer_url(&self, explorer: &Explorer) -> String {
        explorer.tx_url(&self.hash)
    }

    /// Hash shortened with the configured widths
    pub fn short_hash(&self, config: &DisplayConfig) -> String {
        config.shorten(&self.hash)
    }
}

/// Total USD volume across transactions
pub fn total_volume<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> UsdValue {
    transactions.into_iter().map(|tx| tx.volume_usd).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "0x5c504ed432cb51138bcf09aa5e8a410dd4a1e204ef84bfed1be16dfba1b22060";
    const USDT: &str = "0x55d398326f99059ff775485246999027b3197955";
    const CAKE: &str = "0x0e09fabb73bd3ade0a17ecc321fd13a19e81ce82";

    fn swap(volume: f64) -> Transaction {
        Transaction {
            hash: HASH.to_string(),
            timestamp: 1_700_000_000,
            status: "SUCCESS".to_string(),
            gas: 120_000.0,
            from: TokenInfo::new(USDT, "USDT", TokenDecimals::STANDARD, volume),
            to: TokenInfo::new(CAKE, "CAKE", TokenDecimals::STANDARD, volume / 2.0),
            volume_usd: UsdValue::new(volume),
        }
    }

    #[test]
    fn test_deserializes_front_end_json() {
        let json = r#"{
            "hash": "0x01",
            "timestamp": 1700000000,
            "status": "success",
            "gas": 21000,
            "from": {"address": "0xa", "symbol": "USDT", "decimals": 18, "amount": 10.5},
            "to": {"address": "0xb", "symbol": "CAKE", "decimals": 18, "amount": 4.2},
            "volumeUSD": 10.5
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.volume_usd, UsdValue::new(10.5));
        assert_eq!(tx.from.decimals, TokenDecimals::STANDARD);
        assert_eq!(tx.to.amount.as_f64(), 4.2);
        assert!(tx.is_success());

        let back = serde_json::to_value(&tx).unwrap();
        assert_eq!(back["volumeUSD"], 10.5);
    }

    #[test]
    fn test_status_and_hash() {
        let mut tx = swap(100.0);
        assert!(tx.is_success());
        assert!(tx.has_valid_hash());

        tx.status = "failed".to_string();
        tx.hash = "0x01".to_string();
        assert!(!tx.is_success());
        assert!(!tx.has_valid_hash());
    }

    #[test]
    fn test_datetime() {
        let tx = swap(1.0);
        assert_eq!(
            tx.datetime().unwrap().to_rfc3339(),
            "2023-11-14T22:13:20+00:00"
        );

        let mut far = swap(1.0);
        far.timestamp = u64::MAX;
        assert_eq!(far.datetime(), None);
    }

    #[test]
    fn test_volume_tier() {
        assert_eq!(swap(1000.0).volume_tier(), 10);
        assert_eq!(swap(1024.0).volume_tier(), 10);
        assert_eq!(swap(0.0).volume_tier(), 0);
    }

    #[test]
    fn test_links_and_short_hash() {
        let tx = swap(1.0);
        assert_eq!(
            tx.explorer_url(&Explorer::bscscan()),
            format!("https://bscscan.com/tx/{HASH}")
        );
        assert_eq!(tx.short_hash(&DisplayConfig::default()), "0x5c50...2060");
    }

    #[test]
    fn test_total_volume() {
        let txs = vec![swap(100.0), swap(250.5)];
        assert_eq!(total_volume(&txs), UsdValue::new(350.5));
        assert_eq!(total_volume(&Vec::new()), UsdValue::ZERO);
    }

    #[test]
    fn test_token_from_raw() {
        let token =
            TokenInfo::from_raw("0xa", "USDC", TokenDecimals::USDC, U256::from(2_500_000u64));
        assert_eq!(token.amount.as_f64(), 2.5);
    }

    #[test]
    fn test_unpriced_token() {
        let token = TokenInfo::new("0xa", "NEW", TokenDecimals::STANDARD, 5.0);
        assert_eq!(token.usd_value(&PriceMap::new()), None);
    }
}
