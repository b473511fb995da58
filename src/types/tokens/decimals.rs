// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token decimal precision type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::normalized::NormalizedAmount;

/// ERC-20 / BEP-20 token decimal precision
///
/// The number of decimal places between a token's on-chain integer amount
/// and its human-readable amount. Most BNB Smart Chain tokens, including
/// Binance-Peg USDT and USDC, use 18. Ethereum USDC uses 6 and WBTC uses 8.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use alphapoint::TokenDecimals;
///
/// // 1.5 tokens with 18 decimals
/// let raw = U256::from(1_500_000_000_000_000_000u64);
/// let amount = TokenDecimals::STANDARD.normalize(raw);
/// assert!((amount.as_f64() - 1.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenDecimals(u8);

impl Default for TokenDecimals {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TokenDecimals {
    /// Largest decimal count seen in practice
    pub const MAX_REASONABLE: u8 = 18;

    /// 18 decimals (BNB, ETH, and most BEP-20 tokens)
    pub const STANDARD: Self = Self(18);

    /// 6 decimals (USDC on Ethereum)
    pub const USDC: Self = Self(6);

    /// 8 decimals (WBTC)
    pub const WBTC: Self = Self(8);

    /// Create a new decimal precision value
    pub const fn new(decimals: u8) -> Self {
        Self(decimals)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// Whether the count is within 0-18
    ///
    /// Larger values are legal but usually point at bad token metadata.
    pub const fn is_reasonable(&self) -> bool {
        self.0 <= Self::MAX_REASONABLE
    }

    /// 10^decimals as f64
    pub fn divisor(&self) -> f64 {
        10_f64.powi(i32::from(self.0))
    }

    /// Convert an on-chain integer amount into a human-readable amount.
    ///
    /// Precision beyond f64 is lost, which is fine for display.
    pub fn normalize(&self, raw: U256) -> NormalizedAmount {
        // Via string so amounts above u128 still convert
        let raw_str = raw.to_string();
        let raw_f64 = raw_str.parse::<f64>().unwrap_or_else(|e| {
            tracing::warn!(
                amount = %raw,
                error = %e,
                "Failed to parse raw token amount to f64, using 0.0"
            );
            0.0
        });

        NormalizedAmount::new(raw_f64 / self.divisor())
    }
}

impl From<u8> for TokenDecimals {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for TokenDecimals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} decimals", self.0)
    }
}
