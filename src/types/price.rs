// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Token price lookup table

use std::collections::HashMap;

/// USD price per token, keyed by token address or symbol
///
/// Front ends typically key prices by contract address, falling back to the
/// ticker symbol for tokens without one. See [`crate::TokenInfo::price_in`]
/// for the lookup order.
pub type PriceMap = HashMap<String, f64>;

/// Look up a price by address, then lowercase address, then symbol.
///
/// Non-finite prices are treated as missing.
pub(crate) fn lookup_price(prices: &PriceMap, address: &str, symbol: &str) -> Option<f64> {
    let found = prices
        .get(address)
        .or_else(|| prices.get(&address.to_ascii_lowercase()))
        .or_else(|| prices.get(symbol))
        .copied();

    match found {
        Some(price) if price.is_finite() => Some(price),
        Some(price) => {
            tracing::debug!(address, symbol, price, "Ignoring non-finite token price");
            None
        }
        None => None,
    }
}
