// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Data shapes rendered by a wallet view.
//!
//! - Token legs and swap transactions ([`TokenInfo`], [`Transaction`])
//! - Watched wallets ([`Wallet`])
//! - USD price lookup ([`PriceMap`])
//! - Strong numeric newtypes for decimals, amounts and USD values

pub mod price;
pub mod tokens;
pub mod transaction;
pub mod wallet;

pub use price::PriceMap;
pub use tokens::{NormalizedAmount, TokenDecimals, UsdValue};
pub use transaction::{total_volume, TokenInfo, Transaction};
pub use wallet::Wallet;
