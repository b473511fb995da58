// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Fixtures for alphapoint integration tests
//!
//! Builds the wallet and transaction records a front end would hand to the
//! display helpers.

use alphapoint::{TokenDecimals, TokenInfo, Transaction, UsdValue, Wallet};

pub const USDT: &str = "0x55d398326f99059fF775485246999027B3197955";
pub const CAKE: &str = "0x0E09FaBB73Bd3Ade0a17ECC321fD13a19e81cE82";
pub const WALLET: &str = "0x8894E0a0c962CB723c1976a4421c95949bE2D4E3";

/// A successful USDT → CAKE swap with the given USD volume
pub fn usdt_to_cake(hash_byte: u8, volume: f64) -> Transaction {
    Transaction {
        hash: format!("0x{}", format!("{hash_byte:02x}").repeat(32)),
        timestamp: 1_735_689_600,
        status: "success".to_string(),
        gas: 145_322.0,
        from: TokenInfo::new(USDT, "USDT", TokenDecimals::STANDARD, volume),
        to: TokenInfo::new(CAKE, "CAKE", TokenDecimals::STANDARD, volume / 2.4),
        volume_usd: UsdValue::new(volume),
    }
}

/// A labelled and an unlabelled wallet
pub fn wallets() -> Vec<Wallet> {
    vec![Wallet::new(WALLET, "Trading"), Wallet::new(USDT, "")]
}
