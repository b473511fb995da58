// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known addresses and explorer base URLs
//!
//! This module centralizes magic constants used throughout the crate.

/// Etherscan-family explorer base URLs, without trailing slash
pub mod explorers {
    /// BscScan (BNB Smart Chain)
    pub const BSCSCAN: &str = "https://bscscan.com";

    /// BscScan for the BNB Smart Chain testnet
    pub const BSCSCAN_TESTNET: &str = "https://testnet.bscscan.com";

    /// Etherscan (Ethereum Mainnet)
    pub const ETHERSCAN: &str = "https://etherscan.io";

    /// Arbiscan (Arbitrum One)
    pub const ARBISCAN: &str = "https://arbiscan.io";

    /// Basescan (Base)
    pub const BASESCAN: &str = "https://basescan.org";

    /// Optimistic Etherscan (OP Mainnet)
    pub const OPTIMISTIC_ETHERSCAN: &str = "https://optimistic.etherscan.io";

    /// Polygonscan (Polygon PoS)
    pub const POLYGONSCAN: &str = "https://polygonscan.com";
}

/// Well-known stablecoin addresses on BNB Smart Chain
pub mod stablecoins {
    use alloy_primitives::{address, Address};

    /// Binance-Peg BSC-USD (USDT)
    ///
    /// Contract: 0x55d398326f99059fF775485246999027B3197955
    pub const BSC_USDT: Address = address!("55d398326f99059ff775485246999027b3197955");

    /// Binance-Peg USDC
    ///
    /// Contract: 0x8AC76a51cc950d9822D68b83fE1Ad97B32Cd580d
    pub const BSC_BINANCE_PEG_USDC: Address = address!("8ac76a51cc950d9822d68b83fe1ad97b32cd580d");
}
