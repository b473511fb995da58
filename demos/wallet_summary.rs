// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Renders a small wallet history the way a wallet view would
//!
//! Reads an optional JSON transaction list from the first argument; falls
//! back to a built-in sample. Run with `RUST_LOG=alphapoint=trace` to see
//! the formatter's fallback logging.
//!
//! ```sh
//! cargo run --example wallet_summary -- history.json
//! ```

use alloy_chains::NamedChain;
use alphapoint::{
    config::constants::stablecoins, total_volume, DisplayConfigBuilder, PriceMap, TokenDecimals,
    TokenInfo, Transaction, UsdValue, Wallet,
};
use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn sample_history() -> Vec<Transaction> {
    let usdt = stablecoins::BSC_USDT.to_checksum(None);
    let usdc = stablecoins::BSC_BINANCE_PEG_USDC.to_checksum(None);

    [(0x1a, 1_024.0), (0x2b, 2_999.99), (0x3c, 12_345.678)]
        .into_iter()
        .map(|(byte, volume): (u8, f64)| Transaction {
            hash: format!("0x{}", format!("{byte:02x}").repeat(32)),
            timestamp: 1_735_689_600 + u64::from(byte) * 60,
            status: "success".to_string(),
            gas: 98_000.0 + f64::from(byte) * 10.0,
            from: TokenInfo::new(&usdt, "USDT", TokenDecimals::STANDARD, volume),
            to: TokenInfo::new(&usdc, "USDC", TokenDecimals::STANDARD, volume * 0.9998),
            volume_usd: UsdValue::new(volume),
        })
        .collect()
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let history = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("Failed to parse {path}"))?
        }
        None => sample_history(),
    };

    let config = DisplayConfigBuilder::with_defaults()
        .chain(NamedChain::BinanceSmartChain)
        .try_build()?;
    let wallet = Wallet::new("0x8894E0a0c962CB723c1976a4421c95949bE2D4E3", "Alpha");
    let prices = PriceMap::from([("USDT".to_string(), 1.0), ("USDC".to_string(), 0.9999)]);

    println!(
        "{} ({})",
        wallet.display_name(&config),
        wallet.explorer_url(&config.explorer)
    );
    println!();

    for tx in &history {
        let when = tx
            .datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let received = tx
            .to
            .usd_value(&prices)
            .map(|value| config.format_usd(value))
            .unwrap_or_else(|| "unpriced".to_string());

        println!(
            "{when}  {}  {} -> {} ({received})  volume {}  tier {}",
            tx.short_hash(&config),
            tx.from.format_amount(&config),
            tx.to.format_amount(&config),
            config.format_usd(tx.volume_usd),
            tx.volume_tier(),
        );
        println!("    {}", tx.explorer_url(&config.explorer));
    }

    println!();
    println!(
        "Total volume: {}",
        config.format_usd(total_volume(&history))
    );

    Ok(())
}
