// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the public display helpers
//!
//! Covers the documented examples for each helper and a wallet-view flow
//! that combines them.

mod helpers;

use alloy_chains::NamedChain;
use alphapoint::{
    closest_power_of_two, explorer_address_url, explorer_tx_url, format_number, is_valid_address,
    shorten_address, shorten_address_default, total_volume, AlphaPointError, DisplayConfig,
    DisplayConfigBuilder, Explorer, NumberFormatOptions, PriceMap, Transaction,
};
use helpers::{usdt_to_cake, wallets, CAKE, USDT, WALLET};

#[test]
fn test_shorten_address_examples() {
    assert_eq!(shorten_address("", 6, 4), "");
    assert_eq!(shorten_address("0x1234", 6, 4), "0x1234");
    assert_eq!(shorten_address_default(WALLET), "0x8894...D4E3");
    assert_eq!(shorten_address(WALLET, 10, 8).chars().count(), 21);
}

#[test]
fn test_closest_power_of_two_examples() {
    assert_eq!(closest_power_of_two(0.0), 0);
    assert_eq!(closest_power_of_two(-5.0), 0);
    assert_eq!(closest_power_of_two(1024.0), 10);
    assert_eq!(closest_power_of_two(1000.0), 10);
}

#[test]
fn test_format_number_examples() {
    assert_eq!(format_number(None, None), "0");
    assert_eq!(format_number(Some(f64::NAN), None), "0");
    assert_eq!(format_number(Some(1234.567), None), "1,234.57");

    let whole = NumberFormatOptions::new().maximum_fraction_digits(0);
    assert_eq!(format_number(Some(1234.567), Some(&whole)), "1,235");
}

#[test]
fn test_explorer_examples() {
    assert_eq!(
        explorer_address_url("0xABC"),
        "https://bscscan.com/address/0xABC"
    );
    assert_eq!(explorer_tx_url("0xdef"), "https://bscscan.com/tx/0xdef");
}

#[test]
fn test_is_valid_address_examples() {
    assert!(is_valid_address(&format!("0x{}", "a".repeat(40))));
    assert!(!is_valid_address(&format!("0x{}", "a".repeat(39))));
    assert!(!is_valid_address(""));
    assert!(!is_valid_address(&format!("0X{}", "a".repeat(40))));
}

#[test]
fn test_wallet_view_rows() {
    let config = DisplayConfig::default();
    let prices = PriceMap::from([(USDT.to_lowercase(), 1.0), ("CAKE".to_string(), 2.4)]);

    let tx = usdt_to_cake(0xab, 2_500.0);
    assert_eq!(tx.short_hash(&config), "0xabab...abab");
    assert_eq!(tx.from.format_amount(&config), "2,500 USDT");
    assert_eq!(tx.to.format_amount(&config), "1,041.67 CAKE");
    assert_eq!(config.format_usd(tx.volume_usd), "$2,500.00");
    assert_eq!(tx.volume_tier(), 11);

    let from_value = tx.from.usd_value(&prices).unwrap();
    let to_value = tx.to.usd_value(&prices).unwrap();
    assert_eq!(config.format_usd(from_value), "$2,500.00");
    assert_eq!(config.format_usd(to_value), "$2,500.00");
    assert_eq!(
        tx.explorer_url(&config.explorer),
        format!("https://bscscan.com/tx/{}", tx.hash)
    );
    assert_eq!(
        Explorer::bscscan().token_url(CAKE),
        format!("https://bscscan.com/token/{CAKE}")
    );
}

#[test]
fn test_wallet_list() {
    let config = DisplayConfig::default();
    let names: Vec<String> = wallets()
        .iter()
        .filter(|wallet| wallet.is_valid())
        .map(|wallet| wallet.display_name(&config))
        .collect();
    assert_eq!(names, vec!["Trading".to_string(), "0x55d3...7955".to_string()]);
}

#[test]
fn test_history_totals() {
    let history: Vec<Transaction> = (1..=4)
        .map(|i| usdt_to_cake(i, 512.0 * f64::from(i)))
        .collect();
    let total = total_volume(&history);
    assert_eq!(total.format(2), "$5,120.00");
    assert_eq!(closest_power_of_two(total.as_f64()), 12);
    assert!(history.iter().all(Transaction::has_valid_hash));
}

#[test]
fn test_history_round_trips_through_json() -> anyhow::Result<()> {
    let history = vec![usdt_to_cake(1, 10.0), usdt_to_cake(2, 20.0)];
    let json = serde_json::to_string(&history)?;
    assert!(json.contains("\"volumeUSD\":10.0"));

    let parsed: Vec<Transaction> = serde_json::from_str(&json)?;
    assert_eq!(parsed, history);
    Ok(())
}

#[test]
fn test_config_errors_unify() {
    fn load(address: &str, digits: u32) -> Result<DisplayConfig, AlphaPointError> {
        alphapoint::parse_address(address)?;
        Ok(DisplayConfigBuilder::with_defaults()
            .chain(NamedChain::BinanceSmartChain)
            .maximum_fraction_digits(digits)
            .try_build()?)
    }

    assert!(load(WALLET, 4).is_ok());
    assert!(matches!(load("0xnope", 4), Err(AlphaPointError::Address(_))));
    assert!(matches!(
        load(WALLET, 200),
        Err(AlphaPointError::FormatOptions(_))
    ));
}
