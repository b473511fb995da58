// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the display helpers
//!
//! These tests use proptest to check the helpers' invariants over arbitrary
//! strings, widths and values.

use alphapoint::{
    closest_power_of_two, explorer_address_url, explorer_tx_url, format_number, is_valid_address,
    shorten_address, NumberFormatOptions,
};
use proptest::prelude::*;

proptest! {
    /// Property: strings that fit in start + end characters come back unchanged
    #[test]
    fn prop_short_input_is_unchanged(
        input in "\\PC{0,20}",
        start in 0usize..=12,
        end in 0usize..=12,
    ) {
        prop_assume!(input.chars().count() <= start + end);
        prop_assert_eq!(shorten_address(&input, start, end), input);
    }

    /// Property: longer strings keep exactly start + end characters plus the ellipsis
    #[test]
    fn prop_long_input_is_head_ellipsis_tail(
        input in "\\PC{1,80}",
        start in 0usize..=12,
        end in 0usize..=12,
    ) {
        let chars: Vec<char> = input.chars().collect();
        prop_assume!(chars.len() > start + end);

        let shortened = shorten_address(&input, start, end);
        let head: String = chars[..start].iter().collect();
        let tail: String = chars[chars.len() - end..].iter().collect();
        let expected = format!("{head}...{tail}");

        prop_assert_eq!(shortened.chars().count(), start + end + 3);
        prop_assert_eq!(shortened, expected);
    }

    /// Property: the exponent is within half a step of log2 of the input
    #[test]
    fn prop_power_of_two_is_nearest(num in 1e-300f64..1e300) {
        let exponent = closest_power_of_two(num);
        prop_assert!((num.log2() - f64::from(exponent)).abs() <= 0.5);
    }

    /// Property: non-positive input always maps to exponent 0
    #[test]
    fn prop_non_positive_is_zero(num in -1e300f64..=0.0) {
        prop_assert_eq!(closest_power_of_two(num), 0);
    }

    /// Property: default formatting stays within half a cent of the input
    #[test]
    fn prop_default_format_is_close(value in -1e12f64..1e12) {
        let formatted = format_number(Some(value), None);
        let parsed: f64 = formatted.replace(',', "").parse().unwrap();
        prop_assert!((parsed - value).abs() <= 0.005 + value.abs() * 1e-12);

        if let Some((_, fraction)) = formatted.split_once('.') {
            prop_assert!(fraction.len() <= 2);
            prop_assert!(!fraction.ends_with('0'));
        }
    }

    /// Property: thousands groups after the first always hold three digits
    #[test]
    fn prop_grouping_is_well_formed(value in 0f64..1e15) {
        let formatted = format_number(Some(value), None);
        let integer = formatted.split('.').next().unwrap();
        let groups: Vec<&str> = integer.split(',').collect();

        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
    }

    /// Property: minimum fraction digits always pad to the requested width
    #[test]
    fn prop_fixed_fraction_width(value in -1e9f64..1e9, digits in 0u32..=8) {
        let options = NumberFormatOptions::new()
            .minimum_fraction_digits(digits)
            .maximum_fraction_digits(digits);
        let formatted = format_number(Some(value), Some(&options));
        let fraction_len = formatted.split_once('.').map_or(0, |(_, f)| f.len());
        prop_assert_eq!(fraction_len, digits as usize);
    }

    /// Property: 0x plus 40 hex digits of any case is valid
    #[test]
    fn prop_hex_addresses_are_valid(hex in "[0-9a-fA-F]{40}") {
        let address = format!("0x{hex}");
        prop_assert!(is_valid_address(&address));
        let upper_prefix = format!("0X{hex}");
        prop_assert!(!is_valid_address(&upper_prefix));
    }

    /// Property: any other hex length is rejected
    #[test]
    fn prop_wrong_length_is_invalid(hex in "[0-9a-f]{0,80}") {
        prop_assume!(hex.len() != 40);
        let address = format!("0x{hex}");
        prop_assert!(!is_valid_address(&address));
    }

    /// Property: explorer links interpolate the identifier verbatim
    #[test]
    fn prop_explorer_links_are_verbatim(id in "\\PC{0,40}") {
        prop_assert_eq!(explorer_address_url(&id), format!("https://bscscan.com/address/{id}"));
        prop_assert_eq!(explorer_tx_url(&id), format!("https://bscscan.com/tx/{id}"));
    }
}
