// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Human-readable token amount type

use serde::{Deserialize, Serialize};
use std::ops::Add;

use super::usd::UsdValue;
use crate::number::{format_number, NumberFormatOptions};

/// Token amount after dividing by 10^decimals
///
/// For example 1.5 BNB rather than 1.5e18 wei.
///
/// # Invariant
///
/// Never negative: construction clamps negative input to zero and
/// subtraction saturates at zero. NaN input is stored as zero.
///
/// # Examples
///
/// ```
/// use alphapoint::{NormalizedAmount, UsdValue};
///
/// let amount = NormalizedAmount::new(1.5);
/// assert_eq!(amount.to_usd(600.0), UsdValue::new(900.0));
/// assert_eq!(NormalizedAmount::new(-5.0).as_f64(), 0.0);
/// assert_eq!(NormalizedAmount::new(12345.678912).to_string(), "12,345.678912");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct NormalizedAmount(f64);

impl NormalizedAmount {
    /// Zero
    pub const ZERO: Self = Self(0.0);

    /// Fraction digits used by the `Display` impl
    pub const DISPLAY_FRACTION_DIGITS: u32 = 6;

    /// Create a new normalized amount, clamping negatives and NaN to zero
    pub fn new(amount: f64) -> Self {
        // NaN and -0.0 both fail the comparison
        Self(if amount > 0.0 { amount } else { 0.0 })
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Value in USD at `price_per_token`
    pub fn to_usd(&self, price_per_token: f64) -> UsdValue {
        UsdValue::new(self.0 * price_per_token)
    }

    /// Whether the amount is effectively zero
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// Format with caller options merged over the formatter defaults
    pub fn format_with(&self, options: &NumberFormatOptions) -> String {
        format_number(Some(self.0), Some(options))
    }
}

impl From<f64> for NormalizedAmount {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<NormalizedAmount> for f64 {
    fn from(value: NormalizedAmount) -> Self {
        value.0
    }
}

impl Add for NormalizedAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for NormalizedAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self((self.0 - rhs.0).max(0.0))
    }
}

impl std::iter::Sum for NormalizedAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for NormalizedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let options =
            NumberFormatOptions::new().maximum_fraction_digits(Self::DISPLAY_FRACTION_DIGITS);
        f.write_str(&self.format_with(&options))
    }
}
