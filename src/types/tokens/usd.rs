// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! USD value type

use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::number::{NumberFormatOptions, ResolvedNumberFormat};

/// A USD-denominated value
///
/// Kept distinct from plain `f64` so volumes and prices don't get mixed up
/// with token amounts or exponents.
///
/// # Examples
///
/// ```
/// use alphapoint::UsdValue;
///
/// let volume = UsdValue::new(1234.567);
/// assert_eq!(volume.format(2), "$1,234.57");
/// assert_eq!(volume.format(0), "$1,235");
/// assert_eq!(UsdValue::new(-42.0).format(2), "-$42.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdValue(f64);

impl UsdValue {
    /// Zero USD
    pub const ZERO: Self = Self(0.0);

    /// Create a new USD value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Whether the value is effectively zero
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// Absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Format with exactly `precision` fraction digits, grouped, `$`-prefixed
    pub fn format(&self, precision: u32) -> String {
        let options = NumberFormatOptions::new()
            .minimum_fraction_digits(precision)
            .maximum_fraction_digits(precision);
        self.format_with(&options)
    }

    /// Format with caller options merged over the formatter defaults
    ///
    /// The sign goes in front of the currency symbol. NaN renders as `$0`.
    pub fn format_with(&self, options: &NumberFormatOptions) -> String {
        let format: ResolvedNumberFormat = options.resolve();
        if self.0.is_nan() {
            return "$0".to_string();
        }

        let magnitude = format.format(self.0.abs());
        if self.0.is_sign_negative() {
            format!("-${magnitude}")
        } else {
            format!("${magnitude}")
        }
    }
}

impl From<f64> for UsdValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for UsdValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for UsdValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::iter::Sum for UsdValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for UsdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format(2))
    }
}
