// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! US-locale number rendering

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};

use super::options::{NumberFormatOptions, ResolvedNumberFormat};

const GROUP_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';
const INFINITY: &str = "∞";

/// Format a value in en-US style.
///
/// `None` and NaN render as `"0"`. Caller options are merged over
/// [`NumberFormatOptions::DEFAULTS`] (at most 2 fraction digits, grouping on).
///
/// The value's shortest round-trip decimal form is rounded half away from
/// zero, so `1.005` rounds to `1.01` even though the nearest `f64` lies just
/// below it.
///
/// # Examples
///
/// ```
/// use alphapoint::{format_number, NumberFormatOptions};
///
/// assert_eq!(format_number(Some(1234.567), None), "1,234.57");
/// assert_eq!(format_number(Some(-0.5), None), "-0.5");
/// assert_eq!(format_number(None, None), "0");
/// assert_eq!(format_number(Some(f64::NAN), None), "0");
///
/// let whole = NumberFormatOptions::new().maximum_fraction_digits(0);
/// assert_eq!(format_number(Some(1234.567), Some(&whole)), "1,235");
/// ```
pub fn format_number(value: Option<f64>, options: Option<&NumberFormatOptions>) -> String {
    let Some(value) = value.filter(|v| !v.is_nan()) else {
        tracing::trace!("missing or NaN value, formatting as 0");
        return "0".to_string();
    };

    let format = options.copied().unwrap_or_default().resolve();
    format.format(value)
}

/// Format a value with the default options.
///
/// ```
/// use alphapoint::format_number_default;
///
/// assert_eq!(format_number_default(1_000_000.0), "1,000,000");
/// ```
pub fn format_number_default(value: f64) -> String {
    format_number(Some(value), None)
}

impl ResolvedNumberFormat {
    /// Render `value` with these parameters.
    ///
    /// NaN renders as `"0"`, infinities as `∞` / `-∞`. The sign of negative
    /// zero is kept, so values that round to zero from below render as `-0`.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "0".to_string();
        }

        let sign = if value.is_sign_negative() { "-" } else { "" };
        if value.is_infinite() {
            return format!("{sign}{INFINITY}");
        }

        let (integer, mut fraction) = round_half_away(value.abs(), self.maximum_fraction_digits());

        let min_fraction = self.minimum_fraction_digits() as usize;
        while fraction.len() > min_fraction && fraction.ends_with('0') {
            fraction.pop();
        }

        let min_integer = self.minimum_integer_digits() as usize;
        let integer = if integer.len() < min_integer {
            format!("{}{integer}", "0".repeat(min_integer - integer.len()))
        } else {
            integer
        };

        let integer = if self.use_grouping() {
            group_thousands(&integer)
        } else {
            integer
        };

        if fraction.is_empty() {
            format!("{sign}{integer}")
        } else {
            format!("{sign}{integer}{DECIMAL_SEPARATOR}{fraction}")
        }
    }
}

/// Round a non-negative value to `scale` fraction digits, half away from zero.
///
/// Returns the integer digits and exactly `scale` fraction digits.
fn round_half_away(magnitude: f64, scale: u32) -> (String, String) {
    // `{:e}` on f64 prints the shortest representation that round-trips
    let shortest = format!("{magnitude:e}");
    let decimal = match BigDecimal::from_str(&shortest) {
        Ok(decimal) => decimal,
        Err(e) => {
            tracing::warn!(
                value = %shortest,
                error = %e,
                "Failed to parse value as decimal, formatting as 0"
            );
            BigDecimal::from(0)
        }
    };

    let rounded = decimal.with_scale_round(i64::from(scale), RoundingMode::HalfUp);
    let (digits, exponent) = rounded.as_bigint_and_exponent();
    let digits = digits.magnitude().to_string();

    if exponent <= 0 {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize);
        let integer = if digits == "0" {
            digits
        } else {
            format!("{digits}{zeros}")
        };
        return (integer, "0".repeat(scale as usize));
    }

    let exponent = exponent as usize;
    let digits = if digits.len() <= exponent {
        format!("{}{digits}", "0".repeat(exponent + 1 - digits.len()))
    } else {
        digits
    };
    let (integer, fraction) = digits.split_at(digits.len() - exponent);

    let mut fraction = fraction.to_string();
    let scale = scale as usize;
    if fraction.len() < scale {
        fraction.push_str(&"0".repeat(scale - fraction.len()));
    } else {
        fraction.truncate(scale);
    }

    (integer.to_string(), fraction)
}

/// Insert a separator between every group of three integer digits.
fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}
