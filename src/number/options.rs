// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Number formatting options

use serde::{Deserialize, Serialize};

use crate::errors::FormatOptionsError;

/// Caller-facing formatting options for [`crate::format_number`].
///
/// Every field is optional. Unset fields fall back to
/// [`NumberFormatOptions::DEFAULTS`]; set fields win, one field at a time.
/// The JSON form uses the same camelCase names as browser locale
/// formatters, so options stored by a web front end deserialize directly.
///
/// # Examples
///
/// ```
/// use alphapoint::{format_number, NumberFormatOptions};
///
/// let whole = NumberFormatOptions::new().maximum_fraction_digits(0);
/// assert_eq!(format_number(Some(1234.567), Some(&whole)), "1,235");
///
/// let padded = NumberFormatOptions::new().minimum_fraction_digits(2);
/// assert_eq!(format_number(Some(5.0), Some(&padded)), "5.00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormatOptions {
    /// Left-pad the integer part with zeros to at least this many digits (1-21)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_integer_digits: Option<u32>,

    /// Always show at least this many fraction digits (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_fraction_digits: Option<u32>,

    /// Round to at most this many fraction digits (0-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_fraction_digits: Option<u32>,

    /// Insert `,` between thousands groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_grouping: Option<bool>,
}

impl NumberFormatOptions {
    /// Largest supported fraction digit count
    pub const MAX_FRACTION_DIGITS: u32 = 100;

    /// Largest supported minimum integer digit count
    pub const MAX_INTEGER_DIGITS: u32 = 21;

    /// Defaults applied under any caller-supplied options
    ///
    /// At most 2 fraction digits, no forced fraction digits, at least one
    /// integer digit, thousands grouping on.
    pub const DEFAULTS: Self = Self {
        minimum_integer_digits: Some(1),
        minimum_fraction_digits: Some(0),
        maximum_fraction_digits: Some(2),
        use_grouping: Some(true),
    };

    /// Empty option set (everything falls back to defaults)
    pub const fn new() -> Self {
        Self {
            minimum_integer_digits: None,
            minimum_fraction_digits: None,
            maximum_fraction_digits: None,
            use_grouping: None,
        }
    }

    /// Set `minimum_integer_digits`
    pub const fn minimum_integer_digits(mut self, digits: u32) -> Self {
        self.minimum_integer_digits = Some(digits);
        self
    }

    /// Set `minimum_fraction_digits`
    pub const fn minimum_fraction_digits(mut self, digits: u32) -> Self {
        self.minimum_fraction_digits = Some(digits);
        self
    }

    /// Set `maximum_fraction_digits`
    pub const fn maximum_fraction_digits(mut self, digits: u32) -> Self {
        self.maximum_fraction_digits = Some(digits);
        self
    }

    /// Set `use_grouping`
    pub const fn use_grouping(mut self, grouping: bool) -> Self {
        self.use_grouping = Some(grouping);
        self
    }

    /// Shallow merge: fields set on `self` win, the rest come from `base`.
    ///
    /// ```
    /// use alphapoint::NumberFormatOptions;
    ///
    /// let merged = NumberFormatOptions::new()
    ///     .maximum_fraction_digits(0)
    ///     .merged_over(&NumberFormatOptions::DEFAULTS);
    /// assert_eq!(merged.maximum_fraction_digits, Some(0));
    /// assert_eq!(merged.use_grouping, Some(true));
    /// ```
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            minimum_integer_digits: self.minimum_integer_digits.or(base.minimum_integer_digits),
            minimum_fraction_digits: self
                .minimum_fraction_digits
                .or(base.minimum_fraction_digits),
            maximum_fraction_digits: self
                .maximum_fraction_digits
                .or(base.maximum_fraction_digits),
            use_grouping: self.use_grouping.or(base.use_grouping),
        }
    }

    /// Check the options, merged over the defaults, without clamping.
    ///
    /// # Errors
    ///
    /// Returns [`FormatOptionsError::OutOfRange`] for digit counts outside the
    /// supported ranges and [`FormatOptionsError::FractionDigitsInverted`]
    /// when the minimum fraction digits exceed the maximum. Note that a lone
    /// `minimum_fraction_digits` above the default maximum of 2 is inverted.
    pub fn validate(&self) -> Result<(), FormatOptionsError> {
        let merged = self.merged_over(&Self::DEFAULTS);
        let (min_int, min_frac, max_frac) = merged.raw_digits();

        if !(1..=Self::MAX_INTEGER_DIGITS).contains(&min_int) {
            return Err(FormatOptionsError::out_of_range(
                "minimum_integer_digits",
                min_int,
                1,
                Self::MAX_INTEGER_DIGITS,
            ));
        }
        if min_frac > Self::MAX_FRACTION_DIGITS {
            return Err(FormatOptionsError::out_of_range(
                "minimum_fraction_digits",
                min_frac,
                0,
                Self::MAX_FRACTION_DIGITS,
            ));
        }
        if max_frac > Self::MAX_FRACTION_DIGITS {
            return Err(FormatOptionsError::out_of_range(
                "maximum_fraction_digits",
                max_frac,
                0,
                Self::MAX_FRACTION_DIGITS,
            ));
        }
        if min_frac > max_frac {
            return Err(FormatOptionsError::FractionDigitsInverted {
                minimum: min_frac,
                maximum: max_frac,
            });
        }

        Ok(())
    }

    /// Merge over the defaults and clamp into a usable format.
    ///
    /// Out-of-range digit counts are clamped, and a minimum above the maximum
    /// raises the maximum. Each adjustment is logged at `warn`.
    pub fn resolve(&self) -> ResolvedNumberFormat {
        let merged = self.merged_over(&Self::DEFAULTS);
        let (min_int, min_frac, max_frac) = merged.raw_digits();

        let minimum_integer_digits = min_int.clamp(1, Self::MAX_INTEGER_DIGITS);
        let minimum_fraction_digits = min_frac.min(Self::MAX_FRACTION_DIGITS);
        let mut maximum_fraction_digits = max_frac.min(Self::MAX_FRACTION_DIGITS);

        if minimum_integer_digits != min_int
            || minimum_fraction_digits != min_frac
            || maximum_fraction_digits != max_frac
        {
            tracing::warn!(
                minimum_integer_digits = min_int,
                minimum_fraction_digits = min_frac,
                maximum_fraction_digits = max_frac,
                "Number format digits out of range, clamping"
            );
        }

        if minimum_fraction_digits > maximum_fraction_digits {
            tracing::warn!(
                minimum_fraction_digits,
                maximum_fraction_digits,
                "minimum_fraction_digits exceeds maximum, raising maximum"
            );
            maximum_fraction_digits = minimum_fraction_digits;
        }

        ResolvedNumberFormat {
            minimum_integer_digits,
            minimum_fraction_digits,
            maximum_fraction_digits,
            use_grouping: merged.use_grouping.unwrap_or(true),
        }
    }

    fn raw_digits(&self) -> (u32, u32, u32) {
        (
            self.minimum_integer_digits.unwrap_or(1),
            self.minimum_fraction_digits.unwrap_or(0),
            self.maximum_fraction_digits.unwrap_or(2),
        )
    }
}

/// Fully resolved, in-range formatting parameters.
///
/// Produced by [`NumberFormatOptions::resolve`]. Guarantees
/// `minimum_fraction_digits <= maximum_fraction_digits <= 100` and
/// `1 <= minimum_integer_digits <= 21`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedNumberFormat {
    minimum_integer_digits: u32,
    minimum_fraction_digits: u32,
    maximum_fraction_digits: u32,
    use_grouping: bool,
}

impl ResolvedNumberFormat {
    /// Minimum integer digits
    pub const fn minimum_integer_digits(&self) -> u32 {
        self.minimum_integer_digits
    }

    /// Minimum fraction digits
    pub const fn minimum_fraction_digits(&self) -> u32 {
        self.minimum_fraction_digits
    }

    /// Maximum fraction digits
    pub const fn maximum_fraction_digits(&self) -> u32 {
        self.maximum_fraction_digits
    }

    /// Thousands grouping
    pub const fn use_grouping(&self) -> bool {
        self.use_grouping
    }
}

impl Default for ResolvedNumberFormat {
    fn default() -> Self {
        NumberFormatOptions::DEFAULTS.resolve()
    }
}
