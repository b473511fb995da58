// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for number formatting options.

/// Errors reported by [`crate::NumberFormatOptions::validate`].
///
/// [`crate::format_number`] itself never fails: it clamps the same
/// conditions and logs a warning. Validation is for callers, such as
/// [`crate::DisplayConfigBuilder::try_build`], that would rather reject a
/// bad configuration up front.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatOptionsError {
    /// A digit count is outside the range the formatter supports.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending option
        field: &'static str,
        /// The rejected value
        value: u32,
        /// Smallest accepted value
        min: u32,
        /// Largest accepted value
        max: u32,
    },

    /// `minimum_fraction_digits` is greater than `maximum_fraction_digits`.
    #[error("minimum_fraction_digits ({minimum}) exceeds maximum_fraction_digits ({maximum})")]
    FractionDigitsInverted {
        /// Effective minimum fraction digits
        minimum: u32,
        /// Effective maximum fraction digits
        maximum: u32,
    },
}

impl FormatOptionsError {
    /// Create an `OutOfRange` error for a named option.
    pub fn out_of_range(field: &'static str, value: u32, min: u32, max: u32) -> Self {
        FormatOptionsError::OutOfRange {
            field,
            value,
            min,
            max,
        }
    }
}
