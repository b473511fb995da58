// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Nearest power-of-two exponent

/// Return the exponent `k` for which `2^k` is closest to `num` on a log scale.
///
/// Computed as `round(log2(num))`, with exact half-way values rounded away
/// from zero. Zero, negative and NaN inputs return `0`. Infinite input
/// saturates at [`i32::MAX`].
///
/// # Examples
///
/// ```
/// use alphapoint::closest_power_of_two;
///
/// assert_eq!(closest_power_of_two(1024.0), 10);
/// assert_eq!(closest_power_of_two(1000.0), 10);
/// assert_eq!(closest_power_of_two(0.25), -2);
/// assert_eq!(closest_power_of_two(0.0), 0);
/// assert_eq!(closest_power_of_two(-5.0), 0);
/// ```
pub fn closest_power_of_two(num: f64) -> i32 {
    if num.is_nan() || num <= 0.0 {
        tracing::trace!(num, "non-positive input, using exponent 0");
        return 0;
    }

    // `as` saturates, so +inf maps to i32::MAX
    num.log2().round() as i32
}
