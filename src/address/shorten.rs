// SPDX-FileCopyrightText: 2026 Alpha Point Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Compact display form for long identifiers

/// Number of leading characters kept by [`shorten_address_default`]
pub const DEFAULT_SHORTEN_START: usize = 6;

/// Number of trailing characters kept by [`shorten_address_default`]
pub const DEFAULT_SHORTEN_END: usize = 4;

const ELLIPSIS: &str = "...";

/// Shorten an identifier to `start` leading and `end` trailing characters.
///
/// Empty input yields an empty string. Input that already fits in
/// `start + end` characters is returned unchanged. Any string is accepted;
/// no hex validation takes place. Widths count characters, not bytes, so
/// multi-byte input never splits a code point.
///
/// # Examples
///
/// ```
/// use alphapoint::shorten_address;
///
/// let address = "0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d";
/// assert_eq!(shorten_address(address, 6, 4), "0x8ac7...580d");
/// assert_eq!(shorten_address(address, 4, 0), "0x8a...");
/// assert_eq!(shorten_address("0xabc", 6, 4), "0xabc");
/// assert_eq!(shorten_address("", 6, 4), "");
/// ```
pub fn shorten_address(address: &str, start: usize, end: usize) -> String {
    if address.is_empty() {
        return String::new();
    }

    let len = address.chars().count();
    if len <= start.saturating_add(end) {
        return address.to_string();
    }

    let mut shortened = String::with_capacity(start + end + ELLIPSIS.len());
    shortened.extend(address.chars().take(start));
    shortened.push_str(ELLIPSIS);
    // len > start + end, so the skip leaves exactly `end` characters
    shortened.extend(address.chars().skip(len - end));
    shortened
}

/// Shorten with the default widths (6 leading, 4 trailing).
///
/// ```
/// use alphapoint::shorten_address_default;
///
/// assert_eq!(
///     shorten_address_default("0x55d398326f99059ff775485246999027b3197955"),
///     "0x55d3...7955"
/// );
/// ```
pub fn shorten_address_default(address: &str) -> String {
    shorten_address(address, DEFAULT_SHORTEN_START, DEFAULT_SHORTEN_END)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0x8ac76a51cc950d9822d68b83fe1ad97b32cd580d";

    #[test]
    fn test_shorten_default_widths() {
        assert_eq!(shorten_address_default(ADDRESS), "0x8ac7...580d");
    }

    #[test]
    fn test_shorten_empty_returns_empty() {
        assert_eq!(shorten_address("", 6, 4), "");
        assert_eq!(shorten_address("", 0, 0), "");
    }

    #[test]
    fn test_shorten_exact_fit_is_unchanged() {
        assert_eq!(shorten_address("0123456789", 6, 4), "0123456789");
        assert_eq!(shorten_address("012345678", 6, 4), "012345678");
    }

    #[test]
    fn test_shorten_one_past_fit() {
        assert_eq!(shorten_address("0123456789a", 6, 4), "012345...789a");
    }

    #[test]
    fn test_shorten_zero_widths() {
        assert_eq!(shorten_address(ADDRESS, 0, 4), "...580d");
        assert_eq!(shorten_address(ADDRESS, 6, 0), "0x8ac7...");
        assert_eq!(shorten_address(ADDRESS, 0, 0), "...");
    }

    #[test]
    fn test_shorten_huge_widths_do_not_overflow() {
        assert_eq!(shorten_address(ADDRESS, usize::MAX, usize::MAX), ADDRESS);
    }

    #[test]
    fn test_shorten_accepts_non_hex() {
        assert_eq!(shorten_address("hello, wonderful world", 5, 5), "hello...world");
    }

    #[test]
    fn test_shorten_multibyte_characters() {
        let input = "ααααααββββββγγγγ";
        assert_eq!(shorten_address(input, 2, 2), "αα...γγ");
    }
}
