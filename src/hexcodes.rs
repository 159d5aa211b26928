//! Hex code point helpers
//!
//! Small utilities for the `0000..10FFFF`-style hex values UCD files are
//! full of. Like the rest of the crate these are lenient: malformed input
//! is a `None`, never a panic.

/// Strips a leading `U+` (or `u+`) prefix from a hex value.
pub fn strip_hex(value: &str) -> &str {
    value
        .strip_prefix("U+")
        .or_else(|| value.strip_prefix("u+"))
        .unwrap_or(value)
}

/// Parses a hex value, with or without a `U+` prefix, into a code point.
///
/// No range validation is performed beyond fitting in a `u32`; this crate
/// recognizes syntactic shape only.
pub fn hex_to_codepoint(value: &str) -> Option<u32> {
    u32::from_str_radix(strip_hex(value), 16).ok()
}

/// Expands a `START..END` hex range into the inclusive list of code points.
///
/// Returns `None` for malformed bounds and for inverted ranges.
pub fn expand_hex_range(range: &str) -> Option<Vec<u32>> {
    let (start, end) = range.split_once("..")?;
    let start = hex_to_codepoint(start.trim())?;
    let end = hex_to_codepoint(end.trim())?;
    if start > end {
        return None;
    }
    Some((start..=end).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_the_prefix_only_when_present() {
        assert_eq!(strip_hex("U+0041"), "0041");
        assert_eq!(strip_hex("u+0041"), "0041");
        assert_eq!(strip_hex("0041"), "0041");
    }

    #[test]
    fn parses_code_points() {
        assert_eq!(hex_to_codepoint("0041"), Some(0x41));
        assert_eq!(hex_to_codepoint("U+10FFFF"), Some(0x10FFFF));
        assert_eq!(hex_to_codepoint("not-hex"), None);
        assert_eq!(hex_to_codepoint(""), None);
    }

    #[test]
    fn expands_ranges_inclusively() {
        assert_eq!(expand_hex_range("0041..0043"), Some(vec![0x41, 0x42, 0x43]));
        assert_eq!(expand_hex_range("10FFFF..10FFFF"), Some(vec![0x10FFFF]));
    }

    #[test]
    fn rejects_malformed_and_inverted_ranges() {
        assert_eq!(expand_hex_range("0041"), None);
        assert_eq!(expand_hex_range("0043..0041"), None);
        assert_eq!(expand_hex_range("..0041"), None);
        assert_eq!(expand_hex_range("0041..xyz"), None);
    }
}
