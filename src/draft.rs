//! Draft version extraction
//!
//! The Unicode draft `ReadMe.txt` announces the version under review in
//! prose. This module extracts that version token from the readme body.
//! Fetching the readme is the caller's job; this side is a pure
//! string-to-optional-version function so it stays testable offline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Most explicit phrasing, e.g. "Version 17.0.0 of the Unicode Standard".
static EXPLICIT_VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Version (\d+\.\d+(?:\.\d+)?) of the Unicode Standard").unwrap());

/// Version token embedded in a URL, e.g. ".../versions/Unicode17.0.0/".
static URL_VERSION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Unicode(\d+\.\d+(?:\.\d+)?)").unwrap());

/// Bare "Version major.minor" fallback.
static BARE_VERSION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Version (\d+\.\d+)").unwrap());

/// Extracts the draft Unicode version from a readme body.
///
/// Patterns are tried from most to least explicit. The bare
/// `Version major.minor` form must not be followed by a third dotted
/// component; candidates that continue with `.digit` are skipped so a
/// `major.minor.patch` mention is never half-captured.
pub fn extract_draft_version(readme: &str) -> Option<String> {
    for pattern in [&EXPLICIT_VERSION_REGEX, &URL_VERSION_REGEX] {
        if let Some(caps) = pattern.captures(readme) {
            if let Some(version) = caps.get(1) {
                return Some(version.as_str().to_string());
            }
        }
    }

    for caps in BARE_VERSION_REGEX.captures_iter(readme) {
        let version = match caps.get(1) {
            Some(m) => m,
            None => continue,
        };
        let after = &readme[version.end()..];
        let continues_dotted = after.starts_with('.')
            && after[1..].starts_with(|c: char| c.is_ascii_digit());
        if !continues_dotted {
            return Some(version.as_str().to_string());
        }
    }

    None
}
