//! File name and version inference
//!
//! The first line of most UCD files declares the file itself, e.g.
//!
//! ```text
//! # ArabicShaping-5.0.0.txt
//! ```
//!
//! This module parses that line into the declared name and optional dotted
//! version. Only line 0 of the input is ever considered, so the whole file
//! content can be passed directly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::parse::lines::is_comment_line;

static COMMENT_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*").unwrap());

/// `Name`, optional `-1.2.3` version, `.txt` suffix.
static FILE_NAME_TXT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)(?:-([0-9.]+))?\.txt$").unwrap());

/// Fallback without the `.txt` suffix.
static FILE_NAME_BARE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)(?:-([0-9.]+))?$").unwrap());

/// A declared file name with its optional version, parsed from line 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedFileName {
    pub file_name: String,
    pub version: Option<String>,
}

/// Parses the first line of a UCD file into a [ParsedFileName].
///
/// The line must be a comment line; the comment marker and surrounding
/// whitespace are stripped before matching. Handled shapes:
///
/// ```text
/// # UnicodeData-14.0.0.txt   ->  name "UnicodeData", version "14.0.0"
/// # ArabicShaping.txt        ->  name "ArabicShaping", no version
/// # NameWithoutVersion       ->  name "NameWithoutVersion", no version
/// ```
///
/// The name segment must be non-empty after trimming; otherwise the whole
/// parse is `None` rather than a partial result. The version, when present,
/// is the raw dotted-numeric string with no semantic validation.
pub fn parse_file_name_line(input: &str) -> Option<ParsedFileName> {
    let line = input.split('\n').next().unwrap_or("").trim();

    if !is_comment_line(line) {
        return None;
    }

    let rest = COMMENT_PREFIX_REGEX.replace(line, "");
    if rest.is_empty() {
        return None;
    }

    let caps = FILE_NAME_TXT_REGEX
        .captures(&rest)
        .or_else(|| FILE_NAME_BARE_REGEX.captures(&rest))?;

    let file_name = caps.get(1).map_or("", |m| m.as_str());
    if file_name.trim().is_empty() {
        return None;
    }

    Some(ParsedFileName {
        file_name: file_name.to_string(),
        version: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

/// Infers just the file name from the first line, e.g. `"UnicodeData"`
/// from `# UnicodeData-14.0.0.txt`.
pub fn infer_file_name(input: &str) -> Option<String> {
    parse_file_name_line(input).map(|parsed| parsed.file_name)
}

/// Infers just the version from the first line, e.g. `"14.0.0"` from
/// `# UnicodeData-14.0.0.txt`.
pub fn infer_version(input: &str) -> Option<String> {
    parse_file_name_line(input).and_then(|parsed| parsed.version)
}
