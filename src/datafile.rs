//! Parsed data file facade
//!
//! [RawDataFile] composes the whole engine over one input string: heading,
//! body content, line split, sections, declared file name/version and the
//! EOF flag, all computed eagerly at construction. Instances are immutable
//! and independent of each other, so callers can parse many files in
//! parallel without coordination.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::parse::filename::parse_file_name_line;
use crate::parse::heading::scan_heading;
use crate::parse::lines::is_eof_marker;
use crate::parse::sections::{parse_sections, Section};

/// Errors from [RawDataFile] construction.
///
/// Construction is the only fallible operation in the crate; every
/// heuristic miss elsewhere is an `Option`, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFileError {
    /// The input was empty or whitespace-only.
    EmptyContent,
}

impl fmt::Display for DataFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFileError::EmptyContent => write!(f, "content is empty"),
        }
    }
}

impl std::error::Error for DataFileError {}

/// One fully parsed UCD file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawDataFile {
    /// The full original text, untouched.
    pub raw_content: String,
    /// The body: raw content with the heading removed, trimmed. Equals the
    /// raw content verbatim when no heading was found.
    pub content: String,
    /// The body split on newlines.
    pub lines: Vec<String>,
    /// The heading comment block, when one was found.
    pub heading: Option<String>,
    /// Sections of the body, keyed by name in first-appearance order.
    pub sections: IndexMap<String, Section>,
    /// Declared file name: the caller's override when given, otherwise
    /// inferred from the first line.
    pub file_name: Option<String>,
    /// Version inferred from the first line, e.g. `"15.1.0"`.
    pub version: Option<String>,
    /// True when the last body line is the `# EOF` marker.
    pub has_eof: bool,
}

impl RawDataFile {
    /// Parses `raw` into a [RawDataFile], inferring the file name.
    pub fn new(raw: &str) -> Result<Self, DataFileError> {
        Self::with_file_name(raw, None)
    }

    /// Parses `raw`, letting the caller override the declared file name.
    pub fn with_file_name(raw: &str, file_name: Option<&str>) -> Result<Self, DataFileError> {
        if raw.trim().is_empty() {
            return Err(DataFileError::EmptyContent);
        }

        let scan = scan_heading(raw);
        let content = match scan.text {
            Some(_) => {
                let raw_lines: Vec<&str> = raw.split('\n').collect();
                let start = scan.end_line.min(raw_lines.len());
                raw_lines[start..].join("\n").trim().to_string()
            }
            None => raw.to_string(),
        };

        let lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        let sections = parse_sections(&content);

        let parsed_name = parse_file_name_line(raw);
        let file_name = file_name
            .map(str::to_string)
            .or_else(|| parsed_name.as_ref().map(|p| p.file_name.clone()));
        let version = parsed_name.and_then(|p| p.version);

        let has_eof = lines.last().is_some_and(|line| is_eof_marker(line));

        Ok(RawDataFile {
            raw_content: raw.to_string(),
            content,
            lines,
            heading: scan.text,
            sections,
            file_name,
            version,
            has_eof,
        })
    }
}
