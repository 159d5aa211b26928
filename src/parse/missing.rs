//! `@missing` directive parsing
//!
//! UCD files declare the default property value for code points they do not
//! list explicitly through directive lines of the form
//!
//! ```text
//! # @missing: 0000..10FFFF; NFD_QC; Yes
//! ```
//!
//! with the property name omitted when the file covers a single property.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::parse::lines::is_missing_annotation_line;

/// `# @missing: START..END; X[; Y]` with uppercase hex bounds.
static MISSING_ANNOTATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^# @missing: ([0-9A-F]+)\.\.([0-9A-F]+); ([^;\n]+)(?:; ([^\n]+))?$").unwrap()
});

/// Special default values with a reserved meaning.
///
/// - `None`: no value is defined
/// - `Script`: the value equals the Script property value of the code point
/// - `CodePoint`: the string representation of the code point itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpecialTag {
    None,
    Script,
    CodePoint,
}

const MISSING_ANNOTATION_SPECIAL_TAGS: &[(&str, SpecialTag)] = &[
    ("<none>", SpecialTag::None),
    ("<script>", SpecialTag::Script),
    ("<code-point>", SpecialTag::CodePoint),
];

/// A parsed `@missing` directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingAnnotation {
    /// Start of the code point range, as the raw hex digit run.
    pub start: String,
    /// End of the code point range, as the raw hex digit run.
    pub end: String,
    /// Property name, present only in the three-field form.
    pub property_name: Option<String>,
    /// The declared default value: the right-most field when three fields
    /// are present, otherwise the second.
    pub default_property_value: String,
    /// Set when the default value is one of the reserved `<...>` tags.
    pub special_tag: Option<SpecialTag>,
}

/// Parses a `@missing` directive line into a [MissingAnnotation].
///
/// Returns `None` for lines without the directive prefix and for malformed
/// directives (missing fields, non-hex bounds); there are no partial
/// records.
pub fn parse_missing_annotation(line: &str) -> Option<MissingAnnotation> {
    if !is_missing_annotation_line(line) {
        return None;
    }

    let caps = MISSING_ANNOTATION_REGEX.captures(line)?;
    let start = caps.get(1).map_or("", |m| m.as_str()).to_string();
    let end = caps.get(2).map_or("", |m| m.as_str()).to_string();
    let first = caps.get(3).map_or("", |m| m.as_str());
    let second = caps.get(4).map(|m| m.as_str());

    let (property_name, default_property_value) = match second {
        Some(value) => (Some(first.to_string()), value.to_string()),
        None => (None, first.to_string()),
    };

    let special_tag = MISSING_ANNOTATION_SPECIAL_TAGS
        .iter()
        .find(|(tag, _)| *tag == default_property_value)
        .map(|(_, special)| *special);

    Some(MissingAnnotation {
        start,
        end,
        property_name,
        default_property_value,
        special_tag,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_field_form() {
        let parsed = parse_missing_annotation("# @missing: 0000..007F; Basic Latin");
        assert_eq!(
            parsed,
            Some(MissingAnnotation {
                start: "0000".to_string(),
                end: "007F".to_string(),
                property_name: None,
                default_property_value: "Basic Latin".to_string(),
                special_tag: None,
            })
        );
    }

    #[test]
    fn parses_three_field_form() {
        let parsed = parse_missing_annotation("# @missing: 0000..10FFFF; NFD_QC; Yes");
        assert_eq!(
            parsed,
            Some(MissingAnnotation {
                start: "0000".to_string(),
                end: "10FFFF".to_string(),
                property_name: Some("NFD_QC".to_string()),
                default_property_value: "Yes".to_string(),
                special_tag: None,
            })
        );
    }

    #[test]
    fn handles_supplementary_plane_ranges() {
        let parsed = parse_missing_annotation("# @missing: 20000..2FFFD; Wide")
            .expect("should parse");
        assert_eq!(parsed.start, "20000");
        assert_eq!(parsed.end, "2FFFD");
        assert_eq!(parsed.default_property_value, "Wide");
    }

    #[test]
    fn resolves_special_tags() {
        let parsed = parse_missing_annotation("# @missing: 0000..007F; Script; <none>")
            .expect("should parse");
        assert_eq!(parsed.property_name.as_deref(), Some("Script"));
        assert_eq!(parsed.default_property_value, "<none>");
        assert_eq!(parsed.special_tag, Some(SpecialTag::None));

        let parsed = parse_missing_annotation("# @missing: 0000..10FFFF; <script>")
            .expect("should parse");
        assert_eq!(parsed.special_tag, Some(SpecialTag::Script));

        let parsed = parse_missing_annotation("# @missing: 0000..10FFFF; Bidi_Mirroring_Glyph; <code-point>")
            .expect("should parse");
        assert_eq!(parsed.special_tag, Some(SpecialTag::CodePoint));
    }

    #[test]
    fn rejects_non_directive_lines() {
        assert_eq!(parse_missing_annotation("# This is not a missing annotation"), None);
        assert_eq!(parse_missing_annotation("Regular content"), None);
    }

    #[test]
    fn rejects_malformed_directives() {
        assert_eq!(parse_missing_annotation("# @missing: invalid..format; Value"), None);
        assert_eq!(parse_missing_annotation("# @missing: 0000..007F"), None);
        assert_eq!(parse_missing_annotation("# @missing:"), None);
    }
}
