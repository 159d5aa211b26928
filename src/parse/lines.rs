//! Line classification
//!
//! Pure predicates for categorizing a single line of a UCD file. These are
//! the building blocks the heading and section scanners run on, and they are
//! also part of the public surface for callers that walk files themselves.
//!
//! All predicates are total and side-effect-free; the empty string behaves
//! exactly like a missing line, so lookahead code can pass
//! `lines.get(i + 1).copied().unwrap_or("")` without a special case.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static HASH_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\s*#{2,}\s*$").unwrap());
static EQUALS_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\s*={2,}\s*$").unwrap());
static DASH_BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*#\s*-{2,}\s*$").unwrap());

/// The sentinel comment line marking the logical end of a UCD file's data.
pub const EOF_MARKER: &str = "# EOF";

/// The prefix of a `@missing` default-property-value directive.
pub const MISSING_ANNOTATION_PREFIX: &str = "# @missing:";

/// Determines if a line is a comment line.
///
/// A comment line starts with `"# "`, starts with `"#\t\t"` (the tabbed
/// form some older files use), or consists of a lone `#` surrounded by
/// whitespace. A `#` glued directly to text (`#text`) is data, not a
/// comment; that distinction is what keeps machine-readable `#`-prefixed
/// fields out of headings.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with("# ") || line.starts_with("#\t\t") || line.trim() == "#"
}

/// Determines if a line is empty after trimming whitespace.
pub fn is_empty_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Determines if a line carries data: neither a comment nor empty.
pub fn is_line_with_data(line: &str) -> bool {
    !is_comment_line(line) && !is_empty_line(line)
}

/// Determines if a line is a hash boundary, like `# #####`.
///
/// Boundary lines are decorative separators between regions of a file.
/// The run must fill the rest of the line; trailing text disqualifies it.
pub fn is_hash_boundary(line: &str) -> bool {
    HASH_BOUNDARY_REGEX.is_match(line)
}

/// Determines if a line is an equals boundary, like `# =====`.
pub fn is_equals_boundary(line: &str) -> bool {
    EQUALS_BOUNDARY_REGEX.is_match(line)
}

/// Determines if a line is a dash boundary, like `# -----`.
pub fn is_dash_boundary(line: &str) -> bool {
    DASH_BOUNDARY_REGEX.is_match(line)
}

/// Determines if a line is any of the three boundary forms.
pub fn is_boundary_line(line: &str) -> bool {
    is_hash_boundary(line) || is_equals_boundary(line) || is_dash_boundary(line)
}

/// Determines if a line is the `# EOF` end marker.
pub fn is_eof_marker(line: &str) -> bool {
    line.trim() == EOF_MARKER
}

/// Determines if a line is a `@missing` directive, like
/// `# @missing: 0000..10FFFF; No_Block`.
pub fn is_missing_annotation_line(line: &str) -> bool {
    line.starts_with(MISSING_ANNOTATION_PREFIX)
}

/// The category of a single line.
///
/// This is a derived view, not something files store; see [classify_line]
/// for the precedence between overlapping categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineKind {
    Comment,
    Empty,
    Data,
    HashBoundary,
    EqualsBoundary,
    DashBoundary,
    EofMarker,
    MissingDirective,
}

/// Classify a line into exactly one [LineKind].
///
/// Order matters: the directive, EOF and boundary forms are all comment
/// lines too, so the specific categories are checked first and plain
/// `Comment` is the fallback for the rest.
pub fn classify_line(line: &str) -> LineKind {
    if is_missing_annotation_line(line) {
        return LineKind::MissingDirective;
    }
    if is_eof_marker(line) {
        return LineKind::EofMarker;
    }
    if is_hash_boundary(line) {
        return LineKind::HashBoundary;
    }
    if is_equals_boundary(line) {
        return LineKind::EqualsBoundary;
    }
    if is_dash_boundary(line) {
        return LineKind::DashBoundary;
    }
    if is_comment_line(line) {
        return LineKind::Comment;
    }
    if is_empty_line(line) {
        return LineKind::Empty;
    }
    LineKind::Data
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# This is a comment", true)]
    #[case("#", true)]
    #[case("  #  ", true)]
    #[case("#This is not a comment", false)]
    #[case("Text # with hash", false)]
    #[case("", false)]
    #[case("  # This is a comment with leading space", false)]
    #[case(" #This is not a comment despite space", false)]
    #[case("#\t\tTabbed comment", true)]
    fn comment_line_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_comment_line(line), expected, "line: {:?}", line);
    }

    #[rstest]
    #[case("", true)]
    #[case("  ", true)]
    #[case("\t", true)]
    #[case("  \t  ", true)]
    #[case("text", false)]
    #[case(" text ", false)]
    #[case("special chars !@#", false)]
    fn empty_line_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_empty_line(line), expected, "line: {:?}", line);
    }

    #[rstest]
    #[case("# This is a comment", false)]
    #[case("", false)]
    #[case("  \t  ", false)]
    #[case("text", true)]
    #[case(" text ", true)]
    #[case("U+0020;SPACE", true)]
    #[case("#glued-to-text", true)]
    fn data_line_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_line_with_data(line), expected, "line: {:?}", line);
    }

    #[rstest]
    #[case("# ####", true)]
    #[case("# ##########", true)]
    #[case("# ##", true)]
    #[case("# # #", false)]
    #[case("# #### ", true)]
    #[case("#  ####", true)]
    #[case("#", false)]
    #[case("", false)]
    fn hash_boundary_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_hash_boundary(line), expected, "line: {:?}", line);
    }

    #[rstest]
    #[case("# ====", true)]
    #[case("# ============", true)]
    #[case("# ==", true)]
    #[case("# = =", false)]
    #[case("# ===  ", true)]
    #[case("#  ==", true)]
    #[case("#", false)]
    #[case("", false)]
    fn equals_boundary_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_equals_boundary(line), expected, "line: {:?}", line);
    }

    #[rstest]
    #[case("# ----", true)]
    #[case("# --", true)]
    #[case("# - -", false)]
    #[case("# Some text", false)]
    #[case("", false)]
    fn dash_boundary_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_dash_boundary(line), expected, "line: {:?}", line);
    }

    #[test]
    fn boundary_line_covers_all_three_forms() {
        assert!(is_boundary_line("# #####"));
        assert!(is_boundary_line("# ====="));
        assert!(is_boundary_line("# -----"));
        assert!(!is_boundary_line("# Some text"));
        assert!(!is_boundary_line(""));
    }

    #[rstest]
    #[case("# EOF", true)]
    #[case("  # EOF  ", true)]
    #[case("# EOF marker", false)]
    #[case("Some text", false)]
    #[case("", false)]
    fn eof_marker_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_eof_marker(line), expected, "line: {:?}", line);
    }

    #[rstest]
    #[case("# @missing: 0000..007F; Basic Latin", true)]
    #[case("# @missing: 0000..10FFFF; NFD_QC; Yes", true)]
    #[case("# Not a missing annotation", false)]
    #[case("Regular text", false)]
    #[case("", false)]
    fn missing_annotation_cases(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(is_missing_annotation_line(line), expected, "line: {:?}", line);
    }

    #[rstest]
    #[case("# @missing: 0000..10FFFF; NFD_QC; Yes", LineKind::MissingDirective)]
    #[case("# EOF", LineKind::EofMarker)]
    #[case("# ####", LineKind::HashBoundary)]
    #[case("# ====", LineKind::EqualsBoundary)]
    #[case("# ----", LineKind::DashBoundary)]
    #[case("# plain comment", LineKind::Comment)]
    #[case("#", LineKind::Comment)]
    #[case("   ", LineKind::Empty)]
    #[case("0020;SPACE", LineKind::Data)]
    #[case("#glued", LineKind::Data)]
    fn classify_line_cases(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify_line(line), expected, "line: {:?}", line);
    }
}
