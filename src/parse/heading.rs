//! Heading inference
//!
//! The heading of a UCD file is its leading block of comment lines: the
//! prose that documents purpose, format and provenance before the data
//! starts. There is no grammar for where it ends; this scanner decides with
//! a single forward pass and one line of lookahead.
//!
//! Per-line rules, first match wins:
//!
//! 1. A `@missing` directive ends the scan; the directive belongs to the
//!    body.
//! 2. A data line ends the scan once the heading has been entered. Data
//!    lines before the first comment line are skipped.
//! 3. A comment line joins the heading. If it is a boundary line its index
//!    is recorded, and if the line after it is not a comment the scan ends
//!    with the boundary included (the usual separator-before-data footer).
//! 4. An empty line ends the scan once the heading has been entered; the
//!    empty line is excluded. Headings separate their paragraphs with bare
//!    `#` lines, so a true blank means the prose is over.
//!
//! After the pass, if any boundary line was recorded the heading is cut to
//! end at the last one. Files that close their heading with a separator
//! followed by more comments (a `Property:` block, say) keep the separator
//! as the terminator, and the trailing comments fall through to the body
//! where the section parser picks them up.

use crate::parse::lines::{
    is_boundary_line, is_comment_line, is_empty_line, is_missing_annotation_line,
};

/// Outcome of a heading scan: the heading text plus the line index at which
/// the body starts. `end_line` is 0 when no heading was found.
pub(crate) struct HeadingScan {
    pub text: Option<String>,
    pub end_line: usize,
}

pub(crate) fn scan_heading(content: &str) -> HeadingScan {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut text = String::new();
    let mut seen_comment = false;
    let mut in_heading = false;
    // Line index and accumulated length at the last boundary line seen.
    let mut last_boundary: Option<(usize, usize)> = None;
    let mut end = lines.len();

    for (i, line) in lines.iter().enumerate() {
        let next = lines.get(i + 1).copied();

        if is_missing_annotation_line(line) {
            end = i;
            break;
        }

        if is_comment_line(line) {
            seen_comment = true;
            in_heading = true;
            text.push_str(line);
            text.push('\n');

            if is_boundary_line(line) {
                last_boundary = Some((i, text.len()));
                if next.is_some_and(|n| !is_comment_line(n)) {
                    end = i + 1;
                    break;
                }
            }
        } else if is_empty_line(line) {
            if in_heading {
                end = i;
                break;
            }
        } else if in_heading {
            end = i;
            break;
        }
    }

    if !seen_comment {
        return HeadingScan {
            text: None,
            end_line: 0,
        };
    }

    if let Some((boundary_line, boundary_len)) = last_boundary {
        text.truncate(boundary_len);
        end = boundary_line + 1;
    }

    HeadingScan {
        text: Some(text.trim_end().to_string()),
        end_line: end,
    }
}

/// Parses the heading comment block from the start of a UCD file.
///
/// Returns `None` when the content never yields a comment line; a file with
/// nothing but data has no heading, not an empty one. Never fails:
/// contradictory input degrades to a shorter heading or to `None`.
pub fn parse_heading(content: &str) -> Option<String> {
    scan_heading(content).text
}
