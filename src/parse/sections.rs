//! Section inference
//!
//! Inside the body of a UCD file, a comment block followed by data lines
//! introduces a section: the block's first line names it, the remaining
//! lines describe it, and the data lines that follow belong to it until the
//! next block starts.
//!
//! ```text
//! # Bidirectional properties
//! # Field 1 holds the class.
//! 0600; AL
//! 0601; AL
//! ```
//!
//! Decorative boundary separators never name sections, and a comment block
//! that describes no data is dropped.

use indexmap::IndexMap;
use serde::Serialize;

use crate::parse::lines::{is_boundary_line, is_comment_line, is_empty_line, is_line_with_data};

/// A named group of consecutive data lines introduced by a comment block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// First comment line of the introducing block, marker stripped.
    pub name: String,
    /// Remaining comment lines of the block, joined with newlines.
    pub description: String,
    /// The data lines of the section, in order.
    pub lines: Vec<String>,
}

/// Parses the post-heading body of a UCD file into its sections.
///
/// The result preserves first-appearance order. When two blocks share a
/// name the later one overwrites the earlier in place; section names are
/// not required to be unique in the wild.
pub fn parse_sections(content: &str) -> IndexMap<String, Section> {
    let lines: Vec<&str> = content.split('\n').collect();

    let mut result: IndexMap<String, Section> = IndexMap::new();
    let mut pending: Vec<String> = Vec::new();
    let mut current: Option<Section> = None;

    for (i, line) in lines.iter().enumerate() {
        if is_empty_line(line) {
            // A blank is cosmetic spacing when data still follows the
            // pending comment block; otherwise the block described nothing.
            if !pending.is_empty() && !next_non_empty_is_data(&lines, i + 1) {
                pending.clear();
            }
        } else if is_comment_line(line) {
            if is_boundary_line(line) {
                continue;
            }
            pending.push(strip_comment_marker(line));
        } else {
            if !pending.is_empty() {
                if let Some(done) = current.take() {
                    result.insert(done.name.clone(), done);
                }
                let name = pending[0].trim().to_string();
                let description = pending[1..].join("\n");
                current = Some(Section {
                    name,
                    description,
                    lines: vec![line.to_string()],
                });
                pending.clear();
            } else if let Some(section) = current.as_mut() {
                section.lines.push(line.to_string());
            }
            // Data before any comment block is not attributable; dropped.
        }
    }

    if let Some(done) = current.take() {
        result.insert(done.name.clone(), done);
    }

    result
}

/// True when the body contains at least one section.
pub fn has_sections(content: &str) -> bool {
    !parse_sections(content).is_empty()
}

fn next_non_empty_is_data(lines: &[&str], start: usize) -> bool {
    for line in &lines[start.min(lines.len())..] {
        if is_empty_line(line) {
            continue;
        }
        return is_line_with_data(line);
    }
    false
}

fn strip_comment_marker(line: &str) -> String {
    let rest = line.trim_start().strip_prefix('#').unwrap_or(line);
    let rest = rest
        .strip_prefix(' ')
        .or_else(|| rest.strip_prefix('\t'))
        .unwrap_or(rest);
    rest.to_string()
}
