//! # ucd-meta
//!
//! A parser for the metadata of Unicode Character Database (UCD) files.
//!
//! UCD files are plain-text, newline-delimited files published per Unicode
//! version. Each one opens with a heading comment block describing the file,
//! may declare default property values through `@missing` directives, and
//! groups its data lines into sections introduced by comment blocks. This
//! crate classifies lines and delimits those metadata regions; it does not
//! parse the data lines themselves into property records.
//!
//! Structure:
//!     [parse] holds the core engine: the pure per-line predicates and the
//! stateful forward scanners for headings and sections. [datafile] composes
//! them into the `RawDataFile` facade, the usual entry point. [versions],
//! [draft] and [hexcodes] carry the static version tables and small helpers
//! around them.
//!
//! The file family has no formal grammar. Heading termination is heuristic:
//! it depends on boundary separator lines (runs of `#`, `=` or `-`),
//! `@missing` directives, and one line of lookahead. The exact rules are
//! documented on [parse::heading].

pub mod datafile;
pub mod draft;
pub mod hexcodes;
pub mod parse;
pub mod versions;

pub use datafile::{DataFileError, RawDataFile};
pub use parse::filename::{infer_file_name, infer_version, parse_file_name_line, ParsedFileName};
pub use parse::heading::parse_heading;
pub use parse::lines::{
    classify_line, is_boundary_line, is_comment_line, is_dash_boundary, is_empty_line,
    is_eof_marker, is_equals_boundary, is_hash_boundary, is_line_with_data,
    is_missing_annotation_line, LineKind, EOF_MARKER, MISSING_ANNOTATION_PREFIX,
};
pub use parse::missing::{parse_missing_annotation, MissingAnnotation, SpecialTag};
pub use parse::sections::{has_sections, parse_sections, Section};
pub use versions::{
    find_version, has_ucd_path, map_to_ucd_path_version, UnicodeVersion, UNICODE_DRAFT_VERSION,
    UNICODE_STABLE_VERSION, UNICODE_VERSIONS,
};
