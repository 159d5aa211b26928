//! Core line classification and metadata inference engine.
//!
//! Everything in here is a pure computation over an in-memory string. The
//! per-line predicates in [lines] are stateless; [heading] and [sections]
//! run a single forward pass with a small set of accumulator fields and at
//! most a few lines of lookahead, so every parse is O(lines) and
//! deterministic.
//!
//! A heuristic that cannot confidently produce a result returns `None`
//! rather than an error. Callers treat "no heading" and "no version" as
//! normal outcomes; only the [crate::datafile] facade can fail, and only
//! for empty input.

pub mod filename;
pub mod heading;
pub mod lines;
pub mod missing;
pub mod sections;
