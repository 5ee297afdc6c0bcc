//! ymerge: selective, pattern-driven YAML merging
//!
//! Merges a candidate YAML document into a baseline document, but only along
//! the branches addressed by a set of dot-path key patterns (segments may be
//! the wildcard `*`). Everything the patterns do not mention is carried over
//! from the baseline untouched, key order included.

pub mod cli;
pub mod config;
pub mod document;
pub mod lookup;
pub mod merge;
pub mod pattern;

pub use lookup::extract_field;
pub use merge::merge_by_patterns;
pub use pattern::Pattern;
