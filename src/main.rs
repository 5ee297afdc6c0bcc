//! ymerge: selective, pattern-driven YAML merging
//!
//! Merges a candidate YAML document into a baseline along dot-path key
//! patterns, leaving every unaddressed branch untouched.

use anyhow::Result;

fn main() -> Result<()> {
    ymerge::cli::run()
}
