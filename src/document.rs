//! YAML document I/O around the merge engine.
//!
//! The engine itself only sees decoded trees; this module owns the text and
//! file boundary: parsing, serializing, and the merge-into-file flow where
//! an existing document on disk is the baseline.

use crate::merge::merge_by_patterns;
use crate::pattern::Pattern;
use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

pub fn from_str(text: &str) -> Result<Value> {
    serde_yaml::from_str(text).context("invalid YAML document")
}

pub fn to_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).context("failed to serialize YAML document")
}

pub fn load(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading {}", path.display()))?;
    serde_yaml::from_str(&content)
        .with_context(|| format!("invalid YAML in {}", path.display()))
}

pub fn save(path: &Path, value: &Value) -> Result<()> {
    let text = to_string(value)?;
    fs::write(path, text).with_context(|| format!("failed writing {}", path.display()))
}

/// Merge `new` into the document at `path` and write the result back.
///
/// When the file exists it is loaded as the baseline and merged along
/// `patterns`; when it does not, `new` is written wholesale. Returns the
/// tree that was written.
pub fn merge_into_file(path: &Path, new: &Value, patterns: &[Pattern]) -> Result<Value> {
    let merged = if path.exists() {
        let old = load(path)?;
        merge_by_patterns(&old, new, patterns)
    } else {
        tracing::debug!(path = %path.display(), "no existing document, taking candidate wholesale");
        new.clone()
    };
    save(path, &merged)?;
    Ok(merged)
}
