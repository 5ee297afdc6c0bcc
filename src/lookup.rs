//! Strict dotted-path extraction.
//!
//! Unlike the merge engine's lenient helpers, [`extract_field`] raises on
//! every miss: absent keys, out-of-range indices, and attempts to descend
//! into scalars all produce a distinct [`LookupError`].

use serde_yaml::Value;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("key not found: '{0}'")]
    KeyNotFound(String),
    #[error("list index out of range: {0}")]
    IndexOutOfRange(usize),
    #[error("expected list index at '{0}' but it is not an integer")]
    InvalidIndex(String),
    #[error("cannot descend into non-collection value at '{0}'")]
    NotACollection(String),
}

/// Extract a nested value using a dot-delimited path.
///
/// Mappings are indexed by key, sequences by zero-based integer index, so
/// `"items.0.title"` reaches the `title` of the first item.
pub fn extract_field<'a>(tree: &'a Value, path: &str) -> Result<&'a Value, LookupError> {
    let mut current = tree;
    for part in path.split('.') {
        current = match current {
            Value::Sequence(seq) => {
                let idx: usize = part
                    .parse()
                    .map_err(|_| LookupError::InvalidIndex(part.to_string()))?;
                seq.get(idx).ok_or(LookupError::IndexOutOfRange(idx))?
            }
            Value::Mapping(map) => map
                .get(part)
                .ok_or_else(|| LookupError::KeyNotFound(part.to_string()))?,
            _ => return Err(LookupError::NotACollection(part.to_string())),
        };
    }
    Ok(current)
}
