//! The pattern merge engine.
//!
//! [`merge_by_patterns`] takes a baseline tree, a candidate tree, and an
//! ordered set of [`Pattern`]s, and returns a new tree in which only the
//! branches addressed by the patterns are updated from the candidate.
//! Patterns apply sequentially, so overlapping patterns compose and the
//! last-applied pattern wins for the overlap.
//!
//! The engine is total: structural mismatches never error. Wherever the
//! baseline's shape makes descent impossible, the candidate value replaces
//! the baseline wholesale ("new wins").

use crate::pattern::{Pattern, Token};
use serde_yaml::{Mapping, Value};

/// Merge `new` into a copy of `old` along the branches addressed by
/// `patterns`. Branches not addressed by any pattern are carried over from
/// `old` untouched, key order included. Neither input is mutated.
pub fn merge_by_patterns(old: &Value, new: &Value, patterns: &[Pattern]) -> Value {
    let mut merged = old.clone();
    for pattern in patterns {
        tracing::debug!(pattern = %pattern, "applying merge pattern");
        merged = apply_pattern(merged, new, pattern.tokens());
    }
    merged
}

/// Apply one pattern's remaining tokens to `merged` against `new`.
///
/// Consumes `merged` and returns the updated node; callers own the result
/// and nothing aliases back into `new`.
fn apply_pattern(merged: Value, new: &Value, tokens: &[Token]) -> Value {
    let Some((token, rest)) = tokens.split_first() else {
        // Pattern exhausted: the candidate subtree replaces this node.
        return new.clone();
    };

    match token {
        Token::Literal(name) => {
            let Value::Mapping(mut map) = merged else {
                // Baseline is not a mapping here, cannot descend: new wins.
                return new.clone();
            };
            if let Some(candidate) = new.get(name.as_str()) {
                let key = Value::String(name.clone());
                if rest.is_empty() {
                    // Terminal segment: overwrite the whole subtree.
                    map.insert(key, candidate.clone());
                } else {
                    let base = map
                        .get(name.as_str())
                        .cloned()
                        .unwrap_or_else(|| Value::Mapping(Mapping::new()));
                    map.insert(key, apply_pattern(base, candidate, rest));
                }
            }
            // Key absent from the candidate: leave the branch as it was.
            Value::Mapping(map)
        }
        Token::Wildcard => match (merged, new) {
            (Value::Mapping(old_map), Value::Mapping(new_map)) => {
                Value::Mapping(merge_wildcard_mappings(old_map, new_map, rest))
            }
            (Value::Sequence(old_seq), Value::Sequence(new_seq)) => {
                Value::Sequence(merge_wildcard_sequences(old_seq, new_seq, rest))
            }
            // Mismatched or scalar shapes: new wins.
            _ => new.clone(),
        },
    }
}

/// Wildcard fan-out over two mappings.
///
/// Union of keys, ordered baseline-first then candidate-only keys in their
/// candidate order. For a candidate-only key with tokens remaining, the
/// remaining path is resolved inside that candidate child (not at the
/// candidate root) and only that single branch is rebuilt, never the whole
/// candidate-only subtree.
fn merge_wildcard_mappings(old_map: Mapping, new_map: &Mapping, rest: &[Token]) -> Mapping {
    let mut result = Mapping::new();

    for (key, old_val) in old_map {
        match new_map.get(&key) {
            Some(new_val) => {
                result.insert(key, apply_pattern(old_val, new_val, rest));
            }
            None => {
                result.insert(key, old_val);
            }
        }
    }

    for (key, new_val) in new_map {
        if result.contains_key(key) {
            continue;
        }
        if rest.is_empty() {
            result.insert(key.clone(), new_val.clone());
            continue;
        }
        // Candidate-only key with tokens left: only a concrete remaining
        // path that resolves to a truthy value inside the candidate child
        // gets reconstructed, as a single branch. Anything else is dropped.
        if let Some(resolved) = nested_value(new_val, rest) {
            if is_truthy(resolved) {
                result.insert(key.clone(), tree_from_path(rest, resolved.clone()));
            }
        }
    }

    result
}

/// Wildcard fan-out over two sequences: positional up to the longer length.
fn merge_wildcard_sequences(old_seq: Vec<Value>, new_seq: &[Value], rest: &[Token]) -> Vec<Value> {
    let old_len = old_seq.len();
    let mut merged = Vec::with_capacity(old_len.max(new_seq.len()));

    for (idx, old_item) in old_seq.into_iter().enumerate() {
        match new_seq.get(idx) {
            Some(new_item) => merged.push(apply_pattern(old_item, new_item, rest)),
            None => merged.push(old_item),
        }
    }
    if new_seq.len() > old_len {
        merged.extend(new_seq[old_len..].iter().cloned());
    }
    merged
}

/// Walk a literal dotted path through mappings only.
///
/// Returns `None` as soon as a segment is missing or the current node is not
/// a mapping. A `*` in `segments` is looked up as the literal key `"*"`.
pub(crate) fn nested_value<'a>(tree: &'a Value, segments: &[Token]) -> Option<&'a Value> {
    let mut current = tree;
    for segment in segments {
        let Value::Mapping(map) = current else {
            return None;
        };
        current = map.get(segment.as_str())?;
    }
    Some(current)
}

/// Build a single-branch tree of nested single-key mappings whose leaf at
/// `segments` holds `leaf`.
pub(crate) fn tree_from_path(segments: &[Token], leaf: Value) -> Value {
    segments.iter().rev().fold(leaf, |acc, segment| {
        let mut map = Mapping::new();
        map.insert(Value::String(segment.as_str().to_string()), acc);
        Value::Mapping(map)
    })
}

/// Truthiness in the sense the source configs expect: null, false, zero,
/// and empty strings/sequences/mappings are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(_) => true,
    }
}
