//! Conversion between nested [`TranslationTree`]s and flat dotted key paths.
//!
//! `{"common": {"ok": "OK"}}` flattens to `common.ok = OK`; [`unflatten`] goes the
//! other way. Rows carry at most three segments, see [`KeyPath`].

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::{
    error::Error,
    types::{CollisionPolicy, FlatEntry, Row, TranslationTree},
};

/// Flattens a tree into `(dotted path, value)` pairs, depth-first in the tree's own key order.
///
/// Numbers and booleans are stringified, `null` becomes `""` and arrays are walked with
/// their indices as path segments. Empty objects produce nothing.
pub fn flatten(tree: &TranslationTree) -> Vec<FlatEntry> {
    let mut out = Vec::new();
    walk_map(tree.as_map(), "", &mut out);
    out
}

/// [`flatten`] collected into a lookup map. A later duplicate path replaces an earlier one.
pub fn flatten_map(tree: &TranslationTree) -> HashMap<String, String> {
    flatten(tree)
        .into_iter()
        .map(|entry| (entry.key, entry.value))
        .collect()
}

fn walk_map(map: &Map<String, Value>, prefix: &str, out: &mut Vec<FlatEntry>) {
    for (key, value) in map {
        walk_value(value, join_key(prefix, key), out);
    }
}

fn walk_value(value: &Value, key: String, out: &mut Vec<FlatEntry>) {
    match value {
        Value::Object(map) => walk_map(map, &key, out),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk_value(item, join_key(&key, &index.to_string()), out);
            }
        }
        Value::String(s) => out.push(FlatEntry::new(key, s.clone())),
        Value::Number(n) => out.push(FlatEntry::new(key, n.to_string())),
        Value::Bool(b) => out.push(FlatEntry::new(key, b.to_string())),
        Value::Null => out.push(FlatEntry::new(key, String::new())),
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// The `Category` / `Section` / `Item` split of a dotted key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    pub category: String,
    pub section: String,
    pub item: String,
}

impl KeyPath {
    pub const MAX_DEPTH: usize = 3;

    /// Splits a dotted key into at most three segments; missing segments are empty.
    ///
    /// Keys with more than [`KeyPath::MAX_DEPTH`] segments cannot be represented in a
    /// row and are rejected with [`Error::KeyTooDeep`]. An empty segment (`a.`, `.b`,
    /// `a..c`) would not survive the row and is rejected with [`Error::EmptySegment`].
    pub fn parse(key: &str) -> Result<Self, Error> {
        let segments: Vec<&str> = key.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::EmptySegment(key.to_string()));
        }
        if segments.len() > Self::MAX_DEPTH {
            return Err(Error::KeyTooDeep {
                key: key.to_string(),
                depth: segments.len(),
            });
        }
        let segment = |i: usize| segments.get(i).copied().unwrap_or_default().to_string();
        Ok(KeyPath {
            category: segment(0),
            section: segment(1),
            item: segment(2),
        })
    }

    pub fn into_row(self) -> Row {
        Row::new(self.category, self.section, self.item)
    }
}

/// Builds an empty [`Row`] (no language values yet) for a dotted key.
pub fn to_row(key: &str) -> Result<Row, Error> {
    KeyPath::parse(key).map(KeyPath::into_row)
}

/// Inserts `value` at the dotted `path`, creating intermediate objects as needed.
pub fn unflatten(
    tree: &mut TranslationTree,
    path: &str,
    value: &str,
    policy: CollisionPolicy,
) -> Result<(), Error> {
    let segments: Vec<&str> = path.split('.').collect();
    insert(tree, &segments, value, policy)
}

/// Segment-wise form of [`unflatten`], for callers that already hold split segments.
///
/// Descending through an existing string, or replacing an existing object with a
/// string, is a conflict: rejected or overwritten according to `policy`. Replacing a
/// string with another string is always allowed.
pub fn insert(
    tree: &mut TranslationTree,
    segments: &[&str],
    value: &str,
    policy: CollisionPolicy,
) -> Result<(), Error> {
    let Some((last, parents)) = segments.split_last() else {
        return Err(Error::InvalidTree("empty key path".to_string()));
    };

    let mut node = tree.as_map_mut();
    for (depth, segment) in parents.iter().enumerate() {
        let child = node
            .entry(*segment)
            .or_insert_with(|| Value::Object(Map::new()));
        if !child.is_object() {
            if policy == CollisionPolicy::Reject {
                return Err(Error::conflict(
                    segments[..=depth].join("."),
                    "a value already exists where nested keys are needed",
                ));
            }
            *child = Value::Object(Map::new());
        }
        let Value::Object(map) = child else {
            return Err(Error::conflict(
                segments[..=depth].join("."),
                "expected an object",
            ));
        };
        node = map;
    }

    if policy == CollisionPolicy::Reject && matches!(node.get(*last), Some(Value::Object(_))) {
        return Err(Error::conflict(
            segments.join("."),
            "nested keys already exist where a value is needed",
        ));
    }
    node.insert(last.to_string(), Value::String(value.to_string()));
    Ok(())
}
