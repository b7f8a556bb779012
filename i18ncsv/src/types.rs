//! Core types for i18ncsv.
//! JSON files decode into [`TranslationTree`]s, CSV files into [`Row`]s.

use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{error::Error, language::LanguageCode};

/// A nested translation dictionary for one language.
///
/// Internal nodes are JSON objects, leaves are strings. Key insertion order is kept,
/// equality ignores it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree {
    root: Map<String, Value>,
}

impl TranslationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a parsed JSON value. Only objects are valid tree roots.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(root) => Ok(TranslationTree { root }),
            other => Err(Error::InvalidTree(format!(
                "expected a JSON object at the root, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    pub(crate) fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.root)
    }

    /// `true` when the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Looks up the string leaf at a dotted path.
    pub fn get(&self, path: &str) -> Option<&str> {
        let mut segments = path.split('.');
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        node.as_str()
    }
}

impl TryFrom<Value> for TranslationTree {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        TranslationTree::from_value(value)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A dotted key path and the string found at it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlatEntry {
    pub key: String,
    pub value: String,
}

impl FlatEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        FlatEntry {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for FlatEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

/// One CSV line: the first three key segments plus a value per language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub category: String,
    pub section: String,
    pub item: String,
    /// Values by language. A missing language means "no translation", never `""`.
    pub values: BTreeMap<LanguageCode, String>,
}

impl Row {
    pub fn new(
        category: impl Into<String>,
        section: impl Into<String>,
        item: impl Into<String>,
    ) -> Self {
        Row {
            category: category.into(),
            section: section.into(),
            item: item.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, language: LanguageCode, value: impl Into<String>) -> Self {
        self.values.insert(language, value.into());
        self
    }

    pub fn set_value(&mut self, language: LanguageCode, value: impl Into<String>) {
        self.values.insert(language, value.into());
    }

    /// The value for `language`, or `None` when the row has no translation for it.
    pub fn value(&self, language: &str) -> Option<&str> {
        self.values
            .get(language)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Path segments used to rebuild the nested tree.
    ///
    /// `item` is only meaningful under a non-empty `section`.
    pub fn segments(&self) -> Vec<&str> {
        let mut segments = vec![self.category.as_str()];
        if !self.section.is_empty() {
            segments.push(&self.section);
            if !self.item.is_empty() {
                segments.push(&self.item);
            }
        }
        segments
    }

    /// The dotted key this row stands for.
    pub fn key(&self) -> String {
        self.segments().join(".")
    }
}

/// What to do when rebuilding a tree would put a leaf and an object at the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Fail with [`Error::StructuralConflict`].
    #[default]
    Reject,
    /// Replace whatever is in the way, losing the previous content.
    Overwrite,
}

impl Display for CollisionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionPolicy::Reject => write!(f, "reject"),
            CollisionPolicy::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(CollisionPolicy::Reject),
            "overwrite" => Ok(CollisionPolicy::Overwrite),
            other => Err(format!("unknown collision policy `{}`", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tree_root_must_be_object() {
        assert!(TranslationTree::from_value(json!({"a": "b"})).is_ok());
        let err = TranslationTree::from_value(json!(["a"])).unwrap_err();
        assert!(err.to_string().contains("found an array"));
    }

    #[test]
    fn test_tree_get_path() {
        let tree = TranslationTree::from_value(json!({
            "common": { "ok": "OK", "menu": { "file": "File" } }
        }))
        .unwrap();
        assert_eq!(tree.get("common.ok"), Some("OK"));
        assert_eq!(tree.get("common.menu.file"), Some("File"));
        assert_eq!(tree.get("common.menu"), None);
        assert_eq!(tree.get("missing"), None);
    }

    #[test]
    fn test_tree_equality_ignores_order() {
        let a = TranslationTree::from_value(json!({"x": "1", "y": "2"})).unwrap();
        let b = TranslationTree::from_value(json!({"y": "2", "x": "1"})).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_segments_ignore_item_without_section() {
        let row = Row::new("common", "", "ok");
        assert_eq!(row.segments(), vec!["common"]);
        assert_eq!(Row::new("a", "b", "").key(), "a.b");
        assert_eq!(Row::new("a", "b", "c").key(), "a.b.c");
    }

    #[test]
    fn test_row_empty_value_is_absent() {
        let en = LanguageCode::new("en-US").unwrap();
        let row = Row::new("a", "b", "c").with_value(en, "");
        assert_eq!(row.value("en-US"), None);
    }

    #[test]
    fn test_collision_policy_from_str() {
        assert_eq!(
            "Overwrite".parse::<CollisionPolicy>().unwrap(),
            CollisionPolicy::Overwrite
        );
        assert_eq!(
            "reject".parse::<CollisionPolicy>().unwrap(),
            CollisionPolicy::Reject
        );
        assert!("merge".parse::<CollisionPolicy>().is_err());
        assert_eq!(CollisionPolicy::default(), CollisionPolicy::Reject);
    }
}
