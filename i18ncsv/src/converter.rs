//! In-memory conversion between per-language trees and spreadsheet rows.
//!
//! These functions do no I/O; see [`crate::Codec`] for the file-level operations.

use std::collections::{BTreeSet, HashMap};

use crate::{
    error::Error,
    flatten::{self, flatten, flatten_map},
    language::LanguageCode,
    types::{CollisionPolicy, Row, TranslationTree},
};

/// One language's rebuilt tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageTree {
    pub language: LanguageCode,
    pub tree: TranslationTree,
}

impl LanguageTree {
    /// An empty tree means there is nothing to write for this language.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

/// Turns a single language's tree into rows, in the tree's own key order.
///
/// Only `source_language` gets a value; the other columns stay empty when encoded.
///
/// # Example
///
/// ```rust
/// use i18ncsv::{LanguageCode, TranslationTree, converter::convert_one, traits::Parser};
///
/// let tree = TranslationTree::from_str(r#"{"common": {"ok": "OK"}}"#)?;
/// let en = LanguageCode::new("en-US")?;
/// let rows = convert_one(&tree, &en)?;
/// assert_eq!(rows[0].key(), "common.ok");
/// assert_eq!(rows[0].value("en-US"), Some("OK"));
/// # Ok::<(), i18ncsv::Error>(())
/// ```
pub fn convert_one(
    tree: &TranslationTree,
    source_language: &LanguageCode,
) -> Result<Vec<Row>, Error> {
    flatten(tree)
        .into_iter()
        .map(|entry| {
            let mut row = flatten::to_row(&entry.key)?;
            if !entry.value.is_empty() {
                row.set_value(source_language.clone(), entry.value);
            }
            Ok(row)
        })
        .collect()
}

/// Merges several languages into one row per distinct key.
///
/// Keys are the union over every language in `targets`, sorted by plain string
/// order so the same input always produces the same rows. A target mapped to `None`,
/// or missing from `trees`, contributes no values.
pub fn convert_merge(
    trees: &HashMap<LanguageCode, Option<TranslationTree>>,
    targets: &[LanguageCode],
) -> Result<Vec<Row>, Error> {
    let flat: Vec<(&LanguageCode, HashMap<String, String>)> = targets
        .iter()
        .map(|lang| {
            let map = match trees.get(lang) {
                Some(Some(tree)) => flatten_map(tree),
                _ => HashMap::new(),
            };
            (lang, map)
        })
        .collect();

    let keys: BTreeSet<&str> = flat
        .iter()
        .flat_map(|(_, map)| map.keys().map(String::as_str))
        .collect();

    let mut rows = Vec::with_capacity(keys.len());
    for key in keys {
        let mut row = flatten::to_row(key)?;
        for (lang, map) in &flat {
            if let Some(value) = map.get(key).filter(|v| !v.is_empty()) {
                row.set_value((*lang).clone(), value.clone());
            }
        }
        rows.push(row);
    }

    tracing::debug!(event = "merge_rows", rows = rows.len(), languages = targets.len());
    Ok(rows)
}

/// Rebuilds one tree per target language from spreadsheet rows.
///
/// A row nests three levels when it has an `Item`, two when it only has a `Section`,
/// and sits directly under its `Category` otherwise. Rows without a value for a
/// language leave that language's tree untouched. The result follows the order of
/// `targets` and may contain empty trees.
pub fn convert_rows(
    rows: &[Row],
    targets: &[LanguageCode],
    policy: CollisionPolicy,
) -> Result<Vec<LanguageTree>, Error> {
    let mut out: Vec<LanguageTree> = targets
        .iter()
        .map(|language| LanguageTree {
            language: language.clone(),
            tree: TranslationTree::new(),
        })
        .collect();

    for row in rows.iter().filter(|row| !row.category.is_empty()) {
        let segments = row.segments();
        for target in &mut out {
            if let Some(value) = row.value(target.language.as_str()) {
                flatten::insert(&mut target.tree, &segments, value, policy)?;
            }
        }
    }
    Ok(out)
}
