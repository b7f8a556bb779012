//! Language codes and the configured, ordered set of supported languages.

use std::{borrow::Borrow, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// Languages used when nothing else is configured.
pub const DEFAULT_LANGUAGES: [&str; 3] = ["zh-TW", "zh-CN", "en-US"];

/// A language code such as `zh-TW` or `en-US`.
///
/// The code keeps the exact spelling it was created with: CSV headers are matched
/// against it case-sensitively, and it names the `<code>.json` files on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Creates a language code, checking that it is a well-formed language identifier.
    pub fn new(code: impl AsRef<str>) -> Result<Self, Error> {
        let code = code.as_ref().trim();
        if code.is_empty() {
            return Err(Error::invalid_language(code));
        }
        code.parse::<LanguageIdentifier>()
            .map_err(|_| Error::invalid_language(code))?;
        Ok(LanguageCode(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name used for this language's JSON tree.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        LanguageCode::new(value)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The closed, ordered set of languages a conversion works with.
///
/// Column order in emitted CSV files follows the order of this set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    codes: Vec<LanguageCode>,
}

impl LanguageSet {
    /// Builds a set from codes, dropping repeated entries.
    ///
    /// Fails when a code is malformed or when the set would be empty.
    pub fn new<I, S>(codes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<LanguageCode> = Vec::new();
        for code in codes {
            let code = LanguageCode::new(code)?;
            if !out.contains(&code) {
                out.push(code);
            }
        }
        if out.is_empty() {
            return Err(Error::EmptyLanguageSet);
        }
        Ok(LanguageSet { codes: out })
    }

    pub fn codes(&self) -> &[LanguageCode] {
        &self.codes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LanguageCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c.as_str() == code)
    }

    /// Looks up a configured language by its exact code.
    pub fn get(&self, code: &str) -> Result<&LanguageCode, Error> {
        let code = code.trim();
        self.codes
            .iter()
            .find(|c| c.as_str() == code)
            .ok_or_else(|| Error::invalid_language(code))
    }

    /// Resolves a caller-supplied selection against this set.
    ///
    /// Unknown codes are dropped (and logged). The result is in configured order with
    /// no repetitions; an empty result is an error.
    pub fn select<I, S>(&self, requested: I) -> Result<Vec<LanguageCode>, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut wanted = Vec::new();
        for code in requested {
            let code = code.as_ref().trim();
            if code.is_empty() {
                continue;
            }
            if self.contains(code) {
                wanted.push(code.to_string());
            } else {
                tracing::warn!(event = "language_dropped", language = %code, "unsupported language ignored");
            }
        }

        let selected: Vec<LanguageCode> = self
            .codes
            .iter()
            .filter(|c| wanted.iter().any(|w| w == c.as_str()))
            .cloned()
            .collect();

        if selected.is_empty() {
            return Err(Error::EmptyLanguageSet);
        }
        Ok(selected)
    }

    /// Same as [`LanguageSet::select`] for a comma-separated list such as `zh-TW,en-US`.
    pub fn select_list(&self, list: &str) -> Result<Vec<LanguageCode>, Error> {
        self.select(list.split(','))
    }
}

impl Default for LanguageSet {
    fn default() -> Self {
        LanguageSet {
            codes: DEFAULT_LANGUAGES
                .iter()
                .map(|c| LanguageCode(c.to_string()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LanguageSet {
    type Item = &'a LanguageCode;
    type IntoIter = std::slice::Iter<'a, LanguageCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}
