//! Optional `i18ncsv.toml` configuration.
//!
//! ```toml
//! languages = ["zh-TW", "zh-CN", "en-US"]
//! default_source_language = "en-US"
//! collision = "reject"
//! ```

use std::path::{Path, PathBuf};

use i18ncsv::{Codec, CollisionPolicy, DEFAULT_LANGUAGES};
use serde::Deserialize;

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "i18ncsv.toml";

/// Source language of `json2csv` when neither the command line nor the config names one.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Supported languages, in spreadsheet column order.
    pub languages: Option<Vec<String>>,
    pub default_source_language: Option<String>,
    pub collision: Option<CollisionPolicy>,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid configuration: {}", e))
    }

    /// Loads `explicit` if given (it must exist), otherwise [`DEFAULT_CONFIG_FILE`] from
    /// `dir` if present, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, String> {
        let path: PathBuf = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(format!("Config file does not exist: {}", path.display()));
                }
                path.to_path_buf()
            }
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!(event = "config_default", "no config file, using defaults");
                    return Ok(Config::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| format!("Error reading config {}: {}", path.display(), e))?;
        let config = Self::from_toml(&content).map_err(|e| format!("{} ({})", e, path.display()))?;
        tracing::debug!(event = "config_loaded", path = %path.display());
        Ok(config)
    }

    pub fn source_language(&self) -> &str {
        self.default_source_language
            .as_deref()
            .unwrap_or(DEFAULT_SOURCE_LANGUAGE)
    }

    /// Builds the codec for this configuration. `overwrite` forces
    /// [`CollisionPolicy::Overwrite`] regardless of the file.
    pub fn codec(&self, overwrite: bool) -> Result<Codec, String> {
        let languages: Vec<&str> = match &self.languages {
            Some(codes) => codes.iter().map(String::as_str).collect(),
            None => DEFAULT_LANGUAGES.to_vec(),
        };
        let policy = if overwrite {
            CollisionPolicy::Overwrite
        } else {
            self.collision.unwrap_or_default()
        };

        let builder = Codec::builder()
            .languages(languages)
            .map_err(|e| format!("Invalid language configuration: {}", e))?;
        Ok(builder.collision_policy(policy).build())
    }
}
