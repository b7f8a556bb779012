//! File formats handled by i18ncsv.
//!
//! - [`json`]: one nested [`crate::TranslationTree`] per language file.
//! - [`csv`]: one spreadsheet holding every language, one row per key.

pub mod csv;
pub mod json;

pub use self::csv::{decode, encode};
