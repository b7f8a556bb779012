#![forbid(unsafe_code)]
//! Bridge between nested per-language JSON translation files and one flat CSV.
//!
//! Translators get a spreadsheet with a row per key and a column per language;
//! developers keep their `<lang>.json` trees.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use i18ncsv::Codec;
//!
//! let codec = Codec::new();
//! let targets = codec.languages().select_list("zh-TW,en-US")?;
//!
//! // public/lang/zh-TW.json + public/lang/en-US.json -> public/i18n.csv
//! codec.merge_dir_to_csv("public/lang", "public/i18n.csv", &targets)?;
//!
//! // ...and back, after translators edited the spreadsheet
//! codec.csv_to_json_dir("public/i18n.csv", "public/lang", &targets)?;
//! # Ok::<(), i18ncsv::Error>(())
//! ```
//!
//! # Layout
//!
//! - [`flatten`]: nested tree ⇄ dotted key paths
//! - [`formats::csv`]: the spreadsheet encoding
//! - [`converter`]: trees ⇄ rows, without I/O
//! - [`Codec`]: file-level operations with a language configuration

pub mod builder;
pub mod codec;
pub mod converter;
pub mod error;
pub mod flatten;
pub mod formats;
pub mod language;
pub mod traits;
pub mod types;

pub use crate::{
    builder::CodecBuilder,
    codec::{Codec, MergeReport, WriteOutcome},
    converter::LanguageTree,
    error::Error,
    language::{DEFAULT_LANGUAGES, LanguageCode, LanguageSet},
    types::{CollisionPolicy, FlatEntry, Row, TranslationTree},
};
