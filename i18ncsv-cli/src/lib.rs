//! CLI library for testing purposes

pub mod config;
pub mod convert;
pub mod validation;

pub use config::Config;
pub use i18ncsv::Codec;
