//! Builder for creating a `Codec` instance with a fluent interface.
//!
//! # Example
//!
//! ```rust
//! use i18ncsv::{Codec, CollisionPolicy};
//!
//! let codec = Codec::builder()
//!     .languages(["en-US", "ja-JP"])?
//!     .collision_policy(CollisionPolicy::Overwrite)
//!     .build();
//! assert_eq!(codec.languages().len(), 2);
//! # Ok::<(), i18ncsv::Error>(())
//! ```

use crate::{
    codec::Codec,
    error::Error,
    language::LanguageSet,
    types::CollisionPolicy,
};

#[derive(Debug, Clone, Default)]
pub struct CodecBuilder {
    languages: Option<LanguageSet>,
    collision: CollisionPolicy,
}

impl CodecBuilder {
    /// Creates a new `CodecBuilder` with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the supported languages from codes, in column order.
    ///
    /// Returns an `Error` if a code is malformed or the list is empty.
    pub fn languages<I, S>(mut self, codes: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.languages = Some(LanguageSet::new(codes)?);
        Ok(self)
    }

    /// Sets an already validated language set.
    pub fn language_set(mut self, languages: LanguageSet) -> Self {
        self.languages = Some(languages);
        self
    }

    pub fn collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision = policy;
        self
    }

    /// Builds the final `Codec`.
    pub fn build(self) -> Codec {
        Codec {
            languages: self.languages.unwrap_or_default(),
            collision: self.collision,
        }
    }
}
