//! File-level conversions between `<lang>.json` trees and the translation spreadsheet.
//!
//! A [`Codec`] carries the configuration every conversion needs: the supported
//! languages (and so the spreadsheet columns) and the collision policy used when
//! rebuilding trees. Each call reads its inputs fresh and overwrites its outputs.
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use crate::{
    builder::CodecBuilder,
    converter::{convert_merge, convert_one, convert_rows},
    error::Error,
    flatten::flatten,
    formats::csv::{read_rows, write_rows},
    language::{LanguageCode, LanguageSet},
    traits::Parser,
    types::{CollisionPolicy, TranslationTree},
};

/// Summary of a directory merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of data rows written (one per distinct key).
    pub rows: usize,
    /// Languages whose JSON file was read.
    pub merged: Vec<LanguageCode>,
    /// Languages whose JSON file did not exist; their column is empty.
    pub missing: Vec<LanguageCode>,
}

/// What happened to one language when writing JSON files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written {
        language: LanguageCode,
        path: PathBuf,
        entries: usize,
    },
    /// The language had no values, so no file was written.
    Skipped { language: LanguageCode },
}

impl WriteOutcome {
    pub fn language(&self) -> &LanguageCode {
        match self {
            WriteOutcome::Written { language, .. } | WriteOutcome::Skipped { language } => {
                language
            }
        }
    }
}

/// Runs conversions with one language configuration.
///
/// # Example
///
/// ```rust,no_run
/// use i18ncsv::Codec;
///
/// let codec = Codec::builder().languages(["zh-TW", "en-US"])?.build();
/// let targets = codec.languages().codes().to_vec();
/// codec.merge_dir_to_csv("public/lang", "public/i18n.csv", &targets)?;
/// codec.csv_to_json_dir("public/i18n.csv", "public/lang", &targets)?;
/// # Ok::<(), i18ncsv::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Codec {
    pub(crate) languages: LanguageSet,
    pub(crate) collision: CollisionPolicy,
}

impl Codec {
    /// A codec with the default languages and [`CollisionPolicy::Reject`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CodecBuilder {
        CodecBuilder::new()
    }

    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collision
    }

    /// Checks a caller-supplied target list and puts it in configured order.
    ///
    /// Unknown codes are rejected here; use [`LanguageSet::select`] to drop them instead.
    pub fn resolve_targets(&self, targets: &[LanguageCode]) -> Result<Vec<LanguageCode>, Error> {
        if let Some(unknown) = targets.iter().find(|t| !self.languages.contains(t.as_str())) {
            return Err(Error::invalid_language(unknown.as_str()));
        }
        let resolved: Vec<LanguageCode> = self
            .languages
            .iter()
            .filter(|lang| targets.contains(lang))
            .cloned()
            .collect();
        if resolved.is_empty() {
            return Err(Error::EmptyLanguageSet);
        }
        Ok(resolved)
    }

    /// Exports one language's JSON file to a spreadsheet. Returns the number of rows.
    pub fn json_file_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
        source_language: &str,
    ) -> Result<usize, Error> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let source = self.languages.get(source_language)?;
        tracing::info!(
            event = "json_to_csv",
            input = %input.display(),
            output = %output.display(),
            language = %source
        );

        let tree = TranslationTree::read_from(input)?;
        let rows = convert_one(&tree, source).map_err(|e| Error::in_file(input, e))?;
        write_rows(output, &rows, self.languages.codes())?;

        tracing::info!(event = "csv_written", path = %output.display(), rows = rows.len());
        Ok(rows.len())
    }

    /// Reads the trees to merge: `<input_dir>/<lang>.json` for each target.
    ///
    /// A file that does not exist maps to `None`; any other read or parse failure is an error.
    pub fn read_language_dir<P: AsRef<Path>>(
        &self,
        input_dir: P,
        targets: &[LanguageCode],
    ) -> Result<HashMap<LanguageCode, Option<TranslationTree>>, Error> {
        let input_dir = input_dir.as_ref();
        let mut trees = HashMap::new();
        for lang in targets {
            let path = input_dir.join(lang.file_name());
            let tree = match TranslationTree::read_from(&path) {
                Ok(tree) => {
                    tracing::info!(event = "json_read", language = %lang, path = %path.display());
                    Some(tree)
                }
                Err(e) if is_not_found(&e) => {
                    tracing::warn!(
                        event = "json_missing",
                        language = %lang,
                        path = %path.display(),
                        "source file not found, column left empty"
                    );
                    None
                }
                Err(e) => return Err(e),
            };
            trees.insert(lang.clone(), tree);
        }
        Ok(trees)
    }

    /// Merges `<input_dir>/<lang>.json` for every target into one spreadsheet.
    ///
    /// The spreadsheet always has a column for every configured language; only the
    /// targets are filled in.
    pub fn merge_dir_to_csv<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output: Q,
        targets: &[LanguageCode],
    ) -> Result<MergeReport, Error> {
        let (input_dir, output) = (input_dir.as_ref(), output.as_ref());
        let targets = self.resolve_targets(targets)?;
        tracing::info!(
            event = "merge_start",
            input = %input_dir.display(),
            output = %output.display(),
            languages = %join_codes(&targets)
        );

        let trees = self.read_language_dir(input_dir, &targets)?;
        let rows = convert_merge(&trees, &targets)?;
        write_rows(output, &rows, self.languages.codes())?;

        let (merged, missing): (Vec<LanguageCode>, Vec<LanguageCode>) = targets
            .into_iter()
            .partition(|lang| matches!(trees.get(lang), Some(Some(_))));
        tracing::info!(event = "csv_written", path = %output.display(), rows = rows.len());
        Ok(MergeReport {
            rows: rows.len(),
            merged,
            missing,
        })
    }

    /// Splits a spreadsheet back into `<output_dir>/<lang>.json`, one per target.
    ///
    /// Languages that end up with no values are reported as
    /// [`WriteOutcome::Skipped`] and no file is written for them. Files are written
    /// one after another, so a failure can leave earlier languages already written.
    pub fn csv_to_json_dir<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_dir: Q,
        targets: &[LanguageCode],
    ) -> Result<Vec<WriteOutcome>, Error> {
        let (input, output_dir) = (input.as_ref(), output_dir.as_ref());
        let targets = self.resolve_targets(targets)?;
        tracing::info!(
            event = "csv_to_json",
            input = %input.display(),
            output = %output_dir.display(),
            languages = %join_codes(&targets)
        );

        let rows = read_rows(input, self.languages.codes())?;
        let trees =
            convert_rows(&rows, &targets, self.collision).map_err(|e| Error::in_file(input, e))?;

        let mut outcomes = Vec::with_capacity(trees.len());
        for language_tree in trees {
            let language = language_tree.language;
            if language_tree.tree.is_empty() {
                tracing::info!(event = "json_skipped", language = %language, "no values, nothing to write");
                outcomes.push(WriteOutcome::Skipped { language });
                continue;
            }

            let path = output_dir.join(language.file_name());
            language_tree.tree.write_to(&path)?;
            let entries = flatten(&language_tree.tree).len();
            tracing::info!(event = "json_written", language = %language, path = %path.display(), entries);
            outcomes.push(WriteOutcome::Written {
                language,
                path,
                entries,
            });
        }
        Ok(outcomes)
    }
}

fn is_not_found(error: &Error) -> bool {
    matches!(error.root(), Error::Io(e) if e.kind() == io::ErrorKind::NotFound)
}

fn join_codes(codes: &[LanguageCode]) -> String {
    codes
        .iter()
        .map(LanguageCode::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
