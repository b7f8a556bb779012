//! The translator spreadsheet: one row per key, one column per language.
//!
//! ```text
//! "Category","Section","Item","zh-TW","zh-CN","en-US"
//! "common","ok","","確定","","OK"
//! ```
//!
//! Every field is quoted on output and embedded quotes are doubled. Reading is
//! lenient: bare fields, `\r\n` / `\r` line endings and blank lines are accepted.
use std::{io, path::Path};

use crate::{
    error::Error,
    language::LanguageCode,
    traits::{read_text, write_bytes},
    types::Row,
};

/// Leading columns of every file, before the language columns.
pub const KEY_COLUMNS: [&str; 3] = ["Category", "Section", "Item"];

/// Serializes `rows` with one value column per entry of `languages`, in that order.
///
/// A row without a value for a language gets an empty cell. The text ends with `\n`.
pub fn encode(rows: &[Row], languages: &[LanguageCode]) -> Result<String, Error> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header: Vec<&str> = KEY_COLUMNS.to_vec();
    header.extend(languages.iter().map(LanguageCode::as_str));
    wtr.write_record(&header)?;

    for row in rows {
        let mut record: Vec<&str> = vec![
            row.category.as_str(),
            row.section.as_str(),
            row.item.as_str(),
        ];
        record.extend(
            languages
                .iter()
                .map(|lang| row.values.get(lang).map(String::as_str).unwrap_or("")),
        );
        wtr.write_record(&record)?;
    }

    let bytes = wtr.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| Error::Io(io::Error::other(e)))
}

/// Parses spreadsheet text into rows.
///
/// Language columns are found by exact, case-sensitive header match against
/// `languages`; languages without a column yield no values. Empty cells are left out
/// of [`Row::values`]. Blank lines and rows with an empty `Category` are skipped.
///
/// The header is the first non-blank line, so blank lines ahead of it are ignored
/// like blank lines anywhere else. Text with no non-blank line fails with
/// [`Error::MissingHeader`].
pub fn decode(text: &str, languages: &[LanguageCode]) -> Result<Vec<Row>, Error> {
    let normalized = normalize_line_endings(text);
    let body = normalized
        .strip_prefix('\u{feff}')
        .unwrap_or(normalized.as_str());

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());
    let mut records = rdr
        .records()
        .filter(|record| !matches!(record, Ok(r) if is_blank(r)));

    let header = records.next().ok_or(Error::MissingHeader)??;
    let columns: Vec<(LanguageCode, usize)> = languages
        .iter()
        .filter_map(|lang| {
            header
                .iter()
                .position(|name| name.trim() == lang.as_str())
                .map(|index| (lang.clone(), index))
        })
        .collect();
    tracing::debug!(
        event = "csv_header",
        columns = header.len(),
        languages = columns.len()
    );

    let mut rows = Vec::new();
    for record in records {
        let record = record?;
        let field = |index: usize| record.get(index).unwrap_or("");

        let category = field(0);
        if category.is_empty() {
            continue;
        }

        let mut row = Row::new(category, field(1), field(2));
        for (lang, index) in &columns {
            let value = field(*index);
            if !value.is_empty() {
                row.set_value(lang.clone(), value);
            }
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Reads and decodes a spreadsheet file. Errors name the file.
pub fn read_rows<P: AsRef<Path>>(path: P, languages: &[LanguageCode]) -> Result<Vec<Row>, Error> {
    let path = path.as_ref();
    read_text(path)
        .and_then(|text| decode(&text, languages))
        .map_err(|e| Error::in_file(path, e))
}

/// Encodes `rows` and overwrites `path` with the result. Errors name the file.
pub fn write_rows<P: AsRef<Path>>(
    path: P,
    rows: &[Row],
    languages: &[LanguageCode],
) -> Result<(), Error> {
    let path = path.as_ref();
    encode(rows, languages)
        .and_then(|text| write_bytes(path, text.as_bytes()))
        .map_err(|e| Error::in_file(path, e))
}

fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
