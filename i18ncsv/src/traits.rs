//! Reading and writing documents from/to files.

use std::{
    fs,
    io::{BufRead, Cursor, Read, Write},
    path::Path,
};

use crate::error::Error;

/// A document that can be parsed from and written to one file.
///
/// # Example
///
/// ```rust,no_run
/// use i18ncsv::{TranslationTree, traits::Parser};
/// let tree = TranslationTree::read_from("lang/en-US.json")?;
/// tree.write_to("backup/en-US.json")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Parse from file path. Errors name the file.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        read_text(path)
            .and_then(|text| Self::from_str(&text))
            .map_err(|e| Error::in_file(path, e))
    }

    /// Write to file path, replacing any previous content. Errors name the file.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)
            .and_then(|()| write_bytes(path, &buffer))
            .map_err(|e| Error::in_file(path, e))
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Serialize into a string.
    fn to_text(&self) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| Error::Io(std::io::Error::other(e)))
    }
}

/// Reads a whole text file, honouring a UTF-8 or UTF-16 byte order mark.
///
/// The BOM itself is not part of the returned text.
pub(crate) fn read_text(path: &Path) -> Result<String, Error> {
    let file = fs::File::open(path)?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .strip_bom(true)
        .build(file);
    let mut text = String::new();
    decoder.read_to_string(&mut text)?;
    Ok(text)
}

/// Overwrites `path` with `bytes`, creating missing parent directories.
pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
