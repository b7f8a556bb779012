//! Nested per-language JSON files.
//!
//! Output is pretty-printed with two-space indentation and `\n` line endings on
//! every platform, without a trailing newline.

use std::io::{BufRead, Write};

use serde::Serialize;
use serde_json::{Value, ser::PrettyFormatter};

use crate::{error::Error, traits::Parser, types::TranslationTree};

impl Parser for TranslationTree {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let value: Value = serde_json::from_reader(reader)?;
        TranslationTree::from_value(value)
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let formatter = PrettyFormatter::with_indent(b"  ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        self.serialize(&mut serializer)?;
        writer.flush()?;
        Ok(())
    }
}
