use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use crate::core::workflow::document::WorkflowDocument;
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Two-space pretty printer that escapes every character outside printable ASCII
/// as `\uXXXX`, so rewritten workflows diff cleanly against the previous export.
pub struct AsciiPrettyFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPrettyFormatter<'a> {
    pub fn new() -> Self {
        AsciiPrettyFormatter {
            inner: PrettyFormatter::with_indent(b"  "),
        }
    }
}

impl Default for AsciiPrettyFormatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

/// Serialize the document with the on-disk encoding (no trailing newline).
pub fn to_json_string(doc: &WorkflowDocument) -> Result<String, AppError> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, AsciiPrettyFormatter::new());
    doc.root().serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|err| {
        AppError::with_source(
            ErrorCategory::SerializationError,
            "serialized workflow is not valid UTF-8",
            err,
        )
        .with_code("WFF-SER-001")
    })
}

/// Overwrite `path` with the serialized document. The text is fully rendered
/// before the file is opened, so a serialization failure leaves the file as it was.
pub fn write_to_file(path: &Path, doc: &WorkflowDocument) -> Result<(), AppError> {
    let text = to_json_string(doc)?;
    fs::write(path, text).map_err(|err| {
        AppError::with_source(
            ErrorCategory::IoError,
            format!("failed to write {}", path.display()),
            err,
        )
        .with_code("WFF-IO-003")
        .with_context("path", path.display().to_string())
    })?;
    tracing::debug!(path = %path.display(), "workflow written");
    Ok(())
}
