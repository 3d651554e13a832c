//! JSON rendering of a [`FlashPointReport`].
//!
//! The default style is a single line with `": "` after keys and `", "`
//! between elements, for example
//! `{"50-00-0": ["-16 °C (closed cup)"], "64-17-5": []}`. Non-ASCII text is
//! written as UTF-8, not escaped.

use crate::report::FlashPointReport;
use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io::{self, Write};

/// How the report is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// One line, spaced separators
    #[default]
    Line,
    /// Indented, one element per line
    Pretty,
}

/// Single-line formatter with a space after each `:` and `,`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}

/// Serialize `report` to bytes, without a trailing newline.
pub fn to_vec(report: &FlashPointReport, style: OutputStyle) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    match style {
        OutputStyle::Line => {
            report.serialize(&mut Serializer::with_formatter(&mut buf, SpacedFormatter))?;
        }
        OutputStyle::Pretty => {
            report.serialize(&mut Serializer::with_formatter(
                &mut buf,
                PrettyFormatter::new(),
            ))?;
        }
    }
    Ok(buf)
}

/// Write `report` followed by a newline and flush.
pub fn write_report<W: Write>(
    mut writer: W,
    report: &FlashPointReport,
    style: OutputStyle,
) -> io::Result<()> {
    let mut bytes = to_vec(report, style)?;
    bytes.push(b'\n');
    writer.write_all(&bytes)?;
    writer.flush()
}
