//! ASCII DXF writer

use std::borrow::Cow;
use std::io::Write;

use encoding_rs::Encoding;

use super::stream_writer::{check_finite, check_value_type, encode_string, DxfStreamWriter};
use crate::error::{DxfError, Result};
use crate::types::Handle;

/// ASCII DXF stream writer
///
/// Each token is two lines: the group code right-aligned in a three
/// character field, then the value. Strings are transcoded into the
/// configured code page when one is set, UTF-8 otherwise.
pub struct DxfTextWriter<W: Write> {
    writer: W,
    encoding: Option<&'static Encoding>,
}

impl<W: Write> DxfTextWriter<W> {
    /// Create a new ASCII DXF writer emitting UTF-8
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            encoding: None,
        }
    }

    /// Create a writer that transcodes strings into `encoding`
    pub fn with_encoding(writer: W, encoding: Option<&'static Encoding>) -> Self {
        Self { writer, encoding }
    }

    /// Write a DXF code with proper formatting (right-aligned in 3-character field)
    fn write_code(&mut self, code: i32) -> Result<()> {
        writeln!(self.writer, "{:>3}", code)?;
        Ok(())
    }

    fn encode<'s>(&self, code: i32, value: &'s str) -> Result<Cow<'s, [u8]>> {
        if value.contains(['\n', '\r']) {
            return Err(DxfError::encoding(format!(
                "line break in string value for group code {}",
                code
            )));
        }
        encode_string(self.encoding, code, value)
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Shortest decimal text that reads back as the same double, always with a
/// decimal point; very large and very small magnitudes use `E` notation.
fn format_double(value: f64) -> String {
    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        None => shortest,
        Some((mantissa, exponent)) => {
            let point = if mantissa.contains('.') { "" } else { ".0" };
            let sign = if exponent.starts_with('-') { "" } else { "+" };
            format!("{mantissa}{point}E{sign}{exponent}")
        }
    }
}

impl<W: Write> DxfStreamWriter for DxfTextWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        check_value_type(code, "string", |t| t.accepts_string())?;
        let bytes = self.encode(code, value)?;
        self.write_code(code)?;
        self.writer.write_all(&bytes)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn write_byte(&mut self, code: i32, value: u8) -> Result<()> {
        check_value_type(code, "byte", |t| t.accepts_integer(1))?;
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        check_value_type(code, "int16", |t| t.accepts_integer(2))?;
        self.write_code(code)?;
        writeln!(self.writer, "{:>6}", value)?;
        Ok(())
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        check_value_type(code, "int32", |t| t.accepts_integer(4))?;
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_i64(&mut self, code: i32, value: i64) -> Result<()> {
        check_value_type(code, "int64", |t| t.accepts_integer(8))?;
        self.write_code(code)?;
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        check_value_type(code, "double", |t| t.accepts_double())?;
        check_finite(code, value)?;
        self.write_code(code)?;
        writeln!(self.writer, "{}", format_double(value))?;
        Ok(())
    }

    fn write_bool(&mut self, code: i32, value: bool) -> Result<()> {
        check_value_type(code, "bool", |t| t.accepts_bool())?;
        self.write_code(code)?;
        writeln!(self.writer, "{:>6}", if value { 1 } else { 0 })?;
        Ok(())
    }

    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        check_value_type(code, "handle", |t| t.accepts_handle())?;
        self.write_code(code)?;
        writeln!(self.writer, "{:X}", handle.value())?;
        Ok(())
    }

    fn write_binary(&mut self, code: i32, data: &[u8]) -> Result<()> {
        check_value_type(code, "binary chunk", |t| t.accepts_chunk())?;
        self.write_code(code)?;
        for byte in data {
            write!(self.writer, "{:02X}", byte)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
