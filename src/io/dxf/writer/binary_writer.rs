//! Binary DXF writer

use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};
use encoding_rs::Encoding;

use super::stream_writer::{check_finite, check_value_type, encode_string, DxfStreamWriter};
use crate::error::{DxfError, Result};
use crate::types::{DxfVersion, Handle};

/// Binary DXF sentinel
pub(crate) const BINARY_DXF_SENTINEL: &[u8] = b"AutoCAD Binary DXF\r\n\x1a\x00";

/// Longest chunk a single binary token can carry
const MAX_CHUNK_LEN: usize = 255;

/// Escape byte in front of a 16-bit code in single-byte code streams
const EXTENDED_CODE: u8 = 255;

/// Binary DXF stream writer
///
/// R13 and later write 16-bit little-endian codes. R12 writes one byte per
/// code, with codes of 255 and above escaped by a `255` byte and written as
/// 16 bits. Strings are NUL-terminated, in the document's code page when
/// one is set.
pub struct DxfBinaryWriter<W: Write> {
    writer: W,
    single_byte_codes: bool,
    encoding: Option<&'static Encoding>,
}

impl<W: Write> DxfBinaryWriter<W> {
    /// Create a UTF-8 writer with 16-bit codes, emitting the sentinel
    /// immediately
    pub fn new(writer: W) -> Result<Self> {
        Self::with_format(writer, DxfVersion::default(), None)
    }

    /// Create a writer laid out for `version` that transcodes strings into
    /// `encoding`
    pub fn with_format(
        mut writer: W,
        version: DxfVersion,
        encoding: Option<&'static Encoding>,
    ) -> Result<Self> {
        writer.write_all(BINARY_DXF_SENTINEL)?;
        Ok(Self {
            writer,
            single_byte_codes: version.has_single_byte_binary_codes(),
            encoding,
        })
    }

    fn write_code(&mut self, code: i32) -> Result<()> {
        let wide = i16::try_from(code)
            .map_err(|_| DxfError::encoding(format!("group code {} out of range", code)))?;
        match u8::try_from(code) {
            Ok(short) if self.single_byte_codes && short != EXTENDED_CODE => {
                self.writer.write_u8(short)?
            }
            _ if self.single_byte_codes => {
                self.writer.write_u8(EXTENDED_CODE)?;
                self.writer.write_i16::<LittleEndian>(wide)?
            }
            _ => self.writer.write_i16::<LittleEndian>(wide)?,
        }
        Ok(())
    }

    /// Write a null-terminated string
    fn write_null_string(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.write_u8(0)?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DxfStreamWriter for DxfBinaryWriter<W> {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        check_value_type(code, "string", |t| t.accepts_string())?;
        if value.contains('\0') {
            return Err(DxfError::encoding(format!(
                "NUL byte in string value for group code {}",
                code
            )));
        }
        let bytes = encode_string(self.encoding, code, value)?;
        self.write_code(code)?;
        self.write_null_string(&bytes)
    }

    fn write_byte(&mut self, code: i32, value: u8) -> Result<()> {
        check_value_type(code, "byte", |t| t.accepts_integer(1))?;
        self.write_code(code)?;
        // 280-289 hold a single byte on disk
        self.writer.write_u8(value)?;
        Ok(())
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        check_value_type(code, "int16", |t| t.accepts_integer(2))?;
        self.write_code(code)?;
        self.writer.write_i16::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        check_value_type(code, "int32", |t| t.accepts_integer(4))?;
        self.write_code(code)?;
        self.writer.write_i32::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_i64(&mut self, code: i32, value: i64) -> Result<()> {
        check_value_type(code, "int64", |t| t.accepts_integer(8))?;
        self.write_code(code)?;
        self.writer.write_i64::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        check_value_type(code, "double", |t| t.accepts_double())?;
        check_finite(code, value)?;
        self.write_code(code)?;
        self.writer.write_f64::<LittleEndian>(value)?;
        Ok(())
    }

    fn write_bool(&mut self, code: i32, value: bool) -> Result<()> {
        check_value_type(code, "bool", |t| t.accepts_bool())?;
        self.write_code(code)?;
        if (60..=79).contains(&code) {
            self.writer.write_i16::<LittleEndian>(value as i16)?;
        } else {
            self.writer.write_u8(value as u8)?;
        }
        Ok(())
    }

    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        check_value_type(code, "handle", |t| t.accepts_handle())?;
        self.write_code(code)?;
        // Handles are written as hex strings even in binary DXF
        let hex = format!("{:X}", handle.value());
        self.write_null_string(hex.as_bytes())
    }

    fn write_binary(&mut self, code: i32, data: &[u8]) -> Result<()> {
        check_value_type(code, "binary chunk", |t| t.accepts_chunk())?;
        if data.len() > MAX_CHUNK_LEN {
            return Err(DxfError::encoding(format!(
                "binary chunk of {} bytes exceeds {} for group code {}",
                data.len(),
                MAX_CHUNK_LEN,
                code
            )));
        }
        self.write_code(code)?;
        self.writer.write_u8(data.len() as u8)?;
        self.writer.write_all(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
