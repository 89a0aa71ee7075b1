//! In-memory token sink
//!
//! Records every code/value pair instead of serializing it, so the exact
//! token sequence produced by a pass can be inspected.

use std::fmt;

use super::stream_writer::{check_value_type, DxfStreamWriter};
use crate::error::Result;
use crate::io::dxf::DxfValue;
use crate::types::Handle;

/// A single recorded code/value pair
#[derive(Debug, Clone, PartialEq)]
pub struct DxfToken {
    pub code: i32,
    pub value: DxfValue,
}

impl DxfToken {
    pub fn new(code: i32, value: DxfValue) -> Self {
        Self { code, value }
    }

    /// String payload, if this token carries one
    pub fn as_str(&self) -> Option<&str> {
        match &self.value {
            DxfValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Handle payload, if this token carries one
    pub fn as_handle(&self) -> Option<Handle> {
        match self.value {
            DxfValue::Handle(h) => Some(h),
            _ => None,
        }
    }

    /// Whether this is `code` carrying the string `value`
    pub fn is(&self, code: i32, value: &str) -> bool {
        self.code == code && self.as_str() == Some(value)
    }
}

impl fmt::Display for DxfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3} {}", self.code, self.value)
    }
}

/// Stream writer that keeps the tokens in a vector
#[derive(Debug, Default, Clone)]
pub struct DxfTokenWriter {
    tokens: Vec<DxfToken>,
    flushes: usize,
}

impl DxfTokenWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens recorded so far
    pub fn tokens(&self) -> &[DxfToken] {
        &self.tokens
    }

    /// Consume the writer, returning the recorded tokens
    pub fn into_tokens(self) -> Vec<DxfToken> {
        self.tokens
    }

    /// Number of times the sink was flushed
    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    fn push(&mut self, code: i32, value: DxfValue) {
        self.tokens.push(DxfToken::new(code, value));
    }
}

impl DxfStreamWriter for DxfTokenWriter {
    fn write_string(&mut self, code: i32, value: &str) -> Result<()> {
        check_value_type(code, "string", |t| t.accepts_string())?;
        self.push(code, DxfValue::String(value.to_string()));
        Ok(())
    }

    fn write_byte(&mut self, code: i32, value: u8) -> Result<()> {
        check_value_type(code, "byte", |t| t.accepts_integer(1))?;
        self.push(code, DxfValue::Byte(value));
        Ok(())
    }

    fn write_i16(&mut self, code: i32, value: i16) -> Result<()> {
        check_value_type(code, "int16", |t| t.accepts_integer(2))?;
        self.push(code, DxfValue::Int16(value));
        Ok(())
    }

    fn write_i32(&mut self, code: i32, value: i32) -> Result<()> {
        check_value_type(code, "int32", |t| t.accepts_integer(4))?;
        self.push(code, DxfValue::Int32(value));
        Ok(())
    }

    fn write_i64(&mut self, code: i32, value: i64) -> Result<()> {
        check_value_type(code, "int64", |t| t.accepts_integer(8))?;
        self.push(code, DxfValue::Int64(value));
        Ok(())
    }

    fn write_double(&mut self, code: i32, value: f64) -> Result<()> {
        check_value_type(code, "double", |t| t.accepts_double())?;
        self.push(code, DxfValue::Double(value));
        Ok(())
    }

    fn write_bool(&mut self, code: i32, value: bool) -> Result<()> {
        check_value_type(code, "bool", |t| t.accepts_bool())?;
        self.push(code, DxfValue::Bool(value));
        Ok(())
    }

    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()> {
        check_value_type(code, "handle", |t| t.accepts_handle())?;
        self.push(code, DxfValue::Handle(handle));
        Ok(())
    }

    fn write_binary(&mut self, code: i32, data: &[u8]) -> Result<()> {
        check_value_type(code, "binary chunk", |t| t.accepts_chunk())?;
        self.push(code, DxfValue::Binary(data.to_vec()));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
