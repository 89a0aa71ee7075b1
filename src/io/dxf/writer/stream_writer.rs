//! DXF stream writer trait and common types

use std::borrow::Cow;

use encoding_rs::Encoding;

use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfCode, GroupCodeValueType};
use crate::types::{Handle, Vector2, Vector3};

/// Sink for DXF code/value pairs.
///
/// Every call appends exactly one token in call order. Implementations
/// reject a value whose kind is not legal for the code's declared value
/// type with [`DxfError::Encoding`].
pub trait DxfStreamWriter {
    /// Write a code/value pair with a string value
    fn write_string(&mut self, code: i32, value: &str) -> Result<()>;

    /// Write a code/value pair with a byte value (for codes 280-289)
    fn write_byte(&mut self, code: i32, value: u8) -> Result<()>;

    /// Write a code/value pair with an integer value
    fn write_i16(&mut self, code: i32, value: i16) -> Result<()>;

    /// Write a code/value pair with an i32 value
    fn write_i32(&mut self, code: i32, value: i32) -> Result<()>;

    /// Write a code/value pair with an i64 value
    fn write_i64(&mut self, code: i32, value: i64) -> Result<()>;

    /// Write a code/value pair with a double value
    fn write_double(&mut self, code: i32, value: f64) -> Result<()>;

    /// Write a code/value pair with a boolean value
    fn write_bool(&mut self, code: i32, value: bool) -> Result<()>;

    /// Write a code/value pair with a handle value
    fn write_handle(&mut self, code: i32, handle: Handle) -> Result<()>;

    /// Write binary data
    fn write_binary(&mut self, code: i32, data: &[u8]) -> Result<()>;

    /// Flush the writer
    fn flush(&mut self) -> Result<()>;
}

/// Extension trait for convenient writing operations
pub trait DxfStreamWriterExt: DxfStreamWriter {
    /// Write a 2D point (codes 10/20 or similar)
    fn write_point2d(&mut self, x_code: i32, point: Vector2) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        Ok(())
    }

    /// Write a 3D point (codes 10/20/30 or similar)
    fn write_point3d(&mut self, x_code: i32, point: Vector3) -> Result<()> {
        self.write_double(x_code, point.x)?;
        self.write_double(x_code + 10, point.y)?;
        self.write_double(x_code + 20, point.z)?;
        Ok(())
    }

    /// Write an RGB triple as a packed 24-bit true color
    fn write_true_color(&mut self, code: i32, r: u8, g: u8, b: u8) -> Result<()> {
        let value = ((r as i32) << 16) | ((g as i32) << 8) | (b as i32);
        self.write_i32(code, value)
    }

    /// Write a subclass marker
    fn write_subclass(&mut self, marker: &str) -> Result<()> {
        self.write_string(DxfCode::SubclassMarker.into(), marker)
    }

    /// Open a `{NAME` control group
    fn write_control_open(&mut self, name: &str) -> Result<()> {
        self.write_string(DxfCode::ControlString.into(), &format!("{{{}", name))
    }

    /// Close a control group
    fn write_control_close(&mut self) -> Result<()> {
        self.write_string(DxfCode::ControlString.into(), "}")
    }

    /// Write section start
    fn write_section_start(&mut self, section_name: &str) -> Result<()> {
        self.write_string(DxfCode::Start.into(), "SECTION")?;
        self.write_string(DxfCode::Name.into(), section_name)?;
        Ok(())
    }

    /// Write section end
    fn write_section_end(&mut self) -> Result<()> {
        self.write_string(DxfCode::Start.into(), "ENDSEC")
    }

    /// Write end of file
    fn write_eof(&mut self) -> Result<()> {
        self.write_string(DxfCode::Start.into(), "EOF")
    }
}

// Auto-implement the extension trait for all stream writers
impl<T: DxfStreamWriter + ?Sized> DxfStreamWriterExt for T {}

/// Helper to determine value type from code for writing
pub fn value_type_for_code(code: i32) -> GroupCodeValueType {
    GroupCodeValueType::from_code(code)
}

/// Reject a value whose kind the code does not declare.
pub(crate) fn check_value_type(
    code: i32,
    kind: &'static str,
    accepts: impl FnOnce(GroupCodeValueType) -> bool,
) -> Result<()> {
    let value_type = value_type_for_code(code);
    if accepts(value_type) {
        Ok(())
    } else {
        Err(DxfError::encoding(format!(
            "group code {} declares {} values, got {}",
            code, value_type, kind
        )))
    }
}

/// String bytes in `encoding`, UTF-8 when `None`.
///
/// A character the code page cannot represent is an error, never a
/// substitution.
pub(crate) fn encode_string<'s>(
    encoding: Option<&'static Encoding>,
    code: i32,
    value: &'s str,
) -> Result<Cow<'s, [u8]>> {
    let Some(encoding) = encoding else {
        return Ok(Cow::Borrowed(value.as_bytes()));
    };
    let (bytes, _, had_errors) = encoding.encode(value);
    if had_errors {
        return Err(DxfError::encoding(format!(
            "{:?} is not representable in {} (group code {})",
            value,
            encoding.name(),
            code
        )));
    }
    Ok(bytes)
}

/// Reject NaN and infinities
pub(crate) fn check_finite(code: i32, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DxfError::encoding(format!(
            "non-finite value {} for group code {}",
            value, code
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value_type() {
        assert!(check_value_type(8, "string", |t| t.accepts_string()).is_ok());
        assert!(check_value_type(330, "handle", |t| t.accepts_handle()).is_ok());

        let err = check_value_type(62, "string", |t| t.accepts_string()).unwrap_err();
        assert!(err.to_string().contains("group code 62"));
    }
}
