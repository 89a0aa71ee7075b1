//! Error types for acadstream

use std::io;
use thiserror::Error;

use crate::types::Handle;

/// Main error type for acadstream operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// IO error occurred while writing to the destination stream
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A mandatory reference (owner, layer, linetype, dictionary entry) is
    /// missing or does not resolve inside the document graph.
    #[error("Graph integrity error: object {handle:#X} has no valid {reference}")]
    GraphIntegrity {
        /// Handle of the object being encoded
        handle: Handle,
        /// Name of the broken reference
        reference: &'static str,
    },

    /// A value cannot be represented under the destination token rules
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Unsupported CAD file version
    #[error("Unsupported CAD version: {0:?}")]
    UnsupportedVersion(String),

    /// Invalid handle reference
    #[error("Invalid handle: {0:#X}")]
    InvalidHandle(u64),

    /// Duplicate entry in a named table
    #[error("Duplicate table entry: {0}")]
    DuplicateEntry(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

impl DxfError {
    /// Shorthand for a [`DxfError::GraphIntegrity`] error
    pub fn graph(handle: Handle, reference: &'static str) -> Self {
        DxfError::GraphIntegrity { handle, reference }
    }

    /// Shorthand for a [`DxfError::Encoding`] error
    pub fn encoding(message: impl Into<String>) -> Self {
        DxfError::Encoding(message.into())
    }

    /// Whether this error aborts the whole pass (as opposed to an I/O error
    /// raised by the sink itself)
    pub fn is_structural(&self) -> bool {
        matches!(self, DxfError::GraphIntegrity { .. } | DxfError::Encoding(_))
    }
}

/// Result type alias for acadstream operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}
