//! # acadstream
//!
//! A pure Rust library for writing CAD documents in DXF format.
//!
//! A [`CadDocument`] holds tables, entities and non-graphical objects in
//! handle-addressed arenas. [`DxfWriter`] walks that graph once and turns it
//! into an ordered stream of group-code/value tokens, either ASCII or binary.
//!
//! ## Features
//!
//! - ASCII and binary DXF output, R12 (AC1009) through 2018 (AC1032)
//! - Version-gated field maps per object kind
//! - Standard tables (LTYPE, LAYER, STYLE, UCS, APPID, DIMSTYLE, BLOCK_RECORD)
//! - Dictionaries and XRecords written through a breadth-first worklist
//! - Diagnostics reported through a subscribable [`Notifier`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use acadstream::{CadDocument, DxfWriter, Line, Vector3};
//!
//! let mut doc = CadDocument::new();
//! doc.add_entity(Line::from_points(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0)))?;
//!
//! let mut writer = DxfWriter::new(&doc);
//! writer.subscribe(|n| eprintln!("{}", n));
//! writer.write_to_file("output.dxf")?;
//! # Ok::<(), acadstream::DxfError>(())
//! ```
//!
//! ## Architecture
//!
//! - `CadObject` - data every graph node carries (handle, owner, reactors)
//! - `Entity` - graphical objects with layer, linetype and color
//! - `TableEntry` - named entries of the symbol tables
//! - `DxfMapped` - per-type field map consulted by the writer

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod document;
pub mod entities;
pub mod error;
pub mod io;
pub mod notification;
pub mod objects;
pub mod tables;
pub mod types;
pub mod xdata;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{
    BookColor, Color, DxfVersion, Handle, LineWeight, Transparency, Vector2, Vector3,
};

// Re-export entity types
pub use entities::{Arc, Block, BlockEnd, Circle, Entity, EntityType, Line, Point, Text};

// Re-export object types
pub use objects::{CadObject, Dictionary, ObjectType, XRecord};

// Re-export table types
pub use tables::{
    AppId, BlockRecord, DimStyle, Layer, LineType, Table, TableEntry, TextStyle, Ucs,
};

// Re-export document
pub use document::{CadDocument, HeaderVariables};

// Re-export diagnostics
pub use notification::{Notification, NotificationCollection, NotificationType, Notifier};

// Re-export I/O types
pub use io::dxf::{DxfWriter, DxfWriterConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cad_document_creation() {
        let doc = CadDocument::new();
        assert_eq!(doc.version, DxfVersion::AC1032);

        let doc2 = CadDocument::with_version(DxfVersion::AC1015);
        assert_eq!(doc2.version, DxfVersion::AC1015);
    }
}
