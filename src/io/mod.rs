//! I/O module for writing CAD documents as DXF

pub mod dxf;

pub use dxf::{DxfWriter, DxfWriterConfiguration};
