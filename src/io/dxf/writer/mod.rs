//! DXF writer module

mod binary_writer;
mod object_queue;
mod section_writer;
mod stream_writer;
mod text_writer;
mod token_writer;

pub use binary_writer::DxfBinaryWriter;
pub use object_queue::ObjectQueue;
pub use section_writer::{DxfSection, SectionWriter};
pub use stream_writer::{value_type_for_code, DxfStreamWriter, DxfStreamWriterExt};
pub use text_writer::DxfTextWriter;
pub use token_writer::{DxfToken, DxfTokenWriter};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use super::code_page::output_encoding;
use crate::document::CadDocument;
use crate::error::{DxfError, Result};
use crate::notification::{Notification, NotificationCollection, Notifier};
use crate::types::{DxfVersion, Transparency};

/// Configuration for writing DXF files
#[derive(Debug, Clone)]
pub struct DxfWriterConfiguration {
    /// Write binary DXF instead of ASCII
    pub binary: bool,
    /// Converts an entity transparency into the value written under code 440
    pub alpha_converter: fn(Transparency) -> i32,
    /// Write objects that are not reachable from the root dictionary
    pub write_orphan_objects: bool,
    /// Terminate the stream with `EOF`
    pub close_stream: bool,
}

impl Default for DxfWriterConfiguration {
    fn default() -> Self {
        Self {
            binary: false,
            alpha_converter: Transparency::to_alpha_value,
            write_orphan_objects: false,
            close_stream: true,
        }
    }
}

/// DXF file writer
///
/// Borrows the document for the whole pass; each call to one of the
/// `write_*` methods is an independent pass with its own worklist.
pub struct DxfWriter<'a> {
    document: &'a CadDocument,
    configuration: DxfWriterConfiguration,
    notifier: Notifier,
}

impl<'a> DxfWriter<'a> {
    /// Create a new DXF writer for ASCII output
    pub fn new(document: &'a CadDocument) -> Self {
        Self {
            document,
            configuration: DxfWriterConfiguration::default(),
            notifier: Notifier::new(),
        }
    }

    /// Create a new DXF writer for binary output
    pub fn new_binary(document: &'a CadDocument) -> Self {
        Self::new(document).with_configuration(DxfWriterConfiguration {
            binary: true,
            ..Default::default()
        })
    }

    /// Replace the writer configuration
    pub fn with_configuration(mut self, configuration: DxfWriterConfiguration) -> Self {
        self.configuration = configuration;
        self
    }

    pub fn configuration(&self) -> &DxfWriterConfiguration {
        &self.configuration
    }

    /// Set whether to write binary format
    pub fn set_binary(&mut self, binary: bool) {
        self.configuration.binary = binary;
    }

    /// Register an observer for diagnostics raised while writing
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&Notification) + 'static,
    {
        self.notifier.subscribe(observer);
    }

    /// Notifications raised by all passes so far
    pub fn notifications(&self) -> &NotificationCollection {
        self.notifier.history()
    }

    /// Get a reference to the document
    pub fn document(&self) -> &CadDocument {
        self.document
    }

    /// Write to a file
    pub fn write_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.write_to_writer(writer)
    }

    /// Write to any writer
    pub fn write_to_writer<W: Write>(&mut self, writer: W) -> Result<()> {
        let version = self.document.version;
        let encoding = output_encoding(version, &self.document.header.code_page);
        if self.configuration.binary {
            let mut stream_writer = DxfBinaryWriter::with_format(writer, version, encoding)?;
            self.write(&mut stream_writer)
        } else {
            let mut stream_writer = DxfTextWriter::with_encoding(writer, encoding);
            self.write(&mut stream_writer)
        }
    }

    /// Write to a byte vector
    pub fn write_to_vec(&mut self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_to_writer(&mut buffer)?;
        Ok(buffer)
    }

    /// Encode the document into an in-memory token list
    pub fn write_tokens(&mut self) -> Result<Vec<DxfToken>> {
        let mut stream_writer = DxfTokenWriter::new();
        self.write(&mut stream_writer)?;
        Ok(stream_writer.into_tokens())
    }

    /// Run one serialization pass against `stream`
    ///
    /// On error the stream holds a partial document and must be discarded.
    pub fn write<S: DxfStreamWriter + ?Sized>(&mut self, stream: &mut S) -> Result<()> {
        let version = self.document.version;
        if version == DxfVersion::Unknown {
            return Err(DxfError::UnsupportedVersion(version.to_dxf_string().to_string()));
        }
        debug!(version = %version.to_dxf_string(), "writing DXF document");

        {
            let mut sections = SectionWriter::new(
                &mut *stream,
                self.document,
                &self.configuration,
                &mut self.notifier,
            );
            for section in DxfSection::ALL {
                sections.write_section(section)?;
            }
        }

        if self.configuration.close_stream {
            stream.write_eof()?;
        }
        stream.flush()
    }
}

/// Convenience function to write a document to an ASCII DXF file
pub fn write_dxf<P: AsRef<Path>>(document: &CadDocument, path: P) -> Result<()> {
    DxfWriter::new(document).write_to_file(path)
}

/// Convenience function to write a document to a binary DXF file
pub fn write_binary_dxf<P: AsRef<Path>>(document: &CadDocument, path: P) -> Result<()> {
    DxfWriter::new_binary(document).write_to_file(path)
}
