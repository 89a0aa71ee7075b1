//! DXF section writers
//!
//! One [`SectionWriter`] runs a whole pass over a document. Each section
//! kind lives in its own file as an `impl` block on the shared writer, so
//! all of them go through the same common-object and common-entity
//! encoders in `common.rs`.

mod blocks;
mod common;
mod entities;
mod header;
mod objects;
mod tables;

use std::fmt;

use ahash::AHashMap;
use tracing::debug;

use super::object_queue::ObjectQueue;
use super::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use super::DxfWriterConfiguration;
use crate::document::CadDocument;
use crate::error::Result;
use crate::notification::{Notification, NotificationType, Notifier};
use crate::objects::CadObject;
use crate::tables::TableEntry;
use crate::types::{DxfVersion, Handle};

/// Sections of a DXF file, in file order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DxfSection {
    Header,
    Classes,
    Tables,
    Blocks,
    Entities,
    Objects,
}

impl DxfSection {
    /// All sections in the order they are written
    pub const ALL: [DxfSection; 6] = [
        DxfSection::Header,
        DxfSection::Classes,
        DxfSection::Tables,
        DxfSection::Blocks,
        DxfSection::Entities,
        DxfSection::Objects,
    ];

    /// Section name written after `0 SECTION`
    pub fn name(&self) -> &'static str {
        match self {
            DxfSection::Header => "HEADER",
            DxfSection::Classes => "CLASSES",
            DxfSection::Tables => "TABLES",
            DxfSection::Blocks => "BLOCKS",
            DxfSection::Entities => "ENTITIES",
            DxfSection::Objects => "OBJECTS",
        }
    }
}

impl fmt::Display for DxfSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Writes the sections of one document to a stream
///
/// Owns the worklist of the pass. Secondary objects discovered while
/// writing any section are queued and written in the OBJECTS section.
pub struct SectionWriter<'a, W: DxfStreamWriter + ?Sized> {
    writer: &'a mut W,
    document: &'a CadDocument,
    configuration: &'a DxfWriterConfiguration,
    notifier: &'a mut Notifier,
    queue: ObjectQueue,
    layer_names: AHashMap<Handle, &'a str>,
    line_type_names: AHashMap<Handle, &'a str>,
}

impl<'a, W: DxfStreamWriter + ?Sized> SectionWriter<'a, W> {
    /// Create a section writer for one pass over `document`
    ///
    /// The root dictionary is queued first so it heads the OBJECTS section.
    pub fn new(
        writer: &'a mut W,
        document: &'a CadDocument,
        configuration: &'a DxfWriterConfiguration,
        notifier: &'a mut Notifier,
    ) -> Self {
        let mut queue = ObjectQueue::new();
        queue.enqueue(document.root_dictionary());

        Self {
            writer,
            document,
            configuration,
            notifier,
            queue,
            layer_names: name_index(document.layers.iter()),
            line_type_names: name_index(document.line_types.iter()),
        }
    }

    /// Write one section between its `SECTION` and `ENDSEC` markers
    pub fn write_section(&mut self, section: DxfSection) -> Result<()> {
        debug!(%section, "writing section");
        self.writer.write_section_start(section.name())?;

        match section {
            DxfSection::Header => self.write_header()?,
            DxfSection::Classes => {}
            DxfSection::Tables => self.write_tables()?,
            DxfSection::Blocks => self.write_blocks()?,
            DxfSection::Entities => self.write_entities()?,
            DxfSection::Objects => self.write_objects()?,
        }

        self.writer.write_section_end()
    }

    /// Objects scheduled so far in this pass
    pub fn queue(&self) -> &ObjectQueue {
        &self.queue
    }

    fn version(&self) -> DxfVersion {
        self.document.version
    }

    fn notify(&mut self, notification_type: NotificationType, message: String) {
        self.notifier
            .notify(Notification::new(notification_type, message));
    }
}

fn name_index<'a, T: TableEntry + 'a>(entries: impl Iterator<Item = &'a T>) -> AHashMap<Handle, &'a str> {
    entries.map(|e| (e.handle(), e.name())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Circle, Line};
    use crate::io::dxf::writer::{DxfToken, DxfTokenWriter};
    use crate::types::Vector3;

    fn write_section(doc: &CadDocument, section: DxfSection) -> Result<Vec<DxfToken>> {
        let mut stream = DxfTokenWriter::new();
        let config = DxfWriterConfiguration::default();
        let mut notifier = Notifier::new();
        let mut sections = SectionWriter::new(&mut stream, doc, &config, &mut notifier);
        sections.write_section(section)?;
        Ok(stream.into_tokens())
    }

    #[test]
    fn test_section_markers() {
        let doc = CadDocument::new();
        let tokens = write_section(&doc, DxfSection::Classes).unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[0].is(0, "SECTION"));
        assert!(tokens[1].is(2, "CLASSES"));
        assert!(tokens[2].is(0, "ENDSEC"));
    }

    #[test]
    fn test_entities_in_model_space_order() {
        let mut doc = CadDocument::new();
        doc.add_entity(Line::from_points(Vector3::ZERO, Vector3::UNIT_X))
            .unwrap();
        doc.add_entity(Circle::from_center_radius(Vector3::ZERO, 2.0))
            .unwrap();

        let tokens = write_section(&doc, DxfSection::Entities).unwrap();
        let kinds: Vec<&str> = tokens
            .iter()
            .filter(|t| t.code == 0)
            .filter_map(|t| t.as_str())
            .collect();
        assert_eq!(kinds, vec!["SECTION", "LINE", "CIRCLE", "ENDSEC"]);
    }

    #[test]
    fn test_section_names() {
        let names: Vec<String> = DxfSection::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["HEADER", "CLASSES", "TABLES", "BLOCKS", "ENTITIES", "OBJECTS"]);
    }
}
