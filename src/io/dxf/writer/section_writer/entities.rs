use super::SectionWriter;
use crate::entities::{Entity, EntityType};
use crate::error::{DxfError, Result};
use crate::io::dxf::class_map::DxfMapped;
use crate::io::dxf::writer::stream_writer::DxfStreamWriter;
use crate::io::dxf::DxfCode;
use crate::objects::CadObject;
use crate::tables::BlockRecord;
use crate::types::Handle;

impl<'a, W: DxfStreamWriter + ?Sized> SectionWriter<'a, W> {
    pub(super) fn write_entities(&mut self) -> Result<()> {
        if let Some(model_space) = self.document.model_space() {
            self.write_block_entities(model_space)?;
        }
        Ok(())
    }

    /// Write the entities listed by a block record, in drawing order
    pub(super) fn write_block_entities(&mut self, record: &BlockRecord) -> Result<()> {
        for &handle in record.entities() {
            self.write_entity(handle, record.handle())?;
        }
        Ok(())
    }

    fn write_entity(&mut self, handle: Handle, block: Handle) -> Result<()> {
        let document = self.document;
        let entity = document
            .entity(handle)
            .ok_or_else(|| DxfError::graph(block, "entity"))?;

        match entity {
            EntityType::Point(e) => self.write_entity_record(e),
            EntityType::Line(e) => self.write_entity_record(e),
            EntityType::Circle(e) => self.write_entity_record(e),
            EntityType::Arc(e) => self.write_entity_record(e),
            EntityType::Text(e) => self.write_entity_record(e),
        }
    }

    /// `0 NAME`, common object data, the `AcDbEntity` subclass and the
    /// mapped fields of the concrete type
    pub(super) fn write_entity_record<E: Entity + DxfMapped>(&mut self, entity: &E) -> Result<()> {
        self.writer
            .write_string(DxfCode::Start.into(), entity.object_name())?;
        self.write_common_object_data(entity)?;
        self.write_common_entity_data(entity)?;
        self.write_mapped(entity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CadDocument;
    use crate::entities::{Arc, Circle, Line, Point, Text};
    use crate::io::dxf::writer::{DxfSection, DxfToken, DxfTokenWriter, DxfWriterConfiguration};
    use crate::io::dxf::DxfValue;
    use crate::notification::Notifier;
    use crate::tables::block_record::MODEL_SPACE;
    use crate::types::{DxfVersion, Vector3};

    fn write_entities(doc: &CadDocument) -> Result<Vec<DxfToken>> {
        let mut stream = DxfTokenWriter::new();
        let config = DxfWriterConfiguration::default();
        let mut notifier = Notifier::new();
        SectionWriter::new(&mut stream, doc, &config, &mut notifier)
            .write_section(DxfSection::Entities)?;
        Ok(stream.into_tokens())
    }

    #[test]
    fn test_line_record_layout() {
        let mut doc = CadDocument::new();
        let h = doc
            .add_entity(Line::from_points(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0)))
            .unwrap();
        let tokens = write_entities(&doc).unwrap();
        let owner = doc.model_space().unwrap().handle();

        let body: Vec<DxfToken> = tokens[2..tokens.len() - 1].to_vec();
        let expected = vec![
            DxfToken::new(0, "LINE".into()),
            DxfToken::new(5, DxfValue::Handle(h)),
            DxfToken::new(330, DxfValue::Handle(owner)),
            DxfToken::new(100, "AcDbEntity".into()),
            DxfToken::new(8, "0".into()),
            DxfToken::new(6, "ByLayer".into()),
            DxfToken::new(62, DxfValue::Int16(256)),
            DxfToken::new(370, DxfValue::Int16(-1)),
            DxfToken::new(100, "AcDbLine".into()),
            DxfToken::new(10, DxfValue::Double(0.0)),
            DxfToken::new(20, DxfValue::Double(0.0)),
            DxfToken::new(30, DxfValue::Double(0.0)),
            DxfToken::new(11, DxfValue::Double(10.0)),
            DxfToken::new(21, DxfValue::Double(0.0)),
            DxfToken::new(31, DxfValue::Double(0.0)),
        ];
        assert_eq!(body, expected);
    }

    #[test]
    fn test_every_kind_dispatched() {
        let mut doc = CadDocument::new();
        doc.add_entity(Point::at(Vector3::ZERO)).unwrap();
        doc.add_entity(Line::new()).unwrap();
        doc.add_entity(Circle::from_center_radius(Vector3::ZERO, 1.0)).unwrap();
        doc.add_entity(Arc::from_center_radius_angles(Vector3::ZERO, 1.0, 0.0, 90.0))
            .unwrap();
        doc.add_entity(Text::with_value("hi", Vector3::ZERO, 2.5)).unwrap();

        let tokens = write_entities(&doc).unwrap();
        let kinds: Vec<&str> = tokens
            .iter()
            .filter(|t| t.code == 0)
            .filter_map(DxfToken::as_str)
            .collect();
        assert_eq!(kinds, ["SECTION", "POINT", "LINE", "CIRCLE", "ARC", "TEXT", "ENDSEC"]);
    }

    #[test]
    fn test_paper_space_entities_not_in_entities_section() {
        let mut doc = CadDocument::new();
        doc.add_paper_space_entity(Line::new()).unwrap();
        let tokens = write_entities(&doc).unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_dangling_entity_handle() {
        let mut doc = CadDocument::new();
        doc.block_records
            .get_mut(MODEL_SPACE)
            .unwrap()
            .push_entity(Handle::new(0xBEEF));
        assert!(matches!(
            write_entities(&doc),
            Err(DxfError::GraphIntegrity { reference: "entity", .. })
        ));
    }

    #[test]
    fn test_r12_line_has_no_scale() {
        let mut doc = CadDocument::with_version(DxfVersion::AC1009);
        let h = doc.add_entity(Line::new()).unwrap();
        if let Some(EntityType::Line(line)) = doc.entity_mut(h) {
            line.common.linetype_scale = 3.0;
        }
        let tokens = write_entities(&doc).unwrap();
        assert!(tokens.iter().all(|t| t.code != 48));
    }
}
