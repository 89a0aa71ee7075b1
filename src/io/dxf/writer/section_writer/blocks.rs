use tracing::debug;

use super::SectionWriter;
use crate::error::Result;
use crate::io::dxf::writer::stream_writer::DxfStreamWriter;
use crate::tables::BlockRecord;

impl<'a, W: DxfStreamWriter + ?Sized> SectionWriter<'a, W> {
    /// One `BLOCK` ... `ENDBLK` pair per block record
    ///
    /// Model space entities go to the ENTITIES section; every other block,
    /// paper space included, carries its entities here.
    pub(super) fn write_blocks(&mut self) -> Result<()> {
        let document = self.document;
        for record in document.block_records.iter() {
            self.write_block(record)?;
        }
        Ok(())
    }

    fn write_block(&mut self, record: &BlockRecord) -> Result<()> {
        debug!(block = %record.name, entities = record.entities().len(), "writing block");

        self.write_entity_record(&record.block)?;
        if !record.is_model_space() {
            self.write_block_entities(record)?;
        }
        self.write_entity_record(&record.block_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CadDocument;
    use crate::entities::{Circle, Line};
    use crate::io::dxf::writer::{DxfSection, DxfToken, DxfTokenWriter, DxfWriterConfiguration};
    use crate::notification::Notifier;
    use crate::objects::CadObject;
    use crate::types::{Handle, Vector3};

    fn write_blocks(doc: &CadDocument) -> Result<Vec<DxfToken>> {
        let mut stream = DxfTokenWriter::new();
        let config = DxfWriterConfiguration::default();
        let mut notifier = Notifier::new();
        SectionWriter::new(&mut stream, doc, &config, &mut notifier)
            .write_section(DxfSection::Blocks)?;
        Ok(stream.into_tokens())
    }

    fn kinds(tokens: &[DxfToken]) -> Vec<&str> {
        tokens
            .iter()
            .filter(|t| t.code == 0)
            .filter_map(DxfToken::as_str)
            .collect()
    }

    #[test]
    fn test_default_blocks() {
        let tokens = write_blocks(&CadDocument::new()).unwrap();
        assert_eq!(
            kinds(&tokens),
            ["SECTION", "BLOCK", "ENDBLK", "BLOCK", "ENDBLK", "ENDSEC"]
        );
        assert!(tokens.iter().any(|t| t.is(2, "*Model_Space")));
        assert!(tokens.iter().any(|t| t.is(2, "*Paper_Space")));
    }

    #[test]
    fn test_block_entities_between_markers() {
        let mut doc = CadDocument::new();
        doc.add_block_record(BlockRecord::new("DOOR")).unwrap();
        doc.add_entity_to_block("DOOR", Line::new()).unwrap();
        doc.add_entity_to_block("DOOR", Circle::from_center_radius(Vector3::ZERO, 1.0))
            .unwrap();
        doc.add_entity(Line::new()).unwrap();

        let tokens = write_blocks(&doc).unwrap();
        assert_eq!(
            kinds(&tokens),
            [
                "SECTION", "BLOCK", "ENDBLK", "BLOCK", "ENDBLK", "BLOCK", "LINE", "CIRCLE",
                "ENDBLK", "ENDSEC"
            ]
        );
    }

    #[test]
    fn test_paper_space_entities_in_block() {
        let mut doc = CadDocument::new();
        let h = doc.add_paper_space_entity(Line::new()).unwrap();
        let tokens = write_blocks(&doc).unwrap();
        assert!(tokens.iter().any(|t| t.code == 5 && t.as_handle() == Some(h)));
    }

    #[test]
    fn test_markers_owned_by_record() {
        let mut doc = CadDocument::new();
        let record = doc.add_block_record(BlockRecord::new("DOOR")).unwrap();
        let tokens = write_blocks(&doc).unwrap();

        let block = &doc.block_records.get("DOOR").unwrap().block;
        let at = tokens
            .iter()
            .position(|t| t.code == 5 && t.as_handle() == Some(block.handle()))
            .unwrap();
        assert_eq!(tokens[at + 1].as_handle(), Some(record));
        assert_ne!(record, Handle::NULL);
    }
}
