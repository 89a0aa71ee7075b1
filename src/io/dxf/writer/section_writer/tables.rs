use tracing::debug;

use super::SectionWriter;
use crate::error::{DxfError, Result};
use crate::io::dxf::writer::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::io::dxf::DxfCode;
use crate::tables::{LineType, Table, TableEntry};

impl<'a, W: DxfStreamWriter + ?Sized> SectionWriter<'a, W> {
    pub(super) fn write_tables(&mut self) -> Result<()> {
        let document = self.document;

        self.write_table_with(&document.line_types, Self::write_line_type_pattern)?;
        self.write_table(&document.layers)?;
        self.write_table(&document.text_styles)?;
        self.write_table(&document.ucss)?;
        self.write_table(&document.app_ids)?;
        self.write_table(&document.dim_styles)?;
        self.write_table(&document.block_records)
    }

    fn write_table<T: TableEntry>(&mut self, table: &Table<T>) -> Result<()> {
        self.write_table_with(table, |_, _| Ok(()))
    }

    /// Write a `TABLE` object and its entries; `entry_tail` runs after the
    /// mapped fields of each entry.
    fn write_table_with<T, F>(&mut self, table: &Table<T>, mut entry_tail: F) -> Result<()>
    where
        T: TableEntry,
        F: FnMut(&mut Self, &T) -> Result<()>,
    {
        debug!(table = T::TABLE_NAME, entries = table.len(), "writing table");

        self.writer.write_string(DxfCode::Start.into(), "TABLE")?;
        self.writer.write_string(DxfCode::Name.into(), T::TABLE_NAME)?;
        self.write_common_object_data(table)?;
        self.writer.write_subclass("AcDbSymbolTable")?;
        let count = i16::try_from(table.len()).map_err(|_| {
            DxfError::encoding(format!(
                "{} table has {} entries; code 70 holds at most {}",
                T::TABLE_NAME,
                table.len(),
                i16::MAX
            ))
        })?;
        self.writer.write_i16(DxfCode::Int70.into(), count)?;

        for entry in table.iter() {
            self.writer.write_string(DxfCode::Start.into(), T::TABLE_NAME)?;
            self.write_common_object_data(entry)?;
            self.write_mapped(entry)?;
            entry_tail(self, entry)?;
        }

        self.writer.write_string(DxfCode::Start.into(), "ENDTAB")
    }

    /// Element count (73), pattern length (40), then each element's map
    fn write_line_type_pattern(&mut self, line_type: &LineType) -> Result<()> {
        self.writer.write_i16(73, line_type.element_count()?)?;
        self.writer.write_double(40, line_type.pattern_length())?;
        for element in line_type.elements() {
            self.write_mapped(element)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CadDocument;
    use crate::error::DxfError;
    use crate::io::dxf::writer::{DxfSection, DxfToken, DxfTokenWriter, DxfWriterConfiguration};
    use crate::io::dxf::DxfValue;
    use crate::notification::Notifier;
    use crate::objects::CadObject;
    use crate::tables::{AppId, DimStyle, Layer, LineTypeElement};
    use crate::types::{DxfVersion, Handle};

    fn write_tables(doc: &CadDocument) -> Result<Vec<DxfToken>> {
        let mut stream = DxfTokenWriter::new();
        let config = DxfWriterConfiguration::default();
        let mut notifier = Notifier::new();
        SectionWriter::new(&mut stream, doc, &config, &mut notifier)
            .write_section(DxfSection::Tables)?;
        Ok(stream.into_tokens())
    }

    #[test]
    fn test_table_order() {
        let tokens = write_tables(&CadDocument::new()).unwrap();
        let tables: Vec<&str> = tokens
            .windows(2)
            .filter(|w| w[0].is(0, "TABLE"))
            .filter_map(|w| w[1].as_str())
            .collect();
        assert_eq!(
            tables,
            ["LTYPE", "LAYER", "STYLE", "UCS", "APPID", "DIMSTYLE", "BLOCK_RECORD"]
        );
        let ends = tokens.iter().filter(|t| t.is(0, "ENDTAB")).count();
        assert_eq!(ends, 7);
    }

    #[test]
    fn test_table_header_and_count() {
        let mut doc = CadDocument::new();
        doc.add_layer(Layer::new("Walls")).unwrap();
        let tokens = write_tables(&doc).unwrap();

        let start = tokens
            .windows(2)
            .position(|w| w[0].is(0, "TABLE") && w[1].is(2, "LAYER"))
            .unwrap();
        let header = &tokens[start..start + 6];
        assert_eq!(header[2], DxfToken::new(5, DxfValue::Handle(doc.layers.handle())));
        assert_eq!(header[3], DxfToken::new(330, DxfValue::Handle(Handle::NULL)));
        assert!(header[4].is(100, "AcDbSymbolTable"));
        assert_eq!(header[5], DxfToken::new(70, DxfValue::Int16(2)));
    }

    #[test]
    fn test_dimstyle_handle_code() {
        let mut doc = CadDocument::new();
        let handle = doc.add_dim_style(DimStyle::new("ISO-25")).unwrap();
        let tokens = write_tables(&doc).unwrap();
        assert!(tokens
            .iter()
            .any(|t| t.code == 105 && t.as_handle() == Some(handle)));
    }

    #[test]
    fn test_line_type_elements_follow_map() {
        let mut doc = CadDocument::new();
        doc.add_line_type(LineType::dashed()).unwrap();
        let tokens = write_tables(&doc).unwrap();

        let codes: Vec<i32> = tokens
            .iter()
            .skip_while(|t| !t.is(2, "Dashed"))
            .take_while(|t| t.code != 0)
            .map(|t| t.code)
            .filter(|c| matches!(c, 40 | 49 | 74))
            .collect();
        assert_eq!(codes, vec![40, 49, 74, 49, 74]);
    }

    #[test]
    fn test_r12_line_type_elements_without_flags() {
        let mut doc = CadDocument::with_version(DxfVersion::AC1009);
        doc.add_line_type(LineType::dashed()).unwrap();
        let tokens = write_tables(&doc).unwrap();

        let pattern: Vec<(i32, DxfValue)> = tokens
            .iter()
            .skip_while(|t| !t.is(2, "Dashed"))
            .take_while(|t| t.code != 0)
            .filter(|t| matches!(t.code, 73 | 40 | 49 | 74))
            .map(|t| (t.code, t.value.clone()))
            .collect();
        assert_eq!(
            pattern,
            vec![
                (73, DxfValue::Int16(2)),
                (40, DxfValue::Double(0.75)),
                (49, DxfValue::Double(0.5)),
                (49, DxfValue::Double(-0.25)),
            ]
        );
    }

    #[test]
    fn test_oversized_element_count_fails() {
        let mut doc = CadDocument::new();
        let mut dense = LineType::new("Dense");
        for _ in 0..=i16::MAX as usize {
            dense.add_element(LineTypeElement::dot());
        }
        doc.add_line_type(dense).unwrap();
        assert!(matches!(write_tables(&doc), Err(DxfError::Encoding(_))));
    }

    #[test]
    fn test_oversized_table_count_fails() {
        let mut doc = CadDocument::new();
        let missing = i16::MAX as usize + 1 - doc.app_ids.len();
        for i in 0..missing {
            doc.add_app_id(AppId::new(format!("APP{i}"))).unwrap();
        }
        assert_eq!(doc.app_ids.len(), i16::MAX as usize + 1);
        assert!(matches!(write_tables(&doc), Err(DxfError::Encoding(_))));
    }

    #[test]
    fn test_entry_without_owner_fails() {
        let mut doc = CadDocument::new();
        doc.layers.get_mut("0").unwrap().common_mut().owner = None;
        assert!(matches!(
            write_tables(&doc),
            Err(DxfError::GraphIntegrity { reference: "owner", .. })
        ));
    }
}
