use super::SectionWriter;
use crate::document::HeaderVariables;
use crate::error::Result;
use crate::io::dxf::class_map::class_map;
use crate::io::dxf::writer::stream_writer::DxfStreamWriter;
use crate::io::dxf::DxfCode;

impl<'a, W: DxfStreamWriter + ?Sized> SectionWriter<'a, W> {
    /// Each variable is written as `9 $NAME` followed by its value
    pub(super) fn write_header(&mut self) -> Result<()> {
        let header = self.document.header_snapshot();
        let version = self.version();

        for variable in class_map::<HeaderVariables>().properties() {
            if let Some(value) = variable.emitted_value(&header, version) {
                self.writer
                    .write_string(DxfCode::CLShapeText.into(), variable.name)?;
                value.write_to(variable.code, &mut *self.writer)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::CadDocument;
    use crate::io::dxf::writer::{DxfSection, DxfToken, DxfTokenWriter, DxfWriterConfiguration};
    use crate::notification::Notifier;
    use crate::types::DxfVersion;

    fn header_variables(doc: &CadDocument) -> Vec<String> {
        let mut stream = DxfTokenWriter::new();
        let config = DxfWriterConfiguration::default();
        let mut notifier = Notifier::new();
        SectionWriter::new(&mut stream, doc, &config, &mut notifier)
            .write_section(DxfSection::Header)
            .unwrap();
        stream
            .tokens()
            .iter()
            .filter(|t| t.code == 9)
            .filter_map(DxfToken::as_str)
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_header_versioned_variables() {
        let modern = header_variables(&CadDocument::new());
        assert_eq!(
            modern,
            [
                "$ACADVER",
                "$ACADMAINTVER",
                "$DWGCODEPAGE",
                "$HANDSEED",
                "$INSUNITS",
                "$MEASUREMENT",
                "$LTSCALE",
                "$CLAYER"
            ]
        );

        let r12 = header_variables(&CadDocument::with_version(DxfVersion::AC1009));
        assert!(!r12.iter().any(|v| v == "$ACADMAINTVER" || v == "$MEASUREMENT"));
        assert!(r12.iter().any(|v| v == "$HANDSEED"));
    }

    #[test]
    fn test_version_and_seed_follow_document() {
        let mut doc = CadDocument::with_version(DxfVersion::AC1018);
        doc.header.acad_version = DxfVersion::AC1009;

        let mut stream = DxfTokenWriter::new();
        let config = DxfWriterConfiguration::default();
        let mut notifier = Notifier::new();
        SectionWriter::new(&mut stream, &doc, &config, &mut notifier)
            .write_section(DxfSection::Header)
            .unwrap();

        let tokens = stream.tokens();
        let version = tokens
            .windows(2)
            .find(|w| w[0].is(9, "$ACADVER"))
            .map(|w| w[1].clone());
        assert_eq!(version, Some(DxfToken::new(1, "AC1018".into())));

        let seed = tokens
            .windows(2)
            .find(|w| w[0].is(9, "$HANDSEED"))
            .and_then(|w| w[1].as_handle());
        assert_eq!(seed, Some(doc.handle_seed()));
    }
}
