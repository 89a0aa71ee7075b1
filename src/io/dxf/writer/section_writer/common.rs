//! Common-object and common-entity encoding shared by every section

use super::SectionWriter;
use crate::entities::{Entity, EntityCommon};
use crate::error::{DxfError, Result};
use crate::io::dxf::class_map::{class_map, DxfMapped};
use crate::io::dxf::writer::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::io::dxf::DxfCode;
use crate::notification::NotificationType;
use crate::objects::CadObject;
use crate::types::Handle;

impl<'a, W: DxfStreamWriter + ?Sized> SectionWriter<'a, W> {
    /// Write the data every object carries: handle, extended dictionary,
    /// reactors and owner.
    ///
    /// Fails with [`DxfError::GraphIntegrity`] when the owner is missing or
    /// the extended dictionary is not in the document.
    pub(super) fn write_common_object_data(&mut self, object: &dyn CadObject) -> Result<()> {
        let common = object.common();
        let handle = common.handle;

        self.writer.write_handle(object.handle_code(), handle)?;

        if let Some(xdictionary) = common.xdictionary {
            if self.document.object(xdictionary).is_none() {
                return Err(DxfError::graph(handle, "extension dictionary"));
            }
            self.writer.write_control_open("ACAD_XDICTIONARY")?;
            self.writer
                .write_handle(DxfCode::HardOwnerId.into(), xdictionary)?;
            self.writer.write_control_close()?;
            self.schedule(xdictionary, handle);
        }

        if !common.reactors.is_empty() {
            self.writer.write_control_open("ACAD_REACTORS")?;
            for reactor in &common.reactors {
                self.writer
                    .write_handle(DxfCode::SoftPointerId.into(), *reactor)?;
            }
            self.writer.write_control_close()?;
        }

        let owner = common.owner.ok_or_else(|| DxfError::graph(handle, "owner"))?;
        self.writer.write_handle(DxfCode::SoftPointerId.into(), owner)?;

        // Extended data is carried on the model but not encoded
        if let Some(xdata) = common.extended_data.as_ref().filter(|x| !x.is_empty()) {
            self.notify(
                NotificationType::NotImplemented,
                format!(
                    "{} extended data values of {} {:#X} are not written",
                    xdata.value_count(),
                    object.object_name(),
                    handle
                ),
            );
        }

        Ok(())
    }

    /// Write the `AcDbEntity` subclass: resources, color, transparency,
    /// linetype scale, visibility and line weight.
    pub(super) fn write_common_entity_data(&mut self, entity: &dyn Entity) -> Result<()> {
        let common = entity.entity();
        let handle = entity.handle();

        let layer = resolve(&self.layer_names, common.layer, handle, "layer")?;
        let line_type = resolve(&self.line_type_names, common.line_type, handle, "linetype")?;

        self.writer.write_subclass("AcDbEntity")?;
        // Code 67 (paper space) is not written; the owning block decides the space
        self.writer.write_string(DxfCode::LayerName.into(), layer)?;
        self.writer
            .write_string(DxfCode::LinetypeName.into(), line_type)?;

        self.write_entity_color(common)?;

        if !common.transparency.is_by_layer() {
            let alpha = (self.configuration.alpha_converter)(common.transparency);
            self.writer.write_i32(DxfCode::Transparency.into(), alpha)?;
        }

        let version = self.version();
        class_map::<EntityCommon>().write(common, version, &mut *self.writer)?;

        self.writer
            .write_i16(DxfCode::Lineweight.into(), common.line_weight.value())
    }

    /// Book color, then true color, then indexed color: exactly one branch
    fn write_entity_color(&mut self, common: &EntityCommon) -> Result<()> {
        if let Some(book) = &common.book_color {
            let (r, g, b) = book.color.rgb().ok_or_else(|| {
                DxfError::encoding(format!("book color {:?} has no RGB value", book.name))
            })?;
            self.writer
                .write_i16(DxfCode::Color.into(), book.color.approximate_index())?;
            self.writer
                .write_true_color(DxfCode::TrueColor.into(), r, g, b)?;
            self.writer.write_string(DxfCode::ColorName.into(), &book.name)
        } else if let Some((r, g, b)) = common.color.rgb() {
            self.writer.write_true_color(DxfCode::TrueColor.into(), r, g, b)
        } else {
            let index = common.color.index().unwrap_or(256);
            self.writer.write_i16(DxfCode::Color.into(), index)
        }
    }

    /// Write the mapped fields of `object` for the document version
    pub(super) fn write_mapped<T: DxfMapped>(&mut self, object: &T) -> Result<()> {
        let version = self.version();
        class_map::<T>().write(object, version, &mut *self.writer)
    }

    /// Queue a secondary object for the OBJECTS section
    pub(super) fn schedule(&mut self, handle: Handle, referenced_by: Handle) {
        if !self.queue.enqueue(handle) {
            self.notify(
                NotificationType::Warning,
                format!(
                    "object {:#X} referenced again by {:#X}; written once",
                    handle, referenced_by
                ),
            );
        }
    }
}

fn resolve<'n>(
    names: &ahash::AHashMap<Handle, &'n str>,
    reference: Option<Handle>,
    handle: Handle,
    kind: &'static str,
) -> Result<&'n str> {
    reference
        .and_then(|r| names.get(&r).copied())
        .ok_or_else(|| DxfError::graph(handle, kind))
}
