use tracing::debug;

use super::SectionWriter;
use crate::error::{DxfError, Result};
use crate::io::dxf::writer::stream_writer::{DxfStreamWriter, DxfStreamWriterExt};
use crate::io::dxf::DxfCode;
use crate::notification::NotificationType;
use crate::objects::{CadObject, Dictionary, ObjectType, XRecord};

impl<'a, W: DxfStreamWriter + ?Sized> SectionWriter<'a, W> {
    /// Drain the worklist, then deal with objects nothing referenced
    pub(super) fn write_objects(&mut self) -> Result<()> {
        self.drain_queue()?;

        let document = self.document;
        for object in document.objects() {
            let handle = object.handle();
            if self.queue.was_scheduled(handle) {
                continue;
            }

            self.notify(
                NotificationType::Warning,
                format!(
                    "{} {:#X} is not reachable from the root dictionary",
                    object.as_object().object_name(),
                    handle
                ),
            );
            if self.configuration.write_orphan_objects {
                self.queue.enqueue(handle);
                self.drain_queue()?;
            }
        }
        Ok(())
    }

    fn drain_queue(&mut self) -> Result<()> {
        let document = self.document;
        let mut written = 0usize;

        while let Some(handle) = self.queue.dequeue() {
            let object = document
                .object(handle)
                .ok_or_else(|| DxfError::graph(handle, "object"))?;
            match object {
                ObjectType::Dictionary(dictionary) => self.write_dictionary(dictionary)?,
                ObjectType::XRecord(xrecord) => self.write_xrecord(xrecord)?,
            }
            written += 1;
        }

        debug!(written, scheduled = self.queue.scheduled_count(), "object queue drained");
        Ok(())
    }

    fn write_dictionary(&mut self, dictionary: &Dictionary) -> Result<()> {
        let handle = dictionary.handle();
        self.writer
            .write_string(DxfCode::Start.into(), dictionary.object_name())?;
        self.write_common_object_data(dictionary)?;
        self.write_mapped(dictionary)?;

        let entry_code = if dictionary.hard_owner {
            DxfCode::HardOwnerId
        } else {
            DxfCode::SoftOwnerId
        };
        for (key, &entry) in &dictionary.entries {
            if self.document.object(entry).is_none() {
                return Err(DxfError::graph(handle, "dictionary entry"));
            }
            self.writer.write_string(DxfCode::OtherName.into(), key)?;
            self.writer.write_handle(entry_code.into(), entry)?;
            self.schedule(entry, handle);
        }
        Ok(())
    }

    fn write_xrecord(&mut self, xrecord: &XRecord) -> Result<()> {
        self.writer
            .write_string(DxfCode::Start.into(), xrecord.object_name())?;
        self.write_common_object_data(xrecord)?;
        self.write_mapped(xrecord)?;

        for (code, value) in &xrecord.entries {
            value.write_to(*code, &mut *self.writer)?;
        }
        Ok(())
    }
}
