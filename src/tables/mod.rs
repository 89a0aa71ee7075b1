//! CAD table types and management

use indexmap::IndexMap;

use crate::error::{DxfError, Result};
use crate::io::dxf::DxfMapped;
use crate::objects::{CadObject, ObjectCommon};
use crate::types::Handle;

pub mod appid;
pub mod block_record;
pub mod dimstyle;
pub mod layer;
pub mod linetype;
pub mod textstyle;
pub mod ucs;

pub use appid::AppId;
pub use block_record::BlockRecord;
pub use dimstyle::DimStyle;
pub use layer::{Layer, LayerFlags};
pub use linetype::{LineType, LineTypeElement};
pub use textstyle::{TextGenerationFlags, TextStyle};
pub use ucs::{OrthographicType, Ucs};

/// Base trait for all table entries
pub trait TableEntry: CadObject + DxfMapped {
    /// Name of the table holding this kind of entry (`LAYER`, `LTYPE`, ...)
    const TABLE_NAME: &'static str;

    /// Get the entry's name
    fn name(&self) -> &str;

    /// Check if this is a standard/default entry
    fn is_standard(&self) -> bool {
        false
    }
}

/// Implements [`CadObject`] for a table entry with a `common: ObjectCommon`
/// field, using the table name as the object name.
macro_rules! impl_table_object {
    ($ty:ty) => {
        impl $crate::objects::CadObject for $ty {
            fn common(&self) -> &$crate::objects::ObjectCommon {
                &self.common
            }

            fn common_mut(&mut self) -> &mut $crate::objects::ObjectCommon {
                &mut self.common
            }

            fn object_name(&self) -> &'static str {
                <$ty as $crate::tables::TableEntry>::TABLE_NAME
            }
        }
    };
}

pub(crate) use impl_table_object;

/// Symbol table: the `TABLE` object and its named entries
#[derive(Debug, Clone)]
pub struct Table<T: TableEntry> {
    /// Data of the `TABLE` object itself
    pub common: ObjectCommon,
    /// Entries stored by name (case-insensitive)
    entries: IndexMap<String, T>,
}

impl<T: TableEntry> Table<T> {
    /// Create a new empty table owned by the document root
    pub fn new() -> Self {
        Table {
            common: ObjectCommon::owned_by(Handle::NULL),
            entries: IndexMap::new(),
        }
    }

    /// Create a table with a specific handle
    pub fn with_handle(handle: Handle) -> Self {
        let mut table = Self::new();
        table.common.handle = handle;
        table
    }

    /// Get the table's handle
    pub fn handle(&self) -> Handle {
        self.common.handle
    }

    /// Add an entry to the table
    pub fn add(&mut self, entry: T) -> Result<Handle> {
        let key = entry.name().to_uppercase();
        if self.entries.contains_key(&key) {
            return Err(DxfError::DuplicateEntry(format!(
                "{} '{}'",
                T::TABLE_NAME,
                entry.name()
            )));
        }
        let handle = entry.handle();
        self.entries.insert(key, entry);
        Ok(handle)
    }

    /// Get an entry by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.get(&name.to_uppercase())
    }

    /// Get a mutable entry by name (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(&name.to_uppercase())
    }

    /// Find an entry by its handle
    pub fn by_handle(&self, handle: Handle) -> Option<&T> {
        self.entries.values().find(|e| e.handle() == handle)
    }

    /// Handle of the entry with the given name
    pub fn handle_of(&self, name: &str) -> Option<Handle> {
        self.get(name).map(|e| e.handle())
    }

    /// Check if an entry exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.values()
    }

    /// Iterate over all entries mutably
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    /// Get all entry names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name())
    }
}

impl<T: TableEntry> Default for Table<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TableEntry> CadObject for Table<T> {
    fn common(&self) -> &ObjectCommon {
        &self.common
    }

    fn common_mut(&mut self) -> &mut ObjectCommon {
        &mut self.common
    }

    fn object_name(&self) -> &'static str {
        "TABLE"
    }
}
