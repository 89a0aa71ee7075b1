//! CAD document structure

use indexmap::IndexMap;

use crate::entities::{Entity, EntityType};
use crate::error::{DxfError, Result};
use crate::io::dxf::{DxfClassMap, DxfMapped, DxfValue, DEFAULT_CODE_PAGE};
use crate::objects::{CadObject, Dictionary, ObjectType};
use crate::tables::block_record::{MODEL_SPACE, PAPER_SPACE};
use crate::tables::*;
use crate::types::{DxfVersion, Handle};

/// Drawing settings written to the HEADER section
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderVariables {
    /// ACADVER - Format version; taken from the document when written
    pub acad_version: DxfVersion,
    /// ACADMAINTVER - Maintenance version
    pub maintenance_version: i16,
    /// DWGCODEPAGE - Code page of pre-2007 text
    pub code_page: String,
    /// HANDSEED - Next available handle; taken from the document when written
    pub handle_seed: Handle,
    /// INSUNITS - Default drawing units for inserted blocks
    pub insertion_units: i16,
    /// MEASUREMENT - 0 = imperial, 1 = metric
    pub measurement: i16,
    /// LTSCALE - Global linetype scale
    pub linetype_scale: f64,
    /// CLAYER - Current layer name
    pub current_layer: String,
}

impl Default for HeaderVariables {
    fn default() -> Self {
        HeaderVariables {
            acad_version: DxfVersion::AC1032,
            maintenance_version: 0,
            code_page: DEFAULT_CODE_PAGE.to_string(),
            handle_seed: Handle::NULL,
            insertion_units: 0,
            measurement: 0,
            linetype_scale: 1.0,
            current_layer: "0".to_string(),
        }
    }
}

impl DxfMapped for HeaderVariables {
    fn build_class_map() -> DxfClassMap<Self> {
        // Property names are the header variable names written under code 9
        DxfClassMap::<Self>::builder("HEADER")
            .property(1, "$ACADVER", |h| h.acad_version.to_dxf_string().into())
            .property(70, "$ACADMAINTVER", |h| DxfValue::Int16(h.maintenance_version))
            .since(DxfVersion::AC1015)
            .property(3, "$DWGCODEPAGE", |h| h.code_page.as_str().into())
            .property(5, "$HANDSEED", |h| h.handle_seed.into())
            .property(70, "$INSUNITS", |h| DxfValue::Int16(h.insertion_units))
            .since(DxfVersion::AC1015)
            .property(70, "$MEASUREMENT", |h| DxfValue::Int16(h.measurement))
            .since(DxfVersion::AC1014)
            .property(40, "$LTSCALE", |h| h.linetype_scale.into())
            .property(8, "$CLAYER", |h| h.current_layer.as_str().into())
            .build()
    }
}

/// A CAD document: tables, entities and objects addressed by handle
#[derive(Debug, Clone)]
pub struct CadDocument {
    /// Document version
    pub version: DxfVersion,

    /// Header variables containing drawing settings
    pub header: HeaderVariables,

    /// Line type table
    pub line_types: Table<LineType>,

    /// Layer table
    pub layers: Table<Layer>,

    /// Text style table
    pub text_styles: Table<TextStyle>,

    /// UCS table
    pub ucss: Table<Ucs>,

    /// Application ID table
    pub app_ids: Table<AppId>,

    /// Dimension style table
    pub dim_styles: Table<DimStyle>,

    /// Block record table
    pub block_records: Table<BlockRecord>,

    /// All entities in the document (indexed by handle)
    entities: IndexMap<Handle, EntityType>,

    /// All non-graphical objects (indexed by handle)
    objects: IndexMap<Handle, ObjectType>,

    /// Named object dictionary
    root_dictionary: Handle,

    /// Next handle to assign
    next_handle: u64,
}

impl CadDocument {
    /// Create a new document with the standard table entries
    pub fn new() -> Self {
        let mut doc = CadDocument {
            version: DxfVersion::AC1032,
            header: HeaderVariables::default(),
            line_types: Table::new(),
            layers: Table::new(),
            text_styles: Table::new(),
            ucss: Table::new(),
            app_ids: Table::new(),
            dim_styles: Table::new(),
            block_records: Table::new(),
            entities: IndexMap::new(),
            objects: IndexMap::new(),
            root_dictionary: Handle::NULL,
            next_handle: 1,
        };

        doc.initialize_defaults();
        doc
    }

    /// Create a document with a specific version
    pub fn with_version(version: DxfVersion) -> Self {
        let mut doc = Self::new();
        doc.version = version;
        doc
    }

    fn initialize_defaults(&mut self) {
        // Root dictionary first so it gets the lowest object handle
        let root = self.allocate_handle();
        let mut root_dict = Dictionary::new(Handle::NULL);
        root_dict.common.handle = root;
        self.root_dictionary = root;
        self.objects.insert(root, root_dict.into());

        self.line_types.common.handle = self.allocate_handle();
        self.layers.common.handle = self.allocate_handle();
        self.text_styles.common.handle = self.allocate_handle();
        self.ucss.common.handle = self.allocate_handle();
        self.app_ids.common.handle = self.allocate_handle();
        self.dim_styles.common.handle = self.allocate_handle();
        self.block_records.common.handle = self.allocate_handle();

        self.add_line_type(LineType::by_block()).ok();
        self.add_line_type(LineType::by_layer()).ok();
        self.add_line_type(LineType::continuous()).ok();
        self.add_layer(Layer::layer_0()).ok();
        self.add_text_style(TextStyle::standard()).ok();
        self.add_app_id(AppId::acad()).ok();
        self.add_dim_style(DimStyle::standard()).ok();
        self.add_block_record(BlockRecord::model_space()).ok();
        self.add_block_record(BlockRecord::paper_space()).ok();

        let group = Dictionary::new(root);
        self.add_named_object("ACAD_GROUP", group).ok();
    }

    /// Allocate a new unique handle
    pub fn allocate_handle(&mut self) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        handle
    }

    /// The next handle that would be allocated (`$HANDSEED`)
    pub fn handle_seed(&self) -> Handle {
        Handle::new(self.next_handle)
    }

    /// Give an unassigned handle a fresh value and keep the seed above
    /// explicitly assigned ones
    fn claim_handle(&mut self, handle: Handle) -> Handle {
        if handle.is_null() {
            self.allocate_handle()
        } else {
            self.next_handle = self.next_handle.max(handle.value() + 1);
            handle
        }
    }

    fn register_entry<T: TableEntry>(&mut self, mut entry: T, owner: Handle) -> (T, Handle) {
        let handle = self.claim_handle(entry.handle());
        let common = entry.common_mut();
        common.handle = handle;
        common.owner = Some(owner);
        (entry, handle)
    }

    /// Add a line type
    pub fn add_line_type(&mut self, entry: LineType) -> Result<Handle> {
        self.check_unique_name(&self.line_types, &entry)?;
        let (entry, _) = self.register_entry(entry, self.line_types.handle());
        self.line_types.add(entry)
    }

    /// Add a layer
    pub fn add_layer(&mut self, entry: Layer) -> Result<Handle> {
        self.check_unique_name(&self.layers, &entry)?;
        let (entry, _) = self.register_entry(entry, self.layers.handle());
        self.layers.add(entry)
    }

    /// Add a text style
    pub fn add_text_style(&mut self, entry: TextStyle) -> Result<Handle> {
        self.check_unique_name(&self.text_styles, &entry)?;
        let (entry, _) = self.register_entry(entry, self.text_styles.handle());
        self.text_styles.add(entry)
    }

    /// Add a user coordinate system
    pub fn add_ucs(&mut self, entry: Ucs) -> Result<Handle> {
        self.check_unique_name(&self.ucss, &entry)?;
        let (entry, _) = self.register_entry(entry, self.ucss.handle());
        self.ucss.add(entry)
    }

    /// Add an application ID
    pub fn add_app_id(&mut self, entry: AppId) -> Result<Handle> {
        self.check_unique_name(&self.app_ids, &entry)?;
        let (entry, _) = self.register_entry(entry, self.app_ids.handle());
        self.app_ids.add(entry)
    }

    /// Add a dimension style
    pub fn add_dim_style(&mut self, entry: DimStyle) -> Result<Handle> {
        self.check_unique_name(&self.dim_styles, &entry)?;
        let (entry, _) = self.register_entry(entry, self.dim_styles.handle());
        self.dim_styles.add(entry)
    }

    /// Add a block record together with its BLOCK/ENDBLK markers
    pub fn add_block_record(&mut self, entry: BlockRecord) -> Result<Handle> {
        self.check_unique_name(&self.block_records, &entry)?;
        let (mut record, handle) = self.register_entry(entry, self.block_records.handle());

        let layer = self.layers.handle_of("0");
        let line_type = self.line_types.handle_of("ByLayer");
        for marker in [record.block.entity_mut(), record.block_end.entity_mut()] {
            marker.object.handle = self.claim_handle(marker.object.handle);
            marker.object.owner = Some(handle);
            marker.layer = marker.layer.or(layer);
            marker.line_type = marker.line_type.or(line_type);
        }

        self.block_records.add(record)
    }

    fn check_unique_name<T: TableEntry>(&self, table: &Table<T>, entry: &T) -> Result<()> {
        if table.contains(entry.name()) {
            return Err(DxfError::DuplicateEntry(format!(
                "{} '{}'",
                T::TABLE_NAME,
                entry.name()
            )));
        }
        Ok(())
    }

    /// Add an entity to model space
    ///
    /// A null handle is replaced by a fresh one; a missing owner, layer or
    /// linetype defaults to model space, layer "0" and "ByLayer".
    pub fn add_entity(&mut self, entity: impl Into<EntityType>) -> Result<Handle> {
        self.add_entity_to_block(MODEL_SPACE, entity)
    }

    /// Add an entity to paper space
    pub fn add_paper_space_entity(&mut self, entity: impl Into<EntityType>) -> Result<Handle> {
        self.add_entity_to_block(PAPER_SPACE, entity)
    }

    /// Add an entity to the named block
    pub fn add_entity_to_block(
        &mut self,
        block_name: &str,
        entity: impl Into<EntityType>,
    ) -> Result<Handle> {
        let mut entity = entity.into();
        let record = self
            .block_records
            .handle_of(block_name)
            .ok_or_else(|| DxfError::Custom(format!("block '{}' not found", block_name)))?;

        let requested = entity.handle();
        if !requested.is_null() && self.contains_handle(requested) {
            return Err(DxfError::InvalidHandle(requested.value()));
        }
        let handle = self.claim_handle(requested);

        let layer = self.layers.handle_of("0");
        let line_type = self.line_types.handle_of("ByLayer");
        let common = entity.as_entity_mut().entity_mut();
        common.object.handle = handle;
        common.object.owner = common.object.owner.or(Some(record));
        common.layer = common.layer.or(layer);
        common.line_type = common.line_type.or(line_type);

        if let Some(block) = self.block_records.get_mut(block_name) {
            block.push_entity(handle);
        }
        self.entities.insert(handle, entity);
        Ok(handle)
    }

    /// Get an entity by handle
    pub fn entity(&self, handle: Handle) -> Option<&EntityType> {
        self.entities.get(&handle)
    }

    /// Get a mutable entity by handle
    pub fn entity_mut(&mut self, handle: Handle) -> Option<&mut EntityType> {
        self.entities.get_mut(&handle)
    }

    /// Iterate over all entities in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &EntityType> {
        self.entities.values()
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Add a non-graphical object to the object arena
    pub fn add_object(&mut self, object: impl Into<ObjectType>) -> Result<Handle> {
        let mut object = object.into();
        let requested = object.handle();
        if !requested.is_null() && self.contains_handle(requested) {
            return Err(DxfError::InvalidHandle(requested.value()));
        }
        let handle = self.claim_handle(requested);
        object.as_object_mut().common_mut().handle = handle;
        self.objects.insert(handle, object);
        Ok(handle)
    }

    /// Add an object owned by the root dictionary under `key`
    pub fn add_named_object(&mut self, key: &str, object: impl Into<ObjectType>) -> Result<Handle> {
        let mut object = object.into();
        object.as_object_mut().common_mut().owner = Some(self.root_dictionary);
        let handle = self.add_object(object)?;
        if let Some(ObjectType::Dictionary(root)) = self.objects.get_mut(&self.root_dictionary) {
            root.add_entry(key, handle);
        }
        Ok(handle)
    }

    /// Create the extended dictionary of an entity or object
    ///
    /// Returns the existing one if the owner already has an extended
    /// dictionary.
    pub fn create_extension_dictionary(&mut self, owner: Handle) -> Result<Handle> {
        if let Some(existing) = self.common_of(owner)?.xdictionary {
            return Ok(existing);
        }
        let dict = self.add_object(Dictionary::new(owner))?;
        if let Some(entity) = self.entities.get_mut(&owner) {
            entity.as_entity_mut().common_mut().xdictionary = Some(dict);
        } else if let Some(object) = self.objects.get_mut(&owner) {
            object.as_object_mut().common_mut().xdictionary = Some(dict);
        }
        Ok(dict)
    }

    fn common_of(&self, handle: Handle) -> Result<&crate::objects::ObjectCommon> {
        if let Some(entity) = self.entities.get(&handle) {
            return Ok(entity.as_entity().common());
        }
        self.objects
            .get(&handle)
            .map(|o| o.as_object().common())
            .ok_or(DxfError::InvalidHandle(handle.value()))
    }

    /// Get an object by handle
    pub fn object(&self, handle: Handle) -> Option<&ObjectType> {
        self.objects.get(&handle)
    }

    /// Get a mutable object by handle
    pub fn object_mut(&mut self, handle: Handle) -> Option<&mut ObjectType> {
        self.objects.get_mut(&handle)
    }

    /// Iterate over all objects in insertion order
    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.objects.values()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Handle of the named object dictionary
    pub fn root_dictionary(&self) -> Handle {
        self.root_dictionary
    }

    /// Model space block record
    pub fn model_space(&self) -> Option<&BlockRecord> {
        self.block_records.get(MODEL_SPACE)
    }

    /// Paper space block record
    pub fn paper_space(&self) -> Option<&BlockRecord> {
        self.block_records.get(PAPER_SPACE)
    }

    /// Header variables as they are written: version and handle seed are
    /// taken from the document
    pub fn header_snapshot(&self) -> HeaderVariables {
        HeaderVariables {
            acad_version: self.version,
            handle_seed: self.handle_seed(),
            ..self.header.clone()
        }
    }

    fn contains_handle(&self, handle: Handle) -> bool {
        self.entities.contains_key(&handle) || self.objects.contains_key(&handle)
    }
}

impl Default for CadDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Line;
    use crate::objects::XRecord;
    use crate::types::Vector3;

    #[test]
    fn test_defaults() {
        let doc = CadDocument::new();
        assert_eq!(doc.version, DxfVersion::AC1032);
        assert!(doc.layers.contains("0"));
        assert!(doc.line_types.contains("ByLayer"));
        assert!(doc.line_types.contains("Continuous"));
        assert!(doc.text_styles.contains("Standard"));
        assert!(doc.model_space().is_some());
        assert!(doc.paper_space().is_some());

        let root = doc.object(doc.root_dictionary()).and_then(|o| o.as_dictionary());
        assert!(root.is_some_and(|d| d.get("ACAD_GROUP").is_some()));
    }

    #[test]
    fn test_entry_owners_and_handles() {
        let doc = CadDocument::new();
        let layer = doc.layers.get("0").unwrap();
        assert_eq!(layer.owner(), Some(doc.layers.handle()));
        assert!(!layer.handle().is_null());

        let ms = doc.model_space().unwrap();
        assert_eq!(ms.block.owner(), Some(ms.handle()));
        assert_eq!(ms.block_end.owner(), Some(ms.handle()));
        assert_eq!(ms.block.layer(), doc.layers.handle_of("0"));
    }

    #[test]
    fn test_add_entity_defaults_resources() {
        let mut doc = CadDocument::new();
        let handle = doc
            .add_entity(Line::from_points(Vector3::ZERO, Vector3::new(1.0, 0.0, 0.0)))
            .unwrap();

        let entity = doc.entity(handle).unwrap().as_entity();
        assert_eq!(entity.owner(), doc.model_space().map(|b| b.handle()));
        assert_eq!(entity.layer(), doc.layers.handle_of("0"));
        assert_eq!(entity.line_type(), doc.line_types.handle_of("ByLayer"));
        assert_eq!(doc.model_space().unwrap().entities(), &[handle]);
        assert!(doc.handle_seed().value() > handle.value());
    }

    #[test]
    fn test_duplicate_handle_rejected() {
        let mut doc = CadDocument::new();
        let first = doc.add_entity(Line::new()).unwrap();

        let mut line = Line::new();
        line.common.object.handle = first;
        assert!(matches!(doc.add_entity(line), Err(DxfError::InvalidHandle(_))));
    }

    #[test]
    fn test_duplicate_layer_rejected() {
        let mut doc = CadDocument::new();
        assert!(doc.add_layer(Layer::new("Walls")).is_ok());
        assert!(matches!(
            doc.add_layer(Layer::new("WALLS")),
            Err(DxfError::DuplicateEntry(_))
        ));
    }

    #[test]
    fn test_extension_dictionary() {
        let mut doc = CadDocument::new();
        let line = doc.add_entity(Line::new()).unwrap();
        let dict = doc.create_extension_dictionary(line).unwrap();

        assert_eq!(doc.entity(line).unwrap().as_entity().common().xdictionary, Some(dict));
        assert_eq!(doc.object(dict).unwrap().as_object().owner(), Some(line));
        assert_eq!(doc.create_extension_dictionary(line).unwrap(), dict);

        let xrec = doc.add_object(XRecord::new(dict)).unwrap();
        assert!(doc.object(xrec).is_some());
        assert!(doc.create_extension_dictionary(Handle::new(0xFFFF)).is_err());
    }

    #[test]
    fn test_header_snapshot() {
        let doc = CadDocument::with_version(DxfVersion::AC1015);
        let header = doc.header_snapshot();
        assert_eq!(header.acad_version, DxfVersion::AC1015);
        assert_eq!(header.handle_seed, doc.handle_seed());
    }
}
