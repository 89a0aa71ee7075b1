//! Test document builders.

#![allow(dead_code)]

use acadstream::entities::{Arc, Circle, Line, Point, Text};
use acadstream::objects::{Dictionary, ObjectType, XRecord};
use acadstream::tables::{Layer, LineType};
use acadstream::{CadDocument, Color, DxfVersion, Handle, Vector3};

/// One layer, one linetype and a line referencing both with color 7
///
/// Returns the document and the handle of the line.
pub fn minimal_line_document(version: DxfVersion) -> (CadDocument, Handle) {
    let mut doc = CadDocument::with_version(version);
    let layer = doc.add_layer(Layer::new("Walls")).unwrap();
    let line_type = doc.add_line_type(LineType::dashed()).unwrap();

    let mut line = Line::from_points(Vector3::ZERO, Vector3::new(10.0, 5.0, 0.0));
    line.common.layer = Some(layer);
    line.common.line_type = Some(line_type);
    line.common.color = Color::WHITE;
    let handle = doc.add_entity(line).unwrap();
    (doc, handle)
}

/// One entity of each supported kind in model space
pub fn mixed_entities_document(version: DxfVersion) -> CadDocument {
    let mut doc = CadDocument::with_version(version);
    doc.add_entity(Point::at(Vector3::new(1.0, 1.0, 0.0))).unwrap();
    doc.add_entity(Line::from_points(Vector3::ZERO, Vector3::new(10.0, 0.0, 0.0)))
        .unwrap();
    doc.add_entity(Circle::from_center_radius(Vector3::new(5.0, 5.0, 0.0), 2.5))
        .unwrap();
    doc.add_entity(Arc::from_center_radius_angles(Vector3::ZERO, 4.0, 0.0, 180.0))
        .unwrap();
    doc.add_entity(Text::with_value("Label", Vector3::new(0.0, -2.0, 0.0), 1.5))
        .unwrap();
    doc
}

/// A chain of `depth` dictionaries hanging off the root, the last one
/// holding an XRecord. Returns every handle of the chain, outermost first.
pub fn nested_dictionary_document(depth: usize) -> (CadDocument, Vec<Handle>) {
    let mut doc = CadDocument::new();
    let mut chain = Vec::with_capacity(depth + 1);

    let mut parent = doc
        .add_named_object("LEVEL_0", Dictionary::new(Handle::NULL))
        .unwrap();
    chain.push(parent);
    for level in 1..depth {
        let child = doc.add_object(Dictionary::new(parent)).unwrap();
        add_entry(&mut doc, parent, &format!("LEVEL_{level}"), child);
        chain.push(child);
        parent = child;
    }

    let mut record = XRecord::new(parent);
    record.push(1, "leaf");
    let leaf = doc.add_object(record).unwrap();
    add_entry(&mut doc, parent, "LEAF", leaf);
    chain.push(leaf);

    (doc, chain)
}

/// Add `key -> entry` to the dictionary `dictionary`
pub fn add_entry(doc: &mut CadDocument, dictionary: Handle, key: &str, entry: Handle) {
    match doc.object_mut(dictionary) {
        Some(ObjectType::Dictionary(d)) => d.add_entry(key, entry),
        _ => panic!("{dictionary:#X} is not a dictionary"),
    }
}
