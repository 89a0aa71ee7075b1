//! Shared test utilities for acadstream integration tests.
//!
//! Token helpers (encode, slice by section, find records) and the document
//! builders every test crate imports via `mod common;`.

#![allow(dead_code)]

pub mod builders;

use acadstream::io::dxf::DxfToken;
use acadstream::{CadDocument, DxfWriter, DxfWriterConfiguration, Handle, NotificationCollection};

/// Encode `doc` with the default configuration and return the tokens
pub fn write_tokens(doc: &CadDocument) -> Vec<DxfToken> {
    DxfWriter::new(doc)
        .write_tokens()
        .expect("document should encode")
}

/// Encode `doc` and return the tokens with the notifications of the pass
pub fn write_tokens_with(
    doc: &CadDocument,
    configuration: DxfWriterConfiguration,
) -> (Vec<DxfToken>, NotificationCollection) {
    let mut writer = DxfWriter::new(doc).with_configuration(configuration);
    let tokens = writer.write_tokens().expect("document should encode");
    (tokens, writer.notifications().clone())
}

/// Tokens between `0 SECTION / 2 name` and the matching `0 ENDSEC`,
/// markers excluded
pub fn section<'t>(tokens: &'t [DxfToken], name: &str) -> &'t [DxfToken] {
    let start = tokens
        .windows(2)
        .position(|w| w[0].is(0, "SECTION") && w[1].is(2, name))
        .unwrap_or_else(|| panic!("section {name} not found"))
        + 2;
    let len = tokens[start..]
        .iter()
        .position(|t| t.is(0, "ENDSEC"))
        .unwrap_or_else(|| panic!("section {name} not closed"));
    &tokens[start..start + len]
}

/// Position of the first token in `tokens` starting section `name`
pub fn section_start(tokens: &[DxfToken], name: &str) -> usize {
    tokens
        .windows(2)
        .position(|w| w[0].is(0, "SECTION") && w[1].is(2, name))
        .unwrap_or_else(|| panic!("section {name} not found"))
}

/// The record (from `0 kind` up to the next code 0) whose handle is `handle`
pub fn record(tokens: &[DxfToken], handle: Handle) -> &[DxfToken] {
    let start = tokens
        .windows(2)
        .position(|w| w[0].code == 0 && matches!(w[1].code, 5 | 105) && w[1].as_handle() == Some(handle))
        .unwrap_or_else(|| panic!("record {handle:#X} not found"));
    let len = tokens[start + 1..]
        .iter()
        .position(|t| t.code == 0)
        .map_or(tokens.len() - start, |p| p + 1);
    &tokens[start..start + len]
}

/// Every handle written under code 5 or 105
pub fn emitted_handles(tokens: &[DxfToken]) -> Vec<Handle> {
    tokens
        .iter()
        .filter(|t| t.code == 5 || t.code == 105)
        .filter_map(DxfToken::as_handle)
        .collect()
}

/// Codes of a token slice, in order
pub fn codes(tokens: &[DxfToken]) -> Vec<i32> {
    tokens.iter().map(|t| t.code).collect()
}
