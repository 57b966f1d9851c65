//! Text extraction from component templates.
//!
//! Extraction is a three-step scan over the raw source text:
//!
//! 1. [`region`]: find every `<template>` region and join their contents
//! 2. [`fragment`]: pull trimmed inner text out of `>...<` pairs
//! 3. [`table`]: normalize placeholders and derive unique keys
//!
//! All three steps are regex based heuristics, not a markup parse.

pub mod fragment;
pub mod region;
pub mod table;

pub use fragment::text_fragments;
pub use region::{extraction_buffer, template_regions};
pub use table::{ResourceEntry, ResourceTable};

/// Extract the resource table for one source document.
///
/// Returns `None` when there is nothing to extract: the document has no
/// template region, or its regions contain no text fragment.
pub fn extract_document(source: &str) -> Option<ResourceTable> {
    let buffer = extraction_buffer(source)?;
    let fragments = text_fragments(&buffer);
    let table = ResourceTable::from_fragments(&fragments);

    if table.is_empty() { None } else { Some(table) }
}
