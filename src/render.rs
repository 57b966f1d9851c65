//! Resource module rendering.
//!
//! Turns a [`ResourceTable`] into the text of the generated file. Output
//! depends only on the table and the options, so identical tables always
//! render byte-identical files.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::extract::ResourceTable;

/// Default identifier of the exported object in TypeScript modules.
pub const DEFAULT_EXPORT_NAME: &str = "documentation";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// TypeScript module with a default-exported object of template literals
    #[default]
    Ts,
    /// Plain JSON object
    Json,
}

impl OutputFormat {
    /// File extension of generated files, including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Ts => ".ts",
            OutputFormat::Json => ".json",
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub export_name: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            export_name: DEFAULT_EXPORT_NAME.to_string(),
        }
    }
}

pub fn render(table: &ResourceTable, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Ts => Ok(render_ts(table, &options.export_name)),
        OutputFormat::Json => render_json(table),
    }
}

/// Render a TypeScript module:
///
/// ```text
/// const documentation = {
///   hello: `你好`,
/// };
///
/// export default documentation;
/// ```
pub fn render_ts(table: &ResourceTable, export_name: &str) -> String {
    let mut out = format!("const {} = {{\n", export_name);
    for entry in table {
        out.push_str(&format!("  {}: {},\n", entry.key, entry.template_literal()));
    }
    out.push_str(&format!("}};\n\nexport default {};\n", export_name));
    out
}

/// Render a pretty-printed JSON object with a trailing newline.
///
/// Relies on `serde_json`'s `preserve_order` to keep table order.
pub fn render_json(table: &ResourceTable) -> Result<String> {
    let data: Map<String, Value> = table
        .into_iter()
        .map(|entry| (entry.key.clone(), Value::String(entry.text.clone())))
        .collect();

    let content =
        serde_json::to_string_pretty(&Value::Object(data)).context("Failed to serialize JSON")?;
    Ok(format!("{}\n", content))
}
