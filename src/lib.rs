//! i18n-extract - template text extractor for Vue projects
//!
//! Scans a source tree for `.vue` files, pulls the static text out of their
//! `<template>` regions and writes one resource module per component, in an
//! output tree that mirrors the source tree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and console reporting)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Region, fragment and key extraction
//! - `pipeline`: Batch run over a source tree
//! - `render`: Resource module rendering
//! - `scanner`: Source file discovery

pub mod cli;
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod render;
pub mod scanner;
