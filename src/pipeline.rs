//! Batch extraction over a source tree.
//!
//! Files are discovered up front, then processed one at a time in walk
//! order. Every I/O failure aborts the run immediately; outputs written
//! before the failure stay on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    config::ConfigLoadResult,
    extract::{ResourceTable, extract_document},
    render::{RenderOptions, render},
    scanner::scan_files,
};

/// Everything a batch run needs, with roots already resolved.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub input_extension: String,
    pub ignores: Vec<String>,
    pub render: RenderOptions,
    /// Extract and report, but write nothing.
    pub dry_run: bool,
}

impl ExtractOptions {
    pub fn from_config(loaded: &ConfigLoadResult) -> Self {
        let config = &loaded.config;
        Self {
            source_root: loaded.resolve(&config.source_root),
            output_root: loaded.resolve(&config.output_root),
            input_extension: config.input_extension.clone(),
            ignores: config.ignores.clone(),
            render: config.render_options(),
            dry_run: false,
        }
    }

    pub fn output_extension(&self) -> &'static str {
        self.render.format.extension()
    }
}

/// Progress notification for a single source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileEvent<'a> {
    Written {
        source: &'a Path,
        output: &'a Path,
        entries: usize,
    },
    /// Dry run: the file would have been written.
    Planned {
        source: &'a Path,
        output: &'a Path,
        entries: usize,
    },
    /// No template region or no text inside it.
    Skipped { source: &'a Path },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub files_found: usize,
    pub files_written: usize,
    pub files_skipped: usize,
    pub entries: usize,
    pub ignored_count: usize,
}

impl ExtractSummary {
    pub fn no_files_found(&self) -> bool {
        self.files_found == 0
    }
}

/// Run extraction over the whole source tree.
///
/// `on_event` is called once per discovered file, right after it has been
/// handled, so progress is visible even if a later file fails.
pub fn run_extract<F>(options: &ExtractOptions, on_event: F) -> Result<ExtractSummary>
where
    F: FnMut(FileEvent<'_>),
{
    let scan = scan_files(
        &options.source_root,
        &options.input_extension,
        &options.ignores,
    )?;

    let summary = process_files(options, &scan.files, on_event)?;
    Ok(ExtractSummary {
        ignored_count: scan.ignored_count,
        ..summary
    })
}

/// Extract and write already discovered `files`, in the given order.
///
/// Files are decoded as UTF-8, replacing invalid sequences. A file that
/// cannot be read at all aborts the run.
pub fn process_files<F>(
    options: &ExtractOptions,
    files: &[PathBuf],
    mut on_event: F,
) -> Result<ExtractSummary>
where
    F: FnMut(FileEvent<'_>),
{
    let mut summary = ExtractSummary {
        files_found: files.len(),
        ..Default::default()
    };

    for source in files.iter().map(PathBuf::as_path) {
        let bytes =
            fs::read(source).with_context(|| format!("Failed to read file: {}", source.display()))?;
        let content = String::from_utf8_lossy(&bytes);

        let Some(table) = extract_document(&content) else {
            summary.files_skipped += 1;
            on_event(FileEvent::Skipped { source });
            continue;
        };

        let output = output_path(
            &options.source_root,
            &options.output_root,
            source,
            &options.input_extension,
            options.output_extension(),
        )?;
        let entries = table.len();

        if options.dry_run {
            on_event(FileEvent::Planned {
                source,
                output: &output,
                entries,
            });
        } else {
            write_table(&output, &table, &options.render)?;
            on_event(FileEvent::Written {
                source,
                output: &output,
                entries,
            });
        }

        summary.files_written += 1;
        summary.entries += entries;
    }

    Ok(summary)
}

/// Mirror `source` from `source_root` into `output_root`, swapping the
/// `input_extension` suffix for `output_extension`.
///
/// `src/views/Home.vue` under `src` becomes `<output_root>/views/Home.ts`.
pub fn output_path(
    source_root: &Path,
    output_root: &Path,
    source: &Path,
    input_extension: &str,
    output_extension: &str,
) -> Result<PathBuf> {
    let relative = source.strip_prefix(source_root).with_context(|| {
        format!(
            "{} is not inside {}",
            source.display(),
            source_root.display()
        )
    })?;

    let file_name = relative
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Invalid file name: {}", source.display()))?;
    let stem = file_name.strip_suffix(input_extension).unwrap_or(file_name);

    Ok(output_root
        .join(relative)
        .with_file_name(format!("{}{}", stem, output_extension)))
}

/// Render `table` and write it to `path`, creating parent directories.
pub fn write_table(path: &Path, table: &ResourceTable, options: &RenderOptions) -> Result<()> {
    let content = render(table, options)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
