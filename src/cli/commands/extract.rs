use std::env;

use anyhow::{Context, Result};

use super::super::{
    args::ExtractCommand,
    exit_status::ExitStatus,
    report::{
        print_config_source, print_event, print_ignored, print_no_files_warning, print_summary,
    },
};
use crate::{
    config::load_config,
    pipeline::{ExtractOptions, run_extract},
};

pub fn extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&cwd)?;
    if cmd.verbose {
        print_config_source(loaded.path.as_deref());
    }

    let options = apply_overrides(ExtractOptions::from_config(&loaded), &cmd, &cwd);
    let summary = run_extract(&options, |event| print_event(&event, cmd.verbose))?;
    if cmd.verbose {
        print_ignored(summary.ignored_count);
    }

    if summary.no_files_found() {
        print_no_files_warning(&options.input_extension, &options.source_root);
        return Ok(ExitStatus::Success);
    }

    print_summary(&summary, options.dry_run);
    Ok(ExitStatus::Success)
}

/// Command-line flags win over the config file. Flag paths are relative to `cwd`.
fn apply_overrides(
    mut options: ExtractOptions,
    cmd: &ExtractCommand,
    cwd: &std::path::Path,
) -> ExtractOptions {
    if let Some(root) = &cmd.source_root {
        options.source_root = cwd.join(root);
    }
    if let Some(root) = &cmd.output_root {
        options.output_root = cwd.join(root);
    }
    if let Some(format) = cmd.format {
        options.render.format = format;
    }
    options.dry_run = cmd.dry_run;
    options
}
