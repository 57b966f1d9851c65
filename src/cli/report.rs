//! Console output for the CLI.
//!
//! Kept out of the library so the extraction pipeline can be used without
//! printing anything.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use crate::pipeline::{ExtractSummary, FileEvent};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a file event. Skipped files are only reported when `verbose`.
pub fn print_event(event: &FileEvent<'_>, verbose: bool) {
    match event {
        FileEvent::Skipped { .. } => {
            if verbose {
                print_event_to(event, &mut io::stderr().lock());
            }
        }
        _ => print_event_to(event, &mut io::stdout().lock()),
    }
}

pub fn print_event_to<W: Write>(event: &FileEvent<'_>, writer: &mut W) {
    let line = match event {
        FileEvent::Written { output, .. } => format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Generated: {}", output.display()).green()
        ),
        FileEvent::Planned {
            output, entries, ..
        } => format!(
            "Would generate: {} ({} {})",
            output.display(),
            entries,
            plural(*entries, "entry", "entries")
        ),
        FileEvent::Skipped { source } => format!(
            "{} {} (no template text)",
            "skipped:".dimmed(),
            source.display()
        ),
    };
    let _ = writeln!(writer, "{}", line);
}

/// Print the warning for a source tree without any eligible file.
pub fn print_no_files_warning(extension: &str, root: &Path) {
    print_no_files_warning_to(extension, root, &mut io::stderr().lock());
}

pub fn print_no_files_warning_to<W: Write>(extension: &str, root: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} no {} files found under {}",
        "warning:".bold().yellow(),
        extension,
        root.display()
    );
}

/// Print the closing summary line of a run.
pub fn print_summary(summary: &ExtractSummary, dry_run: bool) {
    print_summary_to(summary, dry_run, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &ExtractSummary, dry_run: bool, writer: &mut W) {
    let counts = format!(
        "{} {} from {} {} ({} skipped)",
        summary.entries,
        plural(summary.entries, "entry", "entries"),
        summary.files_written,
        plural(summary.files_written, "file", "files"),
        summary.files_skipped
    );

    let msg = if dry_run {
        format!("Dry run: would extract {}", counts)
    } else {
        format!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Extracted {}", counts).green()
        )
    };
    let _ = writeln!(writer, "{}", msg);
}

/// Print how many paths the `ignores` patterns excluded.
pub fn print_ignored(count: usize) {
    print_ignored_to(count, &mut io::stderr().lock());
}

pub fn print_ignored_to<W: Write>(count: usize, writer: &mut W) {
    if count == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} {} matched ignore patterns",
        "ignored:".dimmed(),
        count,
        plural(count, "path", "paths")
    );
}

/// Print where the configuration came from.
pub fn print_config_source(path: Option<&Path>) {
    let mut writer = io::stderr().lock();
    let _ = match path {
        Some(path) => writeln!(writer, "{} {}", "config:".dimmed(), path.display()),
        None => writeln!(writer, "{} defaults", "config:".dimmed()),
    };
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
