//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Extract template text into resource modules
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::render::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExtractCommand {
    /// Directory scanned for component files (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Root of the generated resource tree (overrides config file)
    #[arg(long)]
    pub output_root: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Report what would be generated without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract template text from component files into resource modules
    Extract(ExtractCommand),
    /// Initialize a new .i18nextractrc.json configuration file
    Init,
}
