use anyhow::Result;

mod args;
mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command, ExtractCommand};
pub use exit_status::ExitStatus;

/// Run the parsed command line.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Extract(cmd)) => commands::extract::extract(cmd),
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
