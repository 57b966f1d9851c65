use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): Command completed, including runs that found nothing to extract
/// - `Failure` (1): Command refused to run (e.g. config file already exists)
/// - `Error` (2): Command aborted on an I/O or configuration error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
