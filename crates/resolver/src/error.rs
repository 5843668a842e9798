use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Why a package lookup produced no root directory.
///
/// Callers of the resolution chain never see these: every variant collapses
/// into a no-match and the chain falls through to the next strategy. The
/// enum exists so the fall-through can be logged with its actual cause.
#[derive(Error, Debug)]
pub enum LocateError {
    /// The lookup command could not be started (missing binary, permissions).
    #[error("Failed to run `{0}`: {1}")]
    Spawn(String, #[source] std::io::Error),

    /// The command did not exit within the configured deadline.
    #[error("Lookup did not finish within {0:?}")]
    Timeout(Duration),

    /// The command exited with a non-success status.
    #[error("Lookup exited with {0}")]
    Exit(ExitStatus),

    /// The command exited cleanly but printed nothing.
    #[error("Lookup produced no output")]
    NoOutput,

    /// IO error while waiting on the command or reading its output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
