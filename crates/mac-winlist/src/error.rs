//! Error handling for window enumeration.

use std::{io, result, time::Duration};

use thiserror::Error;

/// Convenient result type for mac-winlist operations.
pub type Result<T> = result::Result<T, Error>;

/// Failures of the query mechanism itself, distinct from "no window matched".
///
/// A query that runs but sees no windows of interest returns an empty `Vec`,
/// never an `Error`; every variant here means the enumeration subsystem is
/// broken or absent, and retrying the same query cannot help.
#[derive(Debug, Error)]
pub enum Error {
    /// The Swift toolchain is not installed or not on PATH.
    #[error("swift not found on PATH; install the Xcode Command Line Tools (xcode-select --install)")]
    ToolMissing,

    /// The enumeration query did not finish within the allotted time.
    #[error("window query timed out after {0:?}")]
    Timeout(Duration),

    /// The query process exited with a failure status.
    #[error("window query exited with status {status}: {stderr}")]
    QueryFailed {
        /// Process exit code, or -1 when terminated by a signal.
        status: i32,
        /// Captured standard error, trimmed.
        stderr: String,
    },

    /// The query process produced output that is not the expected JSON.
    #[error("window query produced unparseable output: {0}")]
    Parse(#[from] serde_json::Error),

    /// Wrapper for standard I/O errors (temp file, process spawn).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
