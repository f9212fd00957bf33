//! Error handling for the winscout binary.

use std::{io, result};

use thiserror::Error;

/// Convenient result type for winscout operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors surfaced before or outside the retry loop.
///
/// Failures inside the loop never escape as `Error`; the orchestrator folds
/// them into a terminal [`crate::find::Outcome`] before the reporter runs.
///
/// These errors exit the process with code 2, the same code clap uses for
/// its own usage errors. That overlaps with the documented NotFound exit
/// code, but the two are distinguishable: validation failures print an
/// `error:` diagnostic before any query attempt runs, while NotFound only
/// occurs after the retry budget is spent.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Errors surfaced by the window enumeration crate.
    #[error("window query error: {0}")]
    Winlist(#[from] mac_winlist::Error),
    /// JSON encoding of output failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    /// The supplied search criteria are malformed.
    #[error("invalid criteria: {0}")]
    InvalidCriteria(String),
    /// The retry configuration is out of range or unparseable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
