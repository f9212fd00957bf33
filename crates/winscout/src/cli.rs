//! Command-line interface definitions for winscout.

use clap::{Args, Parser, Subcommand};
use logging::LogArgs;

use crate::select::Strategy;

/// Command-line interface for the `winscout` binary.
#[derive(Parser, Debug)]
#[command(name = "winscout", about = "Resilient macOS window discovery", version)]
pub struct Cli {
    /// Logging controls shared across winscout binaries.
    #[command(flatten)]
    pub log: LogArgs,

    /// Which operation to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level winscout commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find one window id matching the given criteria, retrying until it appears.
    Find(FindArgs),
    /// Dump the current window table for debugging.
    List(ListArgs),
}

/// Arguments for the `find` subcommand.
#[derive(Args, Debug, Clone)]
pub struct FindArgs {
    /// Match windows whose owning app has exactly this bundle identifier.
    #[arg(long, value_name = "ID")]
    pub bundle_id: Option<String>,

    /// Match windows whose title contains this substring (case-sensitive).
    #[arg(long, value_name = "SUBSTR")]
    pub title: Option<String>,

    /// Match windows whose owning app name contains this substring (case-sensitive).
    #[arg(long, value_name = "SUBSTR")]
    pub app: Option<String>,

    /// How to pick one window when several match.
    #[arg(long, value_enum, default_value_t = Strategy::Frontmost)]
    pub strategy: Strategy,

    /// Maximum query attempts before giving up (env: WINSCOUT_MAX_RETRIES).
    #[arg(long, value_name = "N")]
    pub max_retries: Option<u32>,

    /// Delay before the second attempt, in seconds (env: WINSCOUT_RETRY_DELAY).
    #[arg(long, value_name = "SECS")]
    pub retry_delay: Option<f64>,

    /// Multiplier applied to the delay after each attempt (env: WINSCOUT_BACKOFF).
    #[arg(long, value_name = "MULT")]
    pub backoff: Option<f64>,

    /// Emit a structured JSON envelope instead of a bare window id.
    #[arg(long)]
    pub json: bool,

    /// Suppress per-attempt progress output.
    #[arg(long)]
    pub quiet: bool,
}

/// Arguments for the `list` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Only show windows whose owning app name contains this substring.
    #[arg(long, value_name = "SUBSTR")]
    pub app: Option<String>,

    /// Include windows that are not currently on screen.
    #[arg(long)]
    pub all: bool,

    /// Emit the window table as JSON.
    #[arg(long)]
    pub json: bool,
}
