#![warn(missing_docs)]

//! Entry point for the `winscout` binary.

mod cli;
mod config;
mod error;
mod filter;
mod find;
mod list;
mod report;
mod select;

use std::{io, process};

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, registry};

use crate::{
    cli::{Cli, Commands},
    error::Result,
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            // Usage-style failures share clap's exit code; see crate::error::Error.
            process::exit(2);
        }
    }
}

/// Parse CLI arguments, install logging, and dispatch to the chosen subcommand.
fn run() -> Result<i32> {
    let Cli { log, command } = Cli::parse();
    // --quiet drops progress notifications without touching stdout payloads.
    let quiet = matches!(&command, Commands::Find(args) if args.quiet);
    let log_spec = if quiet {
        logging::level_spec_for("error")
    } else {
        logging::compute_spec(
            log.trace,
            log.debug,
            log.log_level.as_deref(),
            log.log_filter.as_deref(),
        )
    };
    let env_filter = logging::env_filter_from_spec(&log_spec);
    registry()
        .with(env_filter)
        .with(fmt::layer().without_time().with_writer(io::stderr))
        .try_init()
        .ok();

    match command {
        Commands::Find(args) => find::run(&args),
        Commands::List(args) => list::run(&args),
    }
}
