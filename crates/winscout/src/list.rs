//! The `list` subcommand: dump the current window table for debugging.

use mac_winlist::{SwiftWindowQuery, WindowQuery, WindowRecord};
use tokio::runtime::Runtime;

use crate::{cli::ListArgs, error::Result, report};

/// Run one enumeration query and print every window it sees.
pub fn run(args: &ListArgs) -> Result<i32> {
    let query = SwiftWindowQuery;
    if let Err(err) = query.preflight() {
        eprintln!("window query unavailable: {err}");
        return Ok(report::EXIT_DEPENDENCY_MISSING);
    }
    let runtime = Runtime::new()?;
    let records = match runtime.block_on(query.query()) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("window query failed: {err}");
            return Ok(report::EXIT_DEPENDENCY_MISSING);
        }
    };
    let records: Vec<WindowRecord> = records
        .into_iter()
        .filter(|w| args.all || w.is_on_screen)
        .filter(|w| {
            args.app
                .as_ref()
                .is_none_or(|app| w.owner_name.contains(app))
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for window in &records {
            println!("{}", format_row(window));
        }
        println!("{} windows", records.len());
    }
    Ok(report::EXIT_FOUND)
}

/// One human-readable line per window.
fn format_row(window: &WindowRecord) -> String {
    format!(
        "{:>8}  layer={:<3} {:>5.0}x{:<5.0} {}{}  {:?}",
        window.id,
        window.layer,
        window.bounds.width,
        window.bounds.height,
        if window.is_on_screen { "" } else { "[off] " },
        window.owner_name,
        window.title,
    )
}
