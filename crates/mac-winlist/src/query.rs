//! Window Query Adapter: one-shot enumeration of current windows.

use std::{
    io::{ErrorKind, Write},
    time::Duration,
};

use async_trait::async_trait;
use tempfile::Builder;
use tokio::{process::Command, time};
use tracing::{debug, trace};

use crate::{
    error::{Error, Result},
    record::WindowRecord,
};

/// Upper bound on a single enumeration query, including Swift compilation.
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Fixed Swift program that dumps every window as a JSON array.
///
/// Deliberately takes no parameters: filter criteria stay on the Rust side,
/// so no user-supplied string is ever interpolated into executable source.
const QUERY_SOURCE: &str = r#"
import CoreGraphics
import Foundation

guard let list = CGWindowListCopyWindowInfo(.excludeDesktopElements, kCGNullWindowID)
        as? [[String: Any]] else {
    FileHandle.standardError.write(Data("window list unavailable\n".utf8))
    exit(1)
}

var out: [[String: Any]] = []
for window in list {
    guard let id = window[kCGWindowNumber as String] as? Int,
          let owner = window[kCGWindowOwnerName as String] as? String else {
        continue
    }
    let bounds = window[kCGWindowBounds as String] as? [String: Any] ?? [:]
    out.append([
        "id": id,
        "owner_name": owner,
        "owner_pid": window[kCGWindowOwnerPID as String] as? Int ?? 0,
        "title": window[kCGWindowName as String] as? String ?? "",
        "layer": window[kCGWindowLayer as String] as? Int ?? 0,
        "is_on_screen": window[kCGWindowIsOnscreen as String] as? Bool ?? false,
        "bounds": [
            "x": bounds["X"] as? Double ?? 0,
            "y": bounds["Y"] as? Double ?? 0,
            "width": bounds["Width"] as? Double ?? 0,
            "height": bounds["Height"] as? Double ?? 0,
        ],
    ])
}

let data = try JSONSerialization.data(withJSONObject: out)
FileHandle.standardOutput.write(data)
"#;

/// One-shot enumeration of current windows.
///
/// Implementations perform exactly one query per call and never retry
/// internally; retrying is the orchestrator's job. Records come back in the
/// OS's native enumeration order, unfiltered and undeduplicated.
#[async_trait]
pub trait WindowQuery {
    /// Verify the query mechanism is usable at all, without running a query.
    fn preflight(&self) -> Result<()>;

    /// Enumerate windows once.
    ///
    /// An empty `Vec` means the query ran and saw nothing; an `Err` means the
    /// query mechanism itself failed.
    async fn query(&self) -> Result<Vec<WindowRecord>>;
}

/// Production adapter backed by the system Swift toolchain.
///
/// Each call writes the fixed query source to a fresh collision-resistant
/// temp file, runs `swift` on it under a 10s timeout, and parses the JSON it
/// prints. The temp file is removed on drop, so every exit path (success,
/// failure, timeout, panic) cleans it up; no call can observe a stale script
/// from a prior attempt.
#[derive(Debug, Default)]
pub struct SwiftWindowQuery;

#[async_trait]
impl WindowQuery for SwiftWindowQuery {
    fn preflight(&self) -> Result<()> {
        which::which("swift").map(|_| ()).map_err(|_| Error::ToolMissing)
    }

    async fn query(&self) -> Result<Vec<WindowRecord>> {
        let mut script = Builder::new()
            .prefix("winscout-query-")
            .suffix(".swift")
            .tempfile()?;
        script.write_all(QUERY_SOURCE.as_bytes())?;
        script.flush()?;
        trace!(path = %script.path().display(), "running window query");

        let run = Command::new("swift")
            .arg(script.path())
            .kill_on_drop(true)
            .output();
        let output = match time::timeout(QUERY_TIMEOUT, run).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::ToolMissing);
            }
            Ok(Err(err)) => return Err(err.into()),
            Err(_) => return Err(Error::Timeout(QUERY_TIMEOUT)),
        };
        if !output.status.success() {
            return Err(Error::QueryFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let records: Vec<WindowRecord> = serde_json::from_slice(&output.stdout)?;
        debug!(count = records.len(), "window query complete");
        Ok(records)
    }
}
