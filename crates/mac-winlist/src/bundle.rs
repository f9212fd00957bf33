//! Best-effort bundle-identifier lookup keyed by owning process id.

use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Auxiliary process lookup used for bundle-id matching.
///
/// Injectable so the candidate filter can be tested without real OS process
/// introspection. Lookups are best effort: any failure is `None`, never an
/// error, since bundle matching is one criterion among several.
pub trait BundleLookup {
    /// Bundle identifier for `pid`, or `None` when it cannot be determined.
    fn bundle_id(&self, pid: i32) -> Option<String>;
}

/// Matches the `"CFBundleIdentifier"="..."` line in `lsappinfo` output.
static BUNDLE_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""CFBundleIdentifier"\s*=\s*"([^"]+)""#).expect("static regex"));

/// Production lookup backed by the `lsappinfo` LaunchServices tool.
#[derive(Debug, Default)]
pub struct LsAppInfoLookup;

impl LsAppInfoLookup {
    /// Extract the bundle identifier from raw `lsappinfo` output.
    fn parse(output: &str) -> Option<String> {
        BUNDLE_ID_RE
            .captures(output)
            .map(|caps| caps[1].to_string())
    }
}

impl BundleLookup for LsAppInfoLookup {
    fn bundle_id(&self, pid: i32) -> Option<String> {
        let output = Command::new("lsappinfo")
            .args(["info", "-only", "bundleid"])
            .arg(format!("pid={pid}"))
            .output();
        let output = match output {
            Ok(out) if out.status.success() => out,
            Ok(out) => {
                debug!(pid, status = ?out.status, "lsappinfo returned failure");
                return None;
            }
            Err(err) => {
                debug!(pid, %err, "lsappinfo unavailable");
                return None;
            }
        };
        Self::parse(&String::from_utf8_lossy(&output.stdout))
    }
}
