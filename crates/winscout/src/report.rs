//! Outcome rendering and exit-code mapping.

use mac_winlist::WindowRecord;
use serde::Serialize;

use crate::find::Outcome;

/// Exit code for a successful find.
pub const EXIT_FOUND: i32 = 0;
/// Exit code when every attempt came back empty.
pub const EXIT_NOT_FOUND: i32 = 2;
/// Exit code when the query mechanism is unavailable.
pub const EXIT_DEPENDENCY_MISSING: i32 = 4;

/// Structured envelope emitted in `--json` mode.
#[derive(Debug, Serialize)]
struct Envelope<'a> {
    /// One of `found`, `not_found`, `dependency_missing`.
    status: &'static str,
    /// The selected window, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    window: Option<&'a WindowRecord>,
    /// Failure details, present only on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
}

/// Machine-readable failure details mirroring the exit-code taxonomy.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// The process exit code for this failure.
    code: i32,
    /// Human-readable diagnostic.
    message: String,
}

/// Map a terminal outcome to its documented process exit code.
pub fn exit_code(outcome: &Outcome) -> i32 {
    match outcome {
        Outcome::Found(_) => EXIT_FOUND,
        Outcome::NotFound { .. } => EXIT_NOT_FOUND,
        Outcome::DependencyMissing(_) => EXIT_DEPENDENCY_MISSING,
    }
}

/// Render `outcome` to stdout/stderr and return its exit code.
///
/// Plain mode prints the bare window id on stdout so callers can capture it;
/// diagnostics always go to stderr. JSON mode prints one envelope on stdout
/// for every outcome.
pub fn report(outcome: &Outcome, json: bool) -> i32 {
    if json {
        println!("{}", render_json(outcome));
    } else {
        match outcome {
            Outcome::Found(window) => println!("{}", window.id),
            other => {
                if let Some(msg) = describe(other) {
                    eprintln!("{msg}");
                }
            }
        }
    }
    exit_code(outcome)
}

/// Human-readable diagnostic for failed outcomes.
fn describe(outcome: &Outcome) -> Option<String> {
    match outcome {
        Outcome::Found(_) => None,
        Outcome::NotFound { attempts } => {
            Some(format!("no matching window after {attempts} attempts"))
        }
        Outcome::DependencyMissing(err) => Some(format!("window query unavailable: {err}")),
    }
}

/// Serialize the structured envelope for `--json` mode.
fn render_json(outcome: &Outcome) -> String {
    let envelope = match outcome {
        Outcome::Found(window) => Envelope {
            status: "found",
            window: Some(window),
            error: None,
        },
        Outcome::NotFound { attempts } => Envelope {
            status: "not_found",
            window: None,
            error: Some(ErrorBody {
                code: EXIT_NOT_FOUND,
                message: format!("no matching window after {attempts} attempts"),
            }),
        },
        Outcome::DependencyMissing(err) => Envelope {
            status: "dependency_missing",
            window: None,
            error: Some(ErrorBody {
                code: EXIT_DEPENDENCY_MISSING,
                message: err.to_string(),
            }),
        },
    };
    serde_json::to_string(&envelope).unwrap_or_else(|_| r#"{"status":"error"}"#.to_string())
}
