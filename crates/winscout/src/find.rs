//! Retry orchestration: query, filter, select, back off, repeat.

use mac_winlist::{
    BundleLookup, Error as WinlistError, LsAppInfoLookup, SwiftWindowQuery, WindowQuery,
    WindowRecord,
};
use tokio::{runtime::Runtime, time};
use tracing::{debug, info, warn};

use crate::{
    cli::FindArgs,
    config::RetryPolicy,
    error::Result,
    filter::{self, SearchCriteria},
    report,
    select::{self, Strategy},
};

/// Terminal result of a window search.
///
/// Every internal failure folds into one of these before the reporter runs;
/// no adapter error value crosses this boundary raw.
#[derive(Debug)]
pub enum Outcome {
    /// A window matched the criteria and was selected.
    Found(WindowRecord),
    /// Every attempt came back empty.
    NotFound {
        /// Attempts performed before giving up, for diagnostics.
        attempts: u32,
    },
    /// The query mechanism itself is broken or absent; retrying cannot help.
    DependencyMissing(WinlistError),
}

/// Resolve configuration, drive the orchestrator, and report the outcome.
pub fn run(args: &FindArgs) -> Result<i32> {
    let criteria =
        SearchCriteria::new(args.bundle_id.clone(), args.title.clone(), args.app.clone())?;
    let policy = RetryPolicy::from_env()?.with_overrides(
        args.max_retries,
        args.retry_delay,
        args.backoff,
    )?;
    let query = SwiftWindowQuery;
    let lookup = LsAppInfoLookup;
    let runtime = Runtime::new()?;
    let outcome = runtime.block_on(find_window(
        &query,
        &lookup,
        &criteria,
        policy,
        args.strategy,
    ));
    Ok(report::report(&outcome, args.json))
}

/// Search for a window matching `criteria`, retrying per `policy`.
///
/// Attempts run strictly sequentially; the only suspension point is the
/// backoff sleep between attempts. An empty match set is an expected,
/// retryable state. An adapter fault is terminal on the spot: it signals a
/// broken query mechanism, not a window that has yet to appear, so burning
/// the retry budget on it would be pointless.
pub async fn find_window<Q: WindowQuery>(
    query: &Q,
    lookup: &dyn BundleLookup,
    criteria: &SearchCriteria,
    policy: RetryPolicy,
    strategy: Strategy,
) -> Outcome {
    if let Err(err) = query.preflight() {
        warn!(%err, "window query preflight failed");
        return Outcome::DependencyMissing(err);
    }

    let mut delay = policy.initial_delay;
    for attempt in 1..=policy.max_attempts {
        let records = match query.query().await {
            Ok(records) => records,
            Err(err) => {
                warn!(%err, attempt, "window query failed");
                return Outcome::DependencyMissing(err);
            }
        };
        let candidates = filter::matching(&records, criteria, lookup);
        debug!(
            attempt,
            windows = records.len(),
            candidates = candidates.len(),
            "query attempt complete"
        );
        if let Some(window) = select::select(&candidates, strategy) {
            info!(attempt, id = window.id, "window found");
            return Outcome::Found(window);
        }
        if attempt == policy.max_attempts {
            break;
        }
        info!(
            attempt,
            total = policy.max_attempts,
            next_delay_ms = delay.as_millis() as u64,
            "window not present yet; backing off"
        );
        time::sleep(delay).await;
        delay = delay.mul_f64(policy.backoff_multiplier);
    }
    Outcome::NotFound {
        attempts: policy.max_attempts,
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::{
            Mutex,
            atomic::{AtomicU32, Ordering},
        },
        time::Duration,
    };

    use async_trait::async_trait;
    use mac_winlist::Bounds;

    use super::*;

    /// Adapter that replays a fixed sequence of responses, then empties.
    struct ScriptedQuery {
        responses: Mutex<VecDeque<mac_winlist::Result<Vec<WindowRecord>>>>,
        calls: AtomicU32,
        preflight_ok: bool,
    }

    impl ScriptedQuery {
        fn new(responses: Vec<mac_winlist::Result<Vec<WindowRecord>>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicU32::new(0),
                preflight_ok: true,
            }
        }

        fn always_empty() -> Self {
            Self::new(Vec::new())
        }

        fn broken_toolchain() -> Self {
            Self {
                responses: Mutex::new(VecDeque::new()),
                calls: AtomicU32::new(0),
                preflight_ok: false,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl WindowQuery for ScriptedQuery {
        fn preflight(&self) -> mac_winlist::Result<()> {
            if self.preflight_ok {
                Ok(())
            } else {
                Err(WinlistError::ToolMissing)
            }
        }

        async fn query(&self) -> mac_winlist::Result<Vec<WindowRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    /// Lookup that never resolves a bundle id.
    struct NoLookup;

    impl BundleLookup for NoLookup {
        fn bundle_id(&self, _pid: i32) -> Option<String> {
            None
        }
    }

    fn studio_window(id: u32, layer: i32) -> WindowRecord {
        WindowRecord {
            id,
            owner_name: "MetalShaderStudio".to_string(),
            owner_pid: 321,
            title: "main".to_string(),
            bounds: Bounds {
                x: 0.0,
                y: 0.0,
                width: 1024.0,
                height: 768.0,
            },
            layer,
            is_on_screen: true,
        }
    }

    fn studio_criteria() -> SearchCriteria {
        SearchCriteria::new(None, None, Some("Studio".into())).unwrap()
    }

    fn policy(max_attempts: u32, delay_secs: f64, backoff: f64) -> RetryPolicy {
        RetryPolicy::new(max_attempts, delay_secs, backoff).unwrap()
    }

    #[tokio::test]
    async fn found_on_first_attempt() {
        let query = ScriptedQuery::new(vec![Ok(vec![studio_window(7, 0)])]);
        let outcome = find_window(
            &query,
            &NoLookup,
            &studio_criteria(),
            policy(10, 0.5, 1.5),
            Strategy::Frontmost,
        )
        .await;
        assert!(matches!(outcome, Outcome::Found(w) if w.id == 7));
        assert_eq!(query.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn found_on_later_attempt() {
        let query = ScriptedQuery::new(vec![
            Ok(Vec::new()),
            Ok(Vec::new()),
            Ok(Vec::new()),
            Ok(vec![studio_window(12, 0)]),
        ]);
        let outcome = find_window(
            &query,
            &NoLookup,
            &studio_criteria(),
            policy(10, 0.5, 1.5),
            Strategy::Frontmost,
        )
        .await;
        assert!(matches!(outcome, Outcome::Found(w) if w.id == 12));
        assert_eq!(query.calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn exhausts_attempts_then_not_found() {
        let query = ScriptedQuery::always_empty();
        let outcome = find_window(
            &query,
            &NoLookup,
            &studio_criteria(),
            policy(4, 0.5, 1.5),
            Strategy::Frontmost,
        )
        .await;
        assert!(matches!(outcome, Outcome::NotFound { attempts: 4 }));
        assert_eq!(query.calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn backoff_follows_geometric_schedule() {
        let query = ScriptedQuery::always_empty();
        let start = time::Instant::now();
        let _ = find_window(
            &query,
            &NoLookup,
            &studio_criteria(),
            policy(4, 0.1, 2.0),
            Strategy::Frontmost,
        )
        .await;
        // Sleeps between the 4 attempts: 0.1s, 0.2s, 0.4s.
        let expected = Duration::from_millis(100 + 200 + 400);
        let elapsed = start.elapsed();
        let diff = if elapsed > expected {
            elapsed - expected
        } else {
            expected - elapsed
        };
        assert!(diff < Duration::from_millis(5), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn adapter_fault_short_circuits() {
        let query = ScriptedQuery::new(vec![Err(WinlistError::QueryFailed {
            status: 1,
            stderr: "window list unavailable".to_string(),
        })]);
        let outcome = find_window(
            &query,
            &NoLookup,
            &studio_criteria(),
            policy(10, 0.5, 1.5),
            Strategy::Frontmost,
        )
        .await;
        assert!(matches!(outcome, Outcome::DependencyMissing(_)));
        assert_eq!(query.calls(), 1);
    }

    #[tokio::test]
    async fn preflight_failure_means_zero_attempts() {
        let query = ScriptedQuery::broken_toolchain();
        let outcome = find_window(
            &query,
            &NoLookup,
            &studio_criteria(),
            policy(10, 0.5, 1.5),
            Strategy::Frontmost,
        )
        .await;
        assert!(matches!(
            outcome,
            Outcome::DependencyMissing(WinlistError::ToolMissing)
        ));
        assert_eq!(query.calls(), 0);
    }

    #[tokio::test]
    async fn strategy_resolves_ambiguity() {
        let query = ScriptedQuery::new(vec![Ok(vec![
            studio_window(1, 5),
            studio_window(2, 2),
        ])]);
        let outcome = find_window(
            &query,
            &NoLookup,
            &studio_criteria(),
            policy(1, 0.5, 1.5),
            Strategy::Frontmost,
        )
        .await;
        assert!(matches!(outcome, Outcome::Found(w) if w.id == 2));
    }
}
