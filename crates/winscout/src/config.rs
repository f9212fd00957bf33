//! Environment-derived retry configuration, resolved once at startup.
//!
//! The policy is read from the environment exactly once, overridden by CLI
//! flags, validated, and then passed down by value; nothing below the CLI
//! layer reads ambient environment state.

use std::{env, str::FromStr, time::Duration};

use crate::error::{Error, Result};

/// Environment variable for the maximum attempt count.
const ENV_MAX_RETRIES: &str = "WINSCOUT_MAX_RETRIES";
/// Environment variable for the initial delay, in seconds.
const ENV_RETRY_DELAY: &str = "WINSCOUT_RETRY_DELAY";
/// Environment variable for the backoff multiplier.
const ENV_BACKOFF: &str = "WINSCOUT_BACKOFF";

/// Documented default attempt count.
const DEFAULT_MAX_ATTEMPTS: u32 = 10;
/// Documented default initial delay, in seconds.
const DEFAULT_INITIAL_DELAY_SECS: f64 = 0.5;
/// Documented default backoff multiplier.
const DEFAULT_BACKOFF: f64 = 1.5;

/// Retry schedule for the orchestrator.
///
/// The delay before attempt `k + 1` is
/// `initial_delay * backoff_multiplier^k`; growth is unbounded but attempts
/// are capped by `max_attempts`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts before giving up; at least 1.
    pub max_attempts: u32,
    /// Delay between the first and second attempts; positive.
    pub initial_delay: Duration,
    /// Factor applied to the delay after each attempt; at least 1.0.
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            initial_delay: Duration::from_secs_f64(DEFAULT_INITIAL_DELAY_SECS),
            backoff_multiplier: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Validate and build a policy from raw numbers.
    pub fn new(max_attempts: u32, delay_secs: f64, backoff: f64) -> Result<Self> {
        if max_attempts == 0 {
            return Err(Error::InvalidConfig("max retries must be at least 1".into()));
        }
        if !delay_secs.is_finite() || delay_secs <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "retry delay must be a positive number of seconds, got {delay_secs}"
            )));
        }
        if !backoff.is_finite() || backoff < 1.0 {
            return Err(Error::InvalidConfig(format!(
                "backoff multiplier must be at least 1.0, got {backoff}"
            )));
        }
        Ok(Self {
            max_attempts,
            initial_delay: Duration::from_secs_f64(delay_secs),
            backoff_multiplier: backoff,
        })
    }

    /// Read the policy from the environment, applying documented defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Apply CLI flag overrides on top of the resolved policy.
    pub fn with_overrides(
        self,
        max_attempts: Option<u32>,
        delay_secs: Option<f64>,
        backoff: Option<f64>,
    ) -> Result<Self> {
        Self::new(
            max_attempts.unwrap_or(self.max_attempts),
            delay_secs.unwrap_or_else(|| self.initial_delay.as_secs_f64()),
            backoff.unwrap_or(self.backoff_multiplier),
        )
    }

    /// Build from an arbitrary variable source; the testable core of
    /// [`Self::from_env`].
    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let max_attempts = parse_var(&get, ENV_MAX_RETRIES, DEFAULT_MAX_ATTEMPTS)?;
        let delay_secs = parse_var(&get, ENV_RETRY_DELAY, DEFAULT_INITIAL_DELAY_SECS)?;
        let backoff = parse_var(&get, ENV_BACKOFF, DEFAULT_BACKOFF)?;
        Self::new(max_attempts, delay_secs, backoff)
    }
}

/// Parse one numeric variable, rejecting malformed values rather than
/// silently falling back to the default.
fn parse_var<T: FromStr>(
    get: impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::InvalidConfig(format!("{key} is not a valid number: {raw:?}"))),
        None => Ok(default),
    }
}
