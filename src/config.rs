use std::time::Duration;

use crate::types::DEFAULT_ROUND_TIME;

/// How long a freshly created (or reset) session stays in its loading window
/// before screens may safely mount against it.
const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Tunables for a session. Everything has a sensible default; env vars only
/// exist for live tweaking without a rebuild.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Round timer value a fresh session starts with (seconds)
    pub default_round_time_seconds: u32,
    /// Mount-settle delay before `is_loading` clears
    pub settle_delay: Duration,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let default_round_time_seconds = std::env::var("ARCHENEMY_DEFAULT_ROUND_TIME")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_ROUND_TIME);

        let settle_delay_ms = std::env::var("ARCHENEMY_SETTLE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SETTLE_DELAY_MS);

        Self {
            default_round_time_seconds,
            settle_delay: Duration::from_millis(settle_delay_ms),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_round_time_seconds: DEFAULT_ROUND_TIME,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}
