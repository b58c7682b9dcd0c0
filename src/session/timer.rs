use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use super::GameSession;
use crate::types::{GamePhase, GameState};

/// Resolution tag written when the countdown runs out on its own
pub const REASON_TIMER_EXPIRED: &str = "timer expired";

/// One countdown tick. Returns false once the loop should stop: either the
/// timer was stopped externally or it just hit zero, which also forces the
/// Resolution phase. Pure over the state so the task loop and the tests
/// share one set of semantics.
fn tick_countdown(state: &mut GameState) -> bool {
    if !state.is_timer_running {
        return false;
    }
    if state.timer_value > 0 {
        state.timer_value -= 1;
    }
    if state.timer_value == 0 {
        state.is_timer_running = false;
        state.phase = GamePhase::Resolution;
        state.resolution_reason = Some(REASON_TIMER_EXPIRED.to_string());
        tracing::info!("countdown reached zero, entering resolution");
        return false;
    }
    true
}

impl GameSession {
    /// Begin the 1-second countdown. No-op when already running or when the
    /// timer is at zero. Any stale countdown task is aborted first so only
    /// one interval is ever live.
    pub async fn start_game_timer(&self) {
        {
            let mut state = self.state.write().await;
            if state.is_timer_running || state.timer_value == 0 {
                tracing::debug!(
                    running = state.is_timer_running,
                    timer_value = state.timer_value,
                    "start_game_timer ignored"
                );
                return;
            }
            state.is_timer_running = true;
        }

        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the countdown starts on
            // the next one.
            interval.tick().await;
            loop {
                interval.tick().await;
                if !tick_countdown(&mut *state.write().await) {
                    break;
                }
            }
        });

        self.store_timer_task(handle);
        tracing::info!("countdown started");
    }

    /// Cancel the countdown and mark it stopped. Idempotent.
    pub async fn stop_game_timer(&self) {
        self.abort_timer_task();
        self.state.write().await.is_timer_running = false;
        tracing::debug!("countdown stopped");
    }

    /// Direct override of the remaining time, used by the alternate timer
    /// display. A running countdown keeps ticking from the new value.
    pub async fn set_timer_value(&self, value: u32) {
        self.state.write().await.timer_value = value;
    }

    /// Stop the round and show results, regardless of the current phase.
    /// `reason` is an opaque tag surfaced on the results screen.
    pub async fn go_to_resolution_phase(&self, reason: Option<&str>) {
        self.abort_timer_task();

        let mut state = self.state.write().await;
        state.is_timer_running = false;
        state.phase = GamePhase::Resolution;
        state.resolution_reason = reason.map(|r| r.to_string());

        tracing::info!(reason = reason.unwrap_or("unspecified"), "entering resolution");
    }

    /// Terminal phase until an explicit reset
    pub async fn end_game(&self) {
        self.abort_timer_task();

        let mut state = self.state.write().await;
        state.is_timer_running = false;
        state.phase = GamePhase::GameOver;

        tracing::info!("game over");
    }
}
