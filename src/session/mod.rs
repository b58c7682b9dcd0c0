mod reveal;
mod setup;
mod timer;

use std::sync::{Arc, Mutex};

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::catalog::WordCatalog;
use crate::config::SessionConfig;
use crate::types::{GamePhase, GameState, Player};

pub type GameResult<T> = Result<T, GameError>;

/// Errors a session command can report. Nothing here is fatal; every failure
/// path leaves the session in a stable, inspectable state.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no words available for category '{0}'")]
    EmptyWordPool(String),

    #[error("secret word must not be empty")]
    InvalidWord,
}

/// Owns all mutable game state and the countdown task. Screens hold an
/// `Arc<GameSession>`, issue commands, and observe cloned state snapshots;
/// they never touch `GameState` directly.
pub struct GameSession {
    state: Arc<RwLock<GameState>>,
    catalog: WordCatalog,
    config: SessionConfig,
    /// At most one live countdown task; recreated, never stacked
    timer_task: Mutex<Option<JoinHandle<()>>>,
    /// Clears `is_loading` after the mount-settle delay
    settle_task: Mutex<Option<JoinHandle<()>>>,
}

impl GameSession {
    /// Create a session with the given catalog and config. Must be called
    /// from within a tokio runtime.
    pub fn new(catalog: WordCatalog, config: SessionConfig) -> Self {
        let session = Self {
            state: Arc::new(RwLock::new(GameState::initial(
                config.default_round_time_seconds,
            ))),
            catalog,
            config,
            timer_task: Mutex::new(None),
            settle_task: Mutex::new(None),
        };
        session.spawn_settle_task();
        session
    }

    pub fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    /// Cloned snapshot of the full game state
    pub async fn state(&self) -> GameState {
        self.state.read().await.clone()
    }

    pub async fn phase(&self) -> GamePhase {
        self.state.read().await.phase
    }

    pub async fn players(&self) -> Vec<Player> {
        self.state.read().await.players.clone()
    }

    /// Abort the countdown task, if any. The handle slot is cleared before
    /// aborting so a concurrent stop never double-clears.
    fn abort_timer_task(&self) {
        let handle = self.timer_task.lock().expect("timer task lock").take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }

    fn store_timer_task(&self, handle: JoinHandle<()>) {
        let previous = self
            .timer_task
            .lock()
            .expect("timer task lock")
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Restart the loading window: `is_loading` stays true for the settle
    /// delay, then clears. A still-pending settle task is replaced.
    fn spawn_settle_task(&self) {
        let state = Arc::clone(&self.state);
        let delay = self.config.settle_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.write().await.is_loading = false;
            tracing::debug!("session settled, is_loading cleared");
        });

        let previous = self
            .settle_task
            .lock()
            .expect("settle task lock")
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(WordCatalog::default(), SessionConfig::default())
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Ok(mut slot) = self.timer_task.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
        if let Ok(mut slot) = self.settle_task.lock() {
            if let Some(handle) = slot.take() {
                handle.abort();
            }
        }
    }
}
