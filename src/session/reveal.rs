use super::{GameError, GameResult, GameSession};
use crate::types::{GamePhase, Player, PlayerRole};

impl GameSession {
    /// Advance the role-reveal cursor by one. On the last player the session
    /// enters WordPhase with the timer reset and not running. Outside
    /// RoleReveal this is a no-op, so a re-entrant tap on the reveal screen
    /// cannot skip state.
    pub async fn proceed_to_next_role_reveal(&self) {
        let mut state = self.state.write().await;
        if state.phase != GamePhase::RoleReveal {
            tracing::debug!(phase = ?state.phase, "proceed_to_next_role_reveal ignored outside RoleReveal");
            return;
        }

        state.role_reveal_cursor += 1;
        if state.role_reveal_cursor < state.players.len() {
            tracing::debug!(cursor = state.role_reveal_cursor, "next player's turn to reveal");
        } else {
            state.phase = GamePhase::WordPhase;
            state.timer_value = state.settings.round_time_seconds;
            state.is_timer_running = false;
            tracing::info!("all roles revealed, entering word phase");
        }
    }

    /// The player currently viewing their role, or `None` once everyone has
    /// revealed (or before the roster exists).
    pub async fn current_reveal_player(&self) -> Option<Player> {
        let state = self.state.read().await;
        state.players.get(state.role_reveal_cursor).cloned()
    }

    /// Admin override: swap the round's secret word. Propagates to every
    /// WordKnower; ArchEnemy players stay wordless.
    pub async fn change_secret_word(&self, new_word: &str) -> GameResult<()> {
        let new_word = new_word.trim();
        if new_word.is_empty() {
            return Err(GameError::InvalidWord);
        }

        let mut state = self.state.write().await;
        state.current_word = new_word.to_string();
        for player in &mut state.players {
            if player.role == PlayerRole::WordKnower {
                player.secret_word = Some(new_word.to_string());
            }
        }

        tracing::info!(word = %new_word, "secret word changed by admin override");
        Ok(())
    }

    /// All ArchEnemy players in roster order. The results screen names every
    /// imposter, not just the first one found.
    pub async fn arch_enemies(&self) -> Vec<Player> {
        self.state
            .read()
            .await
            .players
            .iter()
            .filter(|p| p.role == PlayerRole::ArchEnemy)
            .cloned()
            .collect()
    }
}
