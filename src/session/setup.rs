use rand::Rng;
use ulid::Ulid;

use super::{GameError, GameResult, GameSession};
use crate::types::*;

/// Clamp out-of-bounds settings to the nearest valid value instead of
/// corrupting roster invariants. The setup screens already prevent these
/// combinations.
fn clamp_settings(mut settings: GameSettings) -> GameSettings {
    let requested = settings.clone();

    settings.player_count = settings.player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);

    settings.imposter_count = settings.imposter_count.clamp(1, 2);
    if settings.imposter_count == 2 && settings.player_count < MIN_PLAYERS_FOR_TWO_IMPOSTERS {
        settings.imposter_count = 1;
    }

    let clamped_time = settings
        .round_time_seconds
        .clamp(MIN_ROUND_TIME, MAX_ROUND_TIME);
    settings.round_time_seconds = (clamped_time / ROUND_TIME_STEP) * ROUND_TIME_STEP;

    if settings != requested {
        tracing::warn!(
            requested_players = requested.player_count,
            requested_imposters = requested.imposter_count,
            requested_round_time = requested.round_time_seconds,
            players = settings.player_count,
            imposters = settings.imposter_count,
            round_time = settings.round_time_seconds,
            "invalid settings clamped"
        );
    }

    settings
}

/// Default display name for roster slot `index` (0-based)
fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

impl GameSession {
    /// Start a new round: resolve the word pool, pick the secret word, assign
    /// roles and build the roster, then enter RoleReveal with the timer armed
    /// but not running.
    ///
    /// The one recoverable failure is an empty resolved word pool; it leaves
    /// the session untouched apart from closing the loading window.
    pub async fn initialize_game(
        &self,
        settings: GameSettings,
        player_names: Option<Vec<String>>,
    ) -> GameResult<()> {
        // A countdown from a previous round must not tick into the new one
        self.abort_timer_task();
        self.state.write().await.is_loading = true;

        let settings = clamp_settings(settings);
        let pool = self.catalog.words_for_category(&settings.category_name);
        if pool.is_empty() {
            tracing::error!(category = %settings.category_name, "no words for category, aborting game start");
            let mut state = self.state.write().await;
            state.is_loading = false;
            return Err(GameError::EmptyWordPool(settings.category_name));
        }

        let player_count = settings.player_count as usize;
        let imposter_count = settings.imposter_count as usize;

        let (word, enemy_indices) = {
            let mut rng = rand::rng();
            let word = pool[rng.random_range(0..pool.len())].clone();
            let enemy_indices =
                rand::seq::index::sample(&mut rng, player_count, imposter_count).into_vec();
            (word, enemy_indices)
        };

        let names: Vec<String> = (0..player_count)
            .map(|i| {
                player_names
                    .as_ref()
                    .and_then(|names| names.get(i))
                    .map(|name| name.trim())
                    .filter(|name| !name.is_empty())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| default_player_name(i))
            })
            .collect();

        let players: Vec<Player> = (0..player_count)
            .map(|i| {
                let is_enemy = enemy_indices.contains(&i);
                let fellow_arch_enemies = if is_enemy {
                    enemy_indices
                        .iter()
                        .filter(|&&j| j != i)
                        .map(|&j| names[j].clone())
                        .collect()
                } else {
                    Vec::new()
                };

                Player {
                    id: Ulid::new().to_string(),
                    name: names[i].clone(),
                    role: if is_enemy {
                        PlayerRole::ArchEnemy
                    } else {
                        PlayerRole::WordKnower
                    },
                    secret_word: (!is_enemy).then(|| word.clone()),
                    fellow_arch_enemies,
                }
            })
            .collect();

        tracing::info!(
            players = player_count,
            imposters = imposter_count,
            category = %settings.category_name,
            round_time = settings.round_time_seconds,
            "game initialized, entering role reveal"
        );

        let mut state = self.state.write().await;
        state.phase = GamePhase::RoleReveal;
        state.current_word = word;
        state.current_category = settings.category_name.clone();
        state.players = players;
        state.role_reveal_cursor = 0;
        state.timer_value = settings.round_time_seconds;
        state.is_timer_running = false;
        state.resolution_reason = None;
        state.settings = settings;
        state.is_loading = false;

        Ok(())
    }

    /// Return to SetupStep1 with full default state. Cancels any running
    /// countdown and reopens the loading window for the settle delay.
    pub async fn reset_game(&self) {
        self.abort_timer_task();

        let mut state = self.state.write().await;
        *state = GameState::initial(self.config.default_round_time_seconds);
        drop(state);

        self.spawn_settle_task();
        tracing::info!("session reset to setup");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RANDOM_CATEGORY;

    fn base_settings() -> GameSettings {
        GameSettings {
            player_count: 4,
            imposter_count: 1,
            category_name: RANDOM_CATEGORY.to_string(),
            round_time_seconds: 90,
            hint_mode_enabled: false,
        }
    }

    #[test]
    fn test_clamp_passes_valid_settings_through() {
        let settings = base_settings();
        assert_eq!(clamp_settings(settings.clone()), settings);
    }

    #[test]
    fn test_clamp_player_count_bounds() {
        let low = clamp_settings(GameSettings {
            player_count: 0,
            ..base_settings()
        });
        assert_eq!(low.player_count, MIN_PLAYERS);

        let high = clamp_settings(GameSettings {
            player_count: 99,
            ..base_settings()
        });
        assert_eq!(high.player_count, MAX_PLAYERS);
    }

    #[test]
    fn test_clamp_imposter_count() {
        let zero = clamp_settings(GameSettings {
            imposter_count: 0,
            ..base_settings()
        });
        assert_eq!(zero.imposter_count, 1);

        let three = clamp_settings(GameSettings {
            player_count: 8,
            imposter_count: 3,
            ..base_settings()
        });
        assert_eq!(three.imposter_count, 2);

        let two_with_small_roster = clamp_settings(GameSettings {
            player_count: 5,
            imposter_count: 2,
            ..base_settings()
        });
        assert_eq!(two_with_small_roster.imposter_count, 1);
    }

    #[test]
    fn test_clamp_round_time_bounds_and_step() {
        let low = clamp_settings(GameSettings {
            round_time_seconds: 7,
            ..base_settings()
        });
        assert_eq!(low.round_time_seconds, MIN_ROUND_TIME);

        let high = clamp_settings(GameSettings {
            round_time_seconds: 10_000,
            ..base_settings()
        });
        assert_eq!(high.round_time_seconds, MAX_ROUND_TIME);

        let off_step = clamp_settings(GameSettings {
            round_time_seconds: 155,
            ..base_settings()
        });
        assert_eq!(off_step.round_time_seconds, 150);
    }

    #[test]
    fn test_default_player_names_are_one_based() {
        assert_eq!(default_player_name(0), "Player 1");
        assert_eq!(default_player_name(11), "Player 12");
    }
}
