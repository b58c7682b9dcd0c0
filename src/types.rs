use serde::{Deserialize, Serialize};

pub type PlayerId = String;

/// Roster bounds, from the setup screens
pub const MIN_PLAYERS: u8 = 3;
pub const MAX_PLAYERS: u8 = 12;
pub const DEFAULT_PLAYERS: u8 = 4;
pub const DEFAULT_IMPOSTERS: u8 = 1;
/// Two imposters are only allowed with a roster of at least this size
pub const MIN_PLAYERS_FOR_TWO_IMPOSTERS: u8 = 6;

/// Round timer bounds (seconds)
pub const MIN_ROUND_TIME: u32 = 30;
pub const MAX_ROUND_TIME: u32 = 600;
pub const ROUND_TIME_STEP: u32 = 30;
pub const DEFAULT_ROUND_TIME: u32 = 90;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    SetupStep1,
    SetupStep2,
    SetupStep3,
    RoleReveal,
    WordPhase,
    Resolution,
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayerRole {
    WordKnower,
    ArchEnemy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub role: PlayerRole,
    /// Present iff the player is a WordKnower
    pub secret_word: Option<String>,
    /// Names of the other ArchEnemy players; non-empty only with two imposters
    #[serde(default)]
    pub fellow_arch_enemies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameSettings {
    pub player_count: u8,
    pub imposter_count: u8,
    pub category_name: String,
    pub round_time_seconds: u32,
    pub hint_mode_enabled: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            player_count: MIN_PLAYERS,
            imposter_count: DEFAULT_IMPOSTERS,
            category_name: crate::catalog::RANDOM_CATEGORY.to_string(),
            round_time_seconds: DEFAULT_ROUND_TIME,
            hint_mode_enabled: false,
        }
    }
}

/// The session's single source of truth. Screens observe cloned snapshots
/// of this and never mutate it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub settings: GameSettings,
    /// Roster order is the role-reveal order
    pub players: Vec<Player>,
    /// Index of the player currently viewing their role; == players.len()
    /// once everyone has revealed
    pub role_reveal_cursor: usize,
    pub current_word: String,
    pub current_category: String,
    pub timer_value: u32,
    pub is_timer_running: bool,
    pub is_loading: bool,
    /// Opaque tag explaining why the round ended, forwarded to the results
    /// display ("timer expired", "stopped by admin", ...)
    pub resolution_reason: Option<String>,
    pub created_at: String,
}

impl GameState {
    pub fn initial(default_round_time: u32) -> Self {
        Self {
            phase: GamePhase::SetupStep1,
            settings: GameSettings {
                round_time_seconds: default_round_time,
                ..GameSettings::default()
            },
            players: Vec::new(),
            role_reveal_cursor: 0,
            current_word: String::new(),
            current_category: crate::catalog::RANDOM_CATEGORY.to_string(),
            timer_value: default_round_time,
            is_timer_running: false,
            is_loading: true,
            resolution_reason: None,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// True once the reveal cursor has walked past the last player
    pub fn all_roles_revealed(&self) -> bool {
        !self.players.is_empty() && self.role_reveal_cursor >= self.players.len()
    }
}
