//! In-memory session core for a hidden-role word party game.
//!
//! [`session::GameSession`] owns the game state and the round countdown; UI
//! screens issue its commands and observe cloned state snapshots. There is no
//! networking and no persistence. A session lives and dies in memory.

pub mod catalog;
pub mod config;
pub mod session;
pub mod types;

pub use session::{GameError, GameResult, GameSession};
