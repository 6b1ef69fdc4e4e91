//! Game orchestration
//!
//! Ties the secret generator and the evaluator together into a session with
//! a round budget and a win/loss lifecycle.

mod config;
mod session;

pub use config::{DEFAULT_MAX_ROUNDS, DEFAULT_SECRET_LENGTH, GameConfig};
pub use session::{GameSession, GameState};
