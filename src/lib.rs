//! Mastermind
//!
//! A code-breaking game engine: a hidden sequence of coloured pegs is drawn
//! from a palette and each guess is scored with exact / misplaced pin counts.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::{Feedback, Palette};
//! use mastermind::game::{GameConfig, GameSession, GameState};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let mut session = GameSession::new(GameConfig::default(), &mut rng).unwrap();
//!
//! let guess = Palette::default().parse_code("RVAM").unwrap();
//! let feedback: Feedback = session.submit_guess(&guess).unwrap();
//! assert!(feedback.exact + feedback.misplaced <= 4);
//! assert_eq!(session.rounds_remaining(), 9);
//!
//! if session.state() != GameState::Won {
//!     println!("The code was {}", session.reveal_secret_string().unwrap());
//! }
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Session orchestration
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{MastermindError, Result};
