//! Core domain types for Mastermind
//!
//! This module contains the pure game logic: symbols, palettes, codes,
//! secret generation and guess scoring. Nothing here performs I/O; the only
//! external input is the random source handed to `generate`.

mod code;
mod feedback;
mod generator;
mod palette;
mod symbol;

pub use code::Code;
pub use feedback::{Feedback, Peg, evaluate};
pub use generator::generate;
pub use palette::{DEFAULT_PALETTE_SIZE, Palette};
pub use symbol::Symbol;
