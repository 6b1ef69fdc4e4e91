//! Session configuration

use crate::core::Palette;
use crate::error::{MastermindError, Result};

/// Default number of symbols in a secret
pub const DEFAULT_SECRET_LENGTH: usize = 4;

/// Default number of guesses allowed per game
pub const DEFAULT_MAX_ROUNDS: usize = 10;

/// Settings supplied when a session is constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub palette: Palette,
    pub secret_length: usize,
    pub max_rounds: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(palette: Palette, secret_length: usize, max_rounds: usize) -> Self {
        Self {
            palette,
            secret_length,
            max_rounds,
        }
    }

    /// Configuration using the first `palette_size` classic colours
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if any of the values is out of range.
    pub fn standard(palette_size: usize, secret_length: usize, max_rounds: usize) -> Result<Self> {
        let config = Self::new(Palette::standard(palette_size)?, secret_length, max_rounds);
        config.validate()?;
        Ok(config)
    }

    /// Check the length and round budget
    ///
    /// The palette validates itself on construction.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `secret_length` or `max_rounds` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.secret_length < 1 {
            return Err(MastermindError::InvalidConfiguration(
                "secret length must be at least 1".to_string(),
            ));
        }
        if self.max_rounds < 1 {
            return Err(MastermindError::InvalidConfiguration(
                "round budget must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Palette::default(), DEFAULT_SECRET_LENGTH, DEFAULT_MAX_ROUNDS)
    }
}
