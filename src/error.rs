//! Error taxonomy for the game engine
//!
//! Every fallible operation in the library reports one of these variants
//! synchronously to its caller. Nothing is retried and no partial results
//! are returned on failure.

use crate::game::GameState;
use thiserror::Error;

/// Errors raised by generation, evaluation and session handling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MastermindError {
    /// Bad palette, secret length or round budget. Fatal to session construction.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Guess length differs from the secret length. The caller should re-prompt.
    #[error("guess has {actual} symbols, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A guess was submitted after the game ended.
    #[error("cannot submit a guess: game is already {0}")]
    InvalidStateTransition(GameState),

    /// The secret holds a symbol the palette does not know about.
    #[error("secret symbol at position {position} is not in the palette")]
    SymbolNotInPalette { position: usize },

    /// Player input named a label that is not part of the palette.
    #[error("unknown label '{0}'")]
    UnknownLabel(String),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, MastermindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        let err = MastermindError::LengthMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "guess has 3 symbols, expected 4");

        let err = MastermindError::InvalidStateTransition(GameState::Won);
        assert_eq!(err.to_string(), "cannot submit a guess: game is already won");

        let err = MastermindError::UnknownLabel("X".to_string());
        assert_eq!(err.to_string(), "unknown label 'X'");
    }
}
