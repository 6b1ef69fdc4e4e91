//! A single game: hidden secret plus round budget
//!
//! The session owns its secret for its whole lifetime and moves through
//! `InProgress` to one of the terminal states `Won` or `Lost`. Feedback is
//! returned to the caller and not stored; front-ends keep their own board.

use super::GameConfig;
use crate::core::{Code, Feedback, Palette, Symbol, evaluate, generate};
use crate::error::{MastermindError, Result};
use rand::Rng;
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// One game of Mastermind
#[derive(Debug, Clone)]
pub struct GameSession {
    palette: Palette,
    secret: Code,
    max_rounds: usize,
    rounds_remaining: usize,
    state: GameState,
}

impl GameSession {
    /// Start a game with a freshly drawn secret
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use mastermind::game::{GameConfig, GameSession, GameState};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let session = GameSession::new(GameConfig::default(), &mut rng).unwrap();
    ///
    /// assert_eq!(session.state(), GameState::InProgress);
    /// assert_eq!(session.rounds_remaining(), 10);
    /// ```
    #[instrument(skip(config, rng), fields(length = config.secret_length, rounds = config.max_rounds))]
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let secret = Code::new(generate(
            config.palette.symbols(),
            config.secret_length,
            rng,
        )?);
        info!("new game started");
        Ok(Self::from_parts(config, secret))
    }

    /// Start a game with a known secret
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if the configuration is invalid, the
    /// secret has the wrong length, or it uses symbols outside the palette.
    #[instrument(skip_all)]
    pub fn with_secret(config: GameConfig, secret: Code) -> Result<Self> {
        config.validate()?;
        if secret.len() != config.secret_length {
            return Err(MastermindError::InvalidConfiguration(format!(
                "secret has {} symbols, expected {}",
                secret.len(),
                config.secret_length
            )));
        }
        if let Some(position) = secret.iter().position(|&s| !config.palette.contains(s)) {
            return Err(MastermindError::InvalidConfiguration(format!(
                "secret symbol at position {position} is not in the palette"
            )));
        }
        info!("new game started with fixed secret");
        Ok(Self::from_parts(config, secret))
    }

    fn from_parts(config: GameConfig, secret: Code) -> Self {
        Self {
            palette: config.palette,
            secret,
            max_rounds: config.max_rounds,
            rounds_remaining: config.max_rounds,
            state: GameState::InProgress,
        }
    }

    /// Score a guess and advance the game
    ///
    /// A guess of the wrong length is rejected without using up a round.
    ///
    /// # Errors
    /// - `InvalidStateTransition` if the game is already won or lost
    /// - `LengthMismatch` if the guess length differs from the secret length
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Palette};
    /// use mastermind::game::{GameConfig, GameSession, GameState};
    ///
    /// let palette = Palette::default();
    /// let secret = palette.parse_code("RVAM").unwrap();
    /// let mut session = GameSession::with_secret(GameConfig::default(), secret.clone()).unwrap();
    ///
    /// let feedback = session.submit_guess(&palette.parse_code("VRAR").unwrap()).unwrap();
    /// assert_eq!(feedback, Feedback::new(1, 2));
    ///
    /// session.submit_guess(&secret).unwrap();
    /// assert_eq!(session.state(), GameState::Won);
    /// ```
    #[instrument(skip_all)]
    pub fn submit_guess(&mut self, guess: &[Symbol]) -> Result<Feedback> {
        if self.state.is_terminal() {
            warn!(state = %self.state, "guess submitted after game over");
            return Err(MastermindError::InvalidStateTransition(self.state));
        }

        let feedback = evaluate(self.secret.symbols(), guess)?;
        self.rounds_remaining -= 1;
        debug!(round = self.rounds_used(), %feedback, "guess scored");

        if feedback.is_solved(self.secret.len()) {
            self.state = GameState::Won;
            info!(rounds_used = self.rounds_used(), "game won");
        } else if self.rounds_remaining == 0 {
            self.state = GameState::Lost;
            info!("game lost");
        }

        Ok(feedback)
    }

    /// Labels of the secret, in order
    ///
    /// Available in any state and does not change it.
    ///
    /// # Errors
    /// Returns `SymbolNotInPalette` if the secret and palette have diverged.
    pub fn reveal_secret(&self) -> Result<Vec<String>> {
        Ok(self
            .secret
            .labels(&self.palette)?
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// The secret's labels joined for display, e.g. `"RVAM"`
    ///
    /// # Errors
    /// Returns `SymbolNotInPalette` if the secret and palette have diverged.
    pub fn reveal_secret_string(&self) -> Result<String> {
        Ok(self.secret.labels(&self.palette)?.concat())
    }

    /// Swap in a different palette, keeping the secret
    ///
    /// Reconfigures the palette used for reveal. The secret is not re-checked
    /// here, so `reveal_secret` fails with `SymbolNotInPalette` if the new
    /// palette lacks one of its symbols.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[inline]
    #[must_use]
    pub const fn rounds_remaining(&self) -> usize {
        self.rounds_remaining
    }

    #[inline]
    #[must_use]
    pub const fn rounds_used(&self) -> usize {
        self.max_rounds - self.rounds_remaining
    }

    #[inline]
    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[inline]
    #[must_use]
    pub fn secret_length(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }
}
