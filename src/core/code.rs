//! Symbol sequences
//!
//! A `Code` is either the hidden secret or one of the player's guesses.
//! Both are plain ordered sequences; membership in the palette is only
//! enforced where the game needs it.

use super::{Palette, Symbol};
use crate::error::{MastermindError, Result};
use std::ops::Deref;

/// An ordered sequence of symbols
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Code(Vec<Symbol>);

impl Code {
    #[inline]
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.0
    }

    /// Labels of every symbol, in order
    ///
    /// # Errors
    /// Returns `SymbolNotInPalette` with the first position whose symbol
    /// the palette cannot label.
    pub fn labels<'p>(&self, palette: &'p Palette) -> Result<Vec<&'p str>> {
        self.0
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                palette
                    .label_of(symbol)
                    .ok_or(MastermindError::SymbolNotInPalette { position })
            })
            .collect()
    }
}

impl Deref for Code {
    type Target = [Symbol];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Symbol>> for Code {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self(symbols)
    }
}

impl FromIterator<Symbol> for Code {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
