//! Palette of selectable symbols
//!
//! A palette is an ordered list of distinct symbols, each paired with the
//! display label the player types or sees when the secret is revealed.

use super::{Code, Symbol};
use crate::error::{MastermindError, Result};
use rustc_hash::FxHashSet;

/// Classic peg colours in display order
const STANDARD: [(Symbol, &str); 8] = [
    (Symbol::RED, "R"),
    (Symbol::GREEN, "V"),
    (Symbol::BLUE, "A"),
    (Symbol::BROWN, "M"),
    (Symbol::ORANGE, "N"),
    (Symbol::LILAC, "L"),
    (Symbol::YELLOW, "Y"),
    (Symbol::CYAN, "C"),
];

/// Number of colours in the default palette
pub const DEFAULT_PALETTE_SIZE: usize = 6;

/// Ordered set of distinct symbols with labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    symbols: Vec<Symbol>,
    labels: Vec<String>,
}

impl Palette {
    /// Build a palette from `(symbol, label)` pairs
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if:
    /// - There are fewer than two entries
    /// - A symbol appears twice
    /// - A label is empty or appears twice (case-insensitive)
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Palette, Symbol};
    ///
    /// let palette = Palette::new(vec![
    ///     (Symbol::RED, "R".to_string()),
    ///     (Symbol::BLUE, "B".to_string()),
    /// ]).unwrap();
    /// assert_eq!(palette.len(), 2);
    ///
    /// assert!(Palette::new(vec![(Symbol::RED, "R".to_string())]).is_err());
    /// ```
    pub fn new(entries: Vec<(Symbol, String)>) -> Result<Self> {
        if entries.len() < 2 {
            return Err(MastermindError::InvalidConfiguration(format!(
                "palette needs at least 2 symbols, got {}",
                entries.len()
            )));
        }

        let mut seen_symbols = FxHashSet::default();
        let mut seen_labels = FxHashSet::default();
        for (symbol, label) in &entries {
            if !seen_symbols.insert(*symbol) {
                return Err(MastermindError::InvalidConfiguration(format!(
                    "symbol {symbol} appears more than once in the palette"
                )));
            }
            let label = label.trim();
            if label.is_empty() {
                return Err(MastermindError::InvalidConfiguration(
                    "palette labels must not be empty".to_string(),
                ));
            }
            if !seen_labels.insert(fold_case(label)) {
                return Err(MastermindError::InvalidConfiguration(format!(
                    "label '{label}' appears more than once in the palette"
                )));
            }
        }

        let (symbols, labels) = entries
            .into_iter()
            .map(|(symbol, label)| (symbol, label.trim().to_string()))
            .unzip();

        Ok(Self { symbols, labels })
    }

    /// The first `size` classic colours
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` unless `size` is in `2..=8`.
    pub fn standard(size: usize) -> Result<Self> {
        if !(2..=STANDARD.len()).contains(&size) {
            return Err(MastermindError::InvalidConfiguration(format!(
                "palette size must be between 2 and {}, got {size}",
                STANDARD.len()
            )));
        }

        Self::new(
            STANDARD[..size]
                .iter()
                .map(|&(symbol, label)| (symbol, label.to_string()))
                .collect(),
        )
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Iterate `(symbol, label)` pairs in palette order
    pub fn entries(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.symbols
            .iter()
            .copied()
            .zip(self.labels.iter().map(String::as_str))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Position of `symbol` in the palette (first match)
    #[must_use]
    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Display label of `symbol`, or `None` if the palette does not contain it
    #[must_use]
    pub fn label_of(&self, symbol: Symbol) -> Option<&str> {
        self.index_of(symbol).map(|i| self.labels[i].as_str())
    }

    /// Symbol whose label matches `label`, ignoring case
    #[must_use]
    pub fn symbol_for(&self, label: &str) -> Option<Symbol> {
        let label = fold_case(label.trim());
        self.labels
            .iter()
            .position(|l| fold_case(l) == label)
            .map(|i| self.symbols[i])
    }

    /// Parse player input into a code
    ///
    /// Input containing whitespace or commas is split into label tokens;
    /// otherwise each character is read as one label.
    ///
    /// # Errors
    /// Returns `UnknownLabel` for the first token that matches no label.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Palette, Symbol};
    ///
    /// let palette = Palette::default();
    /// let code = palette.parse_code("rvam").unwrap();
    /// assert_eq!(code.symbols(), &[Symbol::RED, Symbol::GREEN, Symbol::BLUE, Symbol::BROWN]);
    ///
    /// let spaced = palette.parse_code("R, V A M").unwrap();
    /// assert_eq!(code, spaced);
    /// ```
    pub fn parse_code(&self, text: &str) -> Result<Code> {
        let text = text.trim();
        let separated = text.chars().any(|c| c.is_whitespace() || c == ',');

        let symbols = if separated {
            text.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(|token| self.lookup(token))
                .collect::<Result<Vec<_>>>()?
        } else {
            text.chars()
                .map(|c| self.lookup(c.encode_utf8(&mut [0; 4])))
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Code::new(symbols))
    }

    fn lookup(&self, token: &str) -> Result<Symbol> {
        self.symbol_for(token)
            .ok_or_else(|| MastermindError::UnknownLabel(token.to_string()))
    }
}

/// Case folding shared by label validation and lookup
fn fold_case(label: &str) -> String {
    label.to_lowercase()
}

impl Default for Palette {
    /// The six colour palette of the classic board
    fn default() -> Self {
        Self {
            symbols: STANDARD[..DEFAULT_PALETTE_SIZE]
                .iter()
                .map(|&(symbol, _)| symbol)
                .collect(),
            labels: STANDARD[..DEFAULT_PALETTE_SIZE]
                .iter()
                .map(|&(_, label)| label.to_string())
                .collect(),
        }
    }
}
