//! Peg colours
//!
//! A `Symbol` is a plain RGB value. Two symbols are the same symbol exactly
//! when their components are equal, which keeps duplicate handling in the
//! evaluator independent of where a value came from.

use std::fmt;

/// A single code peg, identified by its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    r: u8,
    g: u8,
    b: u8,
}

impl Symbol {
    pub const RED: Self = Self::rgb(240, 17, 17);
    pub const GREEN: Self = Self::rgb(104, 227, 70);
    pub const BLUE: Self = Self::rgb(45, 64, 189);
    pub const BROWN: Self = Self::rgb(191, 83, 40);
    pub const ORANGE: Self = Self::rgb(242, 135, 34);
    pub const LILAC: Self = Self::rgb(204, 94, 235);
    pub const YELLOW: Self = Self::rgb(245, 222, 51);
    pub const CYAN: Self = Self::rgb(38, 198, 218);

    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Colour components as `(r, g, b)`
    #[inline]
    #[must_use]
    pub const fn components(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
