//! Formatting utilities for terminal output

use crate::core::{Feedback, Palette, Peg, Symbol};
use colored::{ColoredString, Colorize};

/// Format key pins as `●` (exact), `○` (misplaced) and `·` (empty)
#[must_use]
pub fn pegs_to_string(feedback: Feedback, length: usize) -> String {
    feedback
        .pegs(length)
        .into_iter()
        .map(|peg| match peg {
            Peg::Exact => '●',
            Peg::Misplaced => '○',
            Peg::Empty => '·',
        })
        .collect()
}

/// A symbol's label painted in the symbol's colour
///
/// Symbols outside the palette print as `?`.
#[must_use]
pub fn colored_label(symbol: Symbol, palette: &Palette) -> ColoredString {
    let (r, g, b) = symbol.components();
    palette
        .label_of(symbol)
        .unwrap_or("?")
        .truecolor(r, g, b)
        .bold()
}

/// Format a code as space-separated coloured labels
#[must_use]
pub fn code_to_string(symbols: &[Symbol], palette: &Palette) -> String {
    symbols
        .iter()
        .map(|&s| colored_label(s, palette).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_mixed() {
        assert_eq!(pegs_to_string(Feedback::new(1, 2), 4), "●○○·");
    }

    #[test]
    fn pegs_empty_and_full() {
        assert_eq!(pegs_to_string(Feedback::new(0, 0), 4), "····");
        assert_eq!(pegs_to_string(Feedback::new(5, 0), 5), "●●●●●");
    }

    #[test]
    fn code_uses_labels() {
        colored::control::set_override(false);
        let palette = Palette::default();
        let text = code_to_string(&[Symbol::RED, Symbol::LILAC, Symbol::CYAN], &palette);
        assert_eq!(text, "R L ?");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
