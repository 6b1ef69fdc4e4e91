//! Guess scoring command
//!
//! Scores one guess against a secret given on the command line.

use crate::core::{Code, Feedback, Palette, evaluate};
use crate::error::Result;

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

impl ScoreResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.feedback.is_solved(self.secret.len())
    }
}

/// Parse both codes against `palette` and score the guess
///
/// # Errors
///
/// Returns an error if:
/// - Either code uses a label the palette does not know
/// - The two codes differ in length
pub fn score_guess(palette: &Palette, secret: &str, guess: &str) -> Result<ScoreResult> {
    let secret = palette.parse_code(secret)?;
    let guess = palette.parse_code(guess)?;
    let feedback = evaluate(secret.symbols(), guess.symbols())?;

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MastermindError;

    #[test]
    fn scores_labels() {
        let result = score_guess(&Palette::default(), "RVAM", "VRAR").unwrap();
        assert_eq!(result.feedback, Feedback::new(1, 2));
        assert!(!result.is_solved());
    }

    #[test]
    fn solved_when_identical() {
        let result = score_guess(&Palette::default(), "llnn", "LLNN").unwrap();
        assert!(result.is_solved());
    }

    #[test]
    fn unknown_label_fails() {
        assert!(matches!(
            score_guess(&Palette::default(), "RVAM", "RVAZ"),
            Err(MastermindError::UnknownLabel(_))
        ));
    }

    #[test]
    fn length_mismatch_fails() {
        assert!(matches!(
            score_guess(&Palette::default(), "RVAM", "RVAMM"),
            Err(MastermindError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        ));
    }
}
