//! Guess scoring
//!
//! Feedback is the classic pair of pin counts:
//! - exact (black): right symbol in the right position
//! - misplaced (white): right symbol, wrong position
//!
//! Each symbol in the secret can be credited at most once across both
//! counts, which is what makes duplicate symbols subtle.

use crate::error::{MastermindError, Result};
use std::fmt;
use tracing::debug;

/// Pin counts for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    pub exact: usize,
    pub misplaced: usize,
}

/// One key pin in the classic board display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peg {
    Exact,
    Misplaced,
    Empty,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, misplaced: usize) -> Self {
        Self { exact, misplaced }
    }

    /// True when every one of the `length` positions matched exactly
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Key pins for a code of `length`: exact first, then misplaced, then empty
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Feedback, Peg};
    ///
    /// let pegs = Feedback::new(1, 2).pegs(4);
    /// assert_eq!(pegs, vec![Peg::Exact, Peg::Misplaced, Peg::Misplaced, Peg::Empty]);
    /// ```
    #[must_use]
    pub fn pegs(self, length: usize) -> Vec<Peg> {
        let mut pegs = Vec::with_capacity(length);
        pegs.extend(std::iter::repeat_n(Peg::Exact, self.exact));
        pegs.extend(std::iter::repeat_n(Peg::Misplaced, self.misplaced));
        pegs.resize(length.max(pegs.len()), Peg::Empty);
        pegs
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} misplaced", self.exact, self.misplaced)
    }
}

/// Score `guess` against `secret`
///
/// # Algorithm
/// 1. Exact pass: count positions where the symbols agree; collect the
///    remaining guess and secret symbols in encounter order
/// 2. Misplaced pass: for each leftover guess symbol, if it is still in the
///    leftover secret pool, count it and remove the first such occurrence
///
/// Inputs are never modified; the pools hold references only.
///
/// # Errors
/// Returns `LengthMismatch` if the two sequences differ in length. Nothing
/// is computed in that case.
///
/// # Examples
/// ```
/// use mastermind::core::{evaluate, Feedback};
///
/// let secret = ['R', 'G', 'B', 'Y'];
/// let guess = ['G', 'R', 'B', 'R'];
/// assert_eq!(evaluate(&secret, &guess).unwrap(), Feedback::new(1, 2));
/// ```
pub fn evaluate<T: PartialEq>(secret: &[T], guess: &[T]) -> Result<Feedback> {
    if secret.len() != guess.len() {
        return Err(MastermindError::LengthMismatch {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let mut exact = 0;
    let mut unmatched_guess = Vec::with_capacity(guess.len());
    let mut unmatched_secret = Vec::with_capacity(secret.len());

    for (g, s) in guess.iter().zip(secret) {
        if g == s {
            exact += 1;
        } else {
            unmatched_guess.push(g);
            unmatched_secret.push(s);
        }
    }

    let mut misplaced = 0;
    for g in unmatched_guess {
        if let Some(pos) = unmatched_secret.iter().position(|&s| s == g) {
            misplaced += 1;
            unmatched_secret.remove(pos);
        }
    }

    let feedback = Feedback::new(exact, misplaced);
    debug!(length = secret.len(), %feedback, "evaluated guess");
    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Palette, Symbol, generate};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const A: char = 'A';
    const B: char = 'B';

    #[test]
    fn identical_codes_are_all_exact() {
        for code in [&['A', 'B', 'C', 'D'][..], &['A', 'A', 'A', 'A'], &['Z']] {
            assert_eq!(evaluate(code, code).unwrap(), Feedback::new(code.len(), 0));
        }
    }

    #[test]
    fn crossed_duplicates_count_once_each() {
        let secret = [A, A, B, B];
        let guess = [A, B, A, B];
        assert_eq!(evaluate(&secret, &guess).unwrap(), Feedback::new(2, 2));
    }

    #[test]
    fn repeated_secret_single_exact() {
        let secret = [A, A, A, A];
        let guess = [A, B, B, B];
        assert_eq!(evaluate(&secret, &guess).unwrap(), Feedback::new(1, 0));
    }

    #[test]
    fn repeated_guess_not_double_counted() {
        // Only one A in the secret, so only one A can score
        let secret = [A, B, B, B];
        let guess = ['C', A, A, A];
        assert_eq!(evaluate(&secret, &guess).unwrap(), Feedback::new(0, 1));
    }

    #[test]
    fn exact_match_consumes_before_misplaced() {
        // The A at position 0 is exact; the guess A at position 3 has no A left
        let secret = [A, B, 'C', 'D'];
        let guess = [A, 'E', 'F', A];
        assert_eq!(evaluate(&secret, &guess).unwrap(), Feedback::new(1, 0));
    }

    #[test]
    fn disjoint_codes_score_nothing() {
        let secret = [A, A, B, B];
        let guess = ['C', 'D', 'E', 'F'];
        assert_eq!(evaluate(&secret, &guess).unwrap(), Feedback::new(0, 0));
    }

    #[test]
    fn worked_scenario() {
        let secret = [Symbol::RED, Symbol::GREEN, Symbol::BLUE, Symbol::YELLOW];
        let guess = [Symbol::GREEN, Symbol::RED, Symbol::BLUE, Symbol::RED];
        assert_eq!(evaluate(&secret, &guess).unwrap(), Feedback::new(1, 2));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            evaluate(&[A, B, A, B], &[A, B, A]),
            Err(MastermindError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn empty_codes_score_nothing() {
        let empty: [char; 0] = [];
        assert_eq!(evaluate(&empty, &empty).unwrap(), Feedback::default());
    }

    #[test]
    fn scores_are_bounded_by_symbol_counts() {
        let palette = Palette::standard(4).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let secret = generate(palette.symbols(), 5, &mut rng).unwrap();
            let guess = generate(palette.symbols(), 5, &mut rng).unwrap();
            let feedback = evaluate(&secret, &guess).unwrap();

            assert!(feedback.exact + feedback.misplaced <= 5);

            // Total credit equals the multiset intersection size
            let common: usize = palette
                .symbols()
                .iter()
                .map(|s| {
                    let in_secret = secret.iter().filter(|&x| x == s).count();
                    let in_guess = guess.iter().filter(|&x| x == s).count();
                    in_secret.min(in_guess)
                })
                .sum();
            assert_eq!(feedback.exact + feedback.misplaced, common);
        }
    }

    #[test]
    fn evaluation_is_pure() {
        let secret = vec![A, A, B, B];
        let guess = vec![B, B, A, A];
        let first = evaluate(&secret, &guess).unwrap();
        let second = evaluate(&secret, &guess).unwrap();

        assert_eq!(first, second);
        assert_eq!(first, Feedback::new(0, 4));
        assert_eq!(secret, vec![A, A, B, B]);
        assert_eq!(guess, vec![B, B, A, A]);
    }

    #[test]
    fn pegs_fill_to_length() {
        assert_eq!(Feedback::new(0, 0).pegs(3), vec![Peg::Empty; 3]);
        assert_eq!(Feedback::new(4, 0).pegs(4), vec![Peg::Exact; 4]);
        assert!(Feedback::new(4, 0).is_solved(4));
        assert!(!Feedback::new(3, 1).is_solved(4));
    }

    #[test]
    fn display() {
        assert_eq!(Feedback::new(1, 2).to_string(), "1 exact, 2 misplaced");
    }
}
