//! Secret distribution analysis
//!
//! Draws many secrets and reports how often each symbol appears and how
//! often a secret repeats a symbol. Useful for checking the generator.

use crate::core::{Palette, Symbol, generate};
use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::time::{Duration, Instant};

/// Result of analysing generated secrets
pub struct SecretAnalysis {
    pub games: usize,
    pub length: usize,
    /// `(label, count)` per palette symbol, in palette order
    pub frequencies: Vec<(String, usize)>,
    pub with_repeats: usize,
    pub expected_repeat_share: f64,
    pub duration: Duration,
}

impl SecretAnalysis {
    /// Share of secrets containing at least one repeated symbol
    #[must_use]
    pub fn repeat_share(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.with_repeats as f64 / self.games as f64
        }
    }

    /// Frequency each symbol would have under a perfectly uniform draw
    #[must_use]
    pub fn expected_frequency(&self) -> f64 {
        if self.frequencies.is_empty() {
            0.0
        } else {
            (self.games * self.length) as f64 / self.frequencies.len() as f64
        }
    }
}

/// Draw `games` secrets of `length` from `palette`
///
/// Game `i` uses its own `StdRng` seeded with `seed + i`, so the result is
/// reproducible regardless of how the work is split across threads.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `length` is zero.
pub fn analyze_secrets(
    palette: &Palette,
    length: usize,
    games: usize,
    seed: u64,
    show_progress: bool,
) -> Result<SecretAnalysis> {
    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let secrets: Vec<Vec<Symbol>> = (0..games)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            let secret = generate(palette.symbols(), length, &mut rng);
            pb.inc(1);
            secret
        })
        .collect::<Result<_>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut counts: FxHashMap<Symbol, usize> = FxHashMap::default();
    let mut with_repeats = 0;
    for secret in &secrets {
        for &symbol in secret {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        let distinct: FxHashSet<&Symbol> = secret.iter().collect();
        if distinct.len() < secret.len() {
            with_repeats += 1;
        }
    }

    let frequencies = palette
        .entries()
        .map(|(symbol, label)| (label.to_string(), counts.get(&symbol).copied().unwrap_or(0)))
        .collect();

    Ok(SecretAnalysis {
        games,
        length,
        frequencies,
        with_repeats,
        expected_repeat_share: expected_repeat_share(palette.len(), length),
        duration,
    })
}

/// Probability that a uniform secret of `length` over `palette_size` symbols
/// repeats at least one symbol
#[must_use]
pub fn expected_repeat_share(palette_size: usize, length: usize) -> f64 {
    if length > palette_size {
        return 1.0;
    }
    let n = palette_size as f64;
    let all_distinct: f64 = (0..length).map(|i| (n - i as f64) / n).product();
    1.0 - all_distinct
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_add_up() {
        let palette = Palette::default();
        let result = analyze_secrets(&palette, 4, 500, 1, false).unwrap();

        let total: usize = result.frequencies.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 2000);
        assert_eq!(result.frequencies.len(), 6);
        assert_eq!(result.frequencies[0].0, "R");
        assert!(result.with_repeats <= 500);
    }

    #[test]
    fn reproducible_with_seed() {
        let palette = Palette::default();
        let a = analyze_secrets(&palette, 4, 200, 9, false).unwrap();
        let b = analyze_secrets(&palette, 4, 200, 9, false).unwrap();
        assert_eq!(a.frequencies, b.frequencies);
        assert_eq!(a.with_repeats, b.with_repeats);
    }

    #[test]
    fn roughly_uniform() {
        let palette = Palette::default();
        let result = analyze_secrets(&palette, 4, 3000, 42, false).unwrap();
        let expected = result.expected_frequency();

        for (label, count) in &result.frequencies {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(deviation < 0.15, "{label} drawn {count} times, expected ~{expected}");
        }

        let diff = (result.repeat_share() - result.expected_repeat_share).abs();
        assert!(diff < 0.05, "repeat share {}", result.repeat_share());
    }

    #[test]
    fn repeat_probability() {
        assert!((expected_repeat_share(6, 1)).abs() < 1e-12);
        // 1 - 6*5*4*3 / 6^4
        assert!((expected_repeat_share(6, 4) - (1.0 - 360.0 / 1296.0)).abs() < 1e-12);
        assert!((expected_repeat_share(2, 3) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_length_is_an_error() {
        assert!(analyze_secrets(&Palette::default(), 0, 10, 0, false).is_err());
    }

    #[test]
    fn zero_games() {
        let result = analyze_secrets(&Palette::default(), 4, 0, 0, false).unwrap();
        assert!(result.repeat_share().abs() < f64::EPSILON);
        assert!(result.frequencies.iter().all(|(_, c)| *c == 0));
    }
}
