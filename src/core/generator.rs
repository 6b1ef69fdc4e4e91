//! Secret generation

use crate::error::{MastermindError, Result};
use rand::Rng;
use tracing::debug;

/// Draw a secret of `length` symbols from `palette`
///
/// Each position is drawn independently and uniformly, with replacement,
/// so repeated symbols are expected. The random source is supplied by the
/// caller; pass a seeded `StdRng` for reproducible secrets.
///
/// # Errors
/// Returns `InvalidConfiguration` if `length` is zero or `palette` is empty.
///
/// # Examples
/// ```
/// use mastermind::core::{generate, Palette};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let palette = Palette::default();
/// let mut rng = StdRng::seed_from_u64(42);
/// let secret = generate(palette.symbols(), 4, &mut rng).unwrap();
///
/// assert_eq!(secret.len(), 4);
/// assert!(secret.iter().all(|&s| palette.contains(s)));
/// ```
pub fn generate<T: Clone, R: Rng + ?Sized>(
    palette: &[T],
    length: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if length < 1 {
        return Err(MastermindError::InvalidConfiguration(
            "secret length must be at least 1".to_string(),
        ));
    }
    if palette.is_empty() {
        return Err(MastermindError::InvalidConfiguration(
            "cannot draw a secret from an empty palette".to_string(),
        ));
    }

    let secret: Vec<T> = (0..length)
        .map(|_| palette[rng.random_range(0..palette.len())].clone())
        .collect();

    debug!(length, palette_size = palette.len(), "generated secret");
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Palette, Symbol};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn secret_has_requested_length_and_palette_members() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(1);

        for length in 1..=12 {
            let secret = generate(palette.symbols(), length, &mut rng).unwrap();
            assert_eq!(secret.len(), length);
            assert!(secret.iter().all(|&s| palette.contains(s)));
        }
    }

    #[test]
    fn same_seed_same_secret() {
        let palette = Palette::default();
        let first = generate(palette.symbols(), 6, &mut StdRng::seed_from_u64(99)).unwrap();
        let second = generate(palette.symbols(), 6, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_symbol_palette_repeats() {
        let mut rng = StdRng::seed_from_u64(3);
        let secret = generate(&[Symbol::RED], 4, &mut rng).unwrap();
        assert_eq!(secret, vec![Symbol::RED; 4]);
    }

    #[test]
    fn duplicates_occur() {
        // With 2 symbols and 3 positions a repeat is certain
        let mut rng = StdRng::seed_from_u64(5);
        let secret = generate(&['x', 'y'], 3, &mut rng).unwrap();
        let xs = secret.iter().filter(|&&c| c == 'x').count();
        assert!(xs >= 2 || 3 - xs >= 2);
    }

    #[test]
    fn every_symbol_is_reachable() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(11);
        let secret = generate(palette.symbols(), 600, &mut rng).unwrap();

        for &symbol in palette.symbols() {
            assert!(secret.contains(&symbol), "{symbol} never drawn");
        }
    }

    #[test]
    fn rejects_zero_length() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate(Palette::default().symbols(), 0, &mut rng),
            Err(MastermindError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_empty_palette() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: [Symbol; 0] = [];
        assert!(matches!(
            generate(&empty, 4, &mut rng),
            Err(MastermindError::InvalidConfiguration(_))
        ));
    }
}
