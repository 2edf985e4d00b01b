//! Random key generation.

use classic_core::Alphabet;
use rand::seq::SliceRandom;
use rand::Rng;

/// Draws `length` distinct alphabet symbols in random order.
///
/// A `length` of at least the alphabet size yields a full random square.
pub fn random_key<R: Rng + ?Sized>(alphabet: &Alphabet, length: usize, rng: &mut R) -> String {
    let mut symbols = alphabet.symbols().to_vec();
    symbols.shuffle(rng);
    symbols.truncate(length);
    symbols.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use classic_core::KeyMatrix;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn full_length_key_is_a_permutation() {
        let alphabet = Alphabet::alphanumeric36();
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        let key = random_key(&alphabet, 64, &mut rng);
        assert_eq!(key.chars().count(), 36);
        let matrix = KeyMatrix::build(&key, &alphabet);
        assert_eq!(matrix.cells().iter().collect::<String>(), key);
    }

    #[test]
    fn short_key_has_distinct_symbols() {
        let alphabet = Alphabet::latin25();
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        let key = random_key(&alphabet, 7, &mut rng);
        let mut chars: Vec<char> = key.chars().collect();
        assert_eq!(chars.len(), 7);
        chars.sort_unstable();
        chars.dedup();
        assert_eq!(chars.len(), 7);
        assert!(key.chars().all(|c| alphabet.contains(c)));
    }

    #[test]
    fn same_seed_same_key() {
        let alphabet = Alphabet::latin25();
        let a = random_key(&alphabet, 25, &mut ChaCha20Rng::from_seed([5u8; 32]));
        let b = random_key(&alphabet, 25, &mut ChaCha20Rng::from_seed([5u8; 32]));
        assert_eq!(a, b);
    }
}
