use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::errors::GameError;

/// Build the scrambled letter string for a new game.
///
/// The first `count` words of `words` are consumed; word selection is
/// deterministic, only the order of the combined letters is randomized.
/// A `count` larger than the pool is clamped to the pool size, since
/// callers have already applied the min(vocab, threshold) policy.
///
/// With a seed the permutation comes from a seeded generator, so the
/// same words, count, and seed give a byte-identical jumble. Without
/// one the thread RNG is used and each call scrambles differently.
pub fn jumble(words: &[String], count: usize, seed: Option<u64>) -> Result<String, GameError> {
    if count == 0 {
        return Err(GameError::NonPositiveCount);
    }
    let count = count.min(words.len());

    let mut letters: Vec<char> = words[..count].iter().flat_map(|w| w.chars()).collect();

    match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            letters.shuffle(&mut rng);
        }
        None => {
            letters.shuffle(&mut rand::thread_rng());
        }
    }

    let jumble: String = letters.into_iter().collect();
    debug!(
        "Jumbled {} words into {} letters (seed: {:?})",
        count,
        jumble.chars().count(),
        seed
    );
    Ok(jumble)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn sorted_letters(s: &str) -> Vec<char> {
        let mut letters: Vec<char> = s.chars().collect();
        letters.sort_unstable();
        letters
    }

    #[test]
    fn test_seeded_jumble_is_deterministic() {
        let pool = words(&["cat", "dog", "bird"]);
        let first = jumble(&pool, 2, Some(42)).unwrap();
        let second = jumble(&pool, 2, Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_jumbles_differ() {
        // With 26 distinct letters the odds of two identical shuffles
        // are 1/26!, so a flake here means the RNG is broken.
        let pool = words(&["abcdefghijklm", "nopqrstuvwxyz"]);
        let first = jumble(&pool, 2, None).unwrap();
        let second = jumble(&pool, 2, None).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_letters_are_conserved() {
        let pool = words(&["cat", "dog", "bird"]);
        for count in 1..=3 {
            let result = jumble(&pool, count, Some(7)).unwrap();
            let expected: String = pool[..count].concat();
            assert_eq!(sorted_letters(&result), sorted_letters(&expected));
        }
    }

    #[test]
    fn test_count_clamped_to_pool() {
        let pool = words(&["cat", "dog"]);
        let result = jumble(&pool, 10, Some(7)).unwrap();
        assert_eq!(sorted_letters(&result), sorted_letters("catdog"));
    }

    #[test]
    fn test_zero_count_rejected() {
        let pool = words(&["cat"]);
        assert_eq!(jumble(&pool, 0, None).err(), Some(GameError::NonPositiveCount));
    }

    #[test]
    fn test_selection_is_first_n() {
        // Only letter order is randomized, never which words are chosen
        let pool = words(&["cat", "dog", "bird"]);
        let result = jumble(&pool, 2, Some(99)).unwrap();
        assert_eq!(sorted_letters(&result), sorted_letters("catdog"));
    }
}
