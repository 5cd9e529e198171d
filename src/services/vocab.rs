use std::collections::HashSet;

use crate::errors::GameError;

/// The word list players match against. Built once at startup, then
/// shared read-only across all sessions; never mutated afterward.
///
/// Construction deduplicates while preserving the order words first
/// appeared, so the jumbler sees a stable, predictable pool.
pub struct Vocab {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Vocab {
    /// Build a vocabulary from a word source, dropping duplicates but
    /// keeping first-seen order. Fails if no words remain.
    pub fn new<I>(source: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut words = Vec::new();
        let mut index = HashSet::new();

        for word in source {
            if index.insert(word.clone()) {
                words.push(word);
            }
        }

        if words.is_empty() {
            return Err(GameError::EmptyVocabulary);
        }

        Ok(Vocab { words, index })
    }

    /// Exact-match membership test. Case and whitespace sensitive; an
    /// empty candidate is simply not a member.
    pub fn has(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// The deduplicated word list in stored order. This is the base
    /// pool the jumbler draws from.
    pub fn as_list(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab(words: &[&str]) -> Vocab {
        Vocab::new(words.iter().map(|w| w.to_string())).unwrap()
    }

    #[test]
    fn test_dedup_preserves_order() {
        let v = vocab(&["cat", "dog", "cat", "bird", "dog"]);
        assert_eq!(v.as_list(), &["cat", "dog", "bird"]);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_has_is_exact_match() {
        let v = vocab(&["cat", "dog"]);
        assert!(v.has("cat"));
        assert!(!v.has("Cat"));
        assert!(!v.has("cat "));
        assert!(!v.has("bird"));
        assert!(!v.has(""));
    }

    #[test]
    fn test_has_unaffected_by_source_duplicates() {
        let once = vocab(&["cat", "dog"]);
        let thrice = vocab(&["cat", "cat", "cat", "dog"]);
        assert_eq!(once.has("cat"), thrice.has("cat"));
        assert_eq!(once.has("bird"), thrice.has("bird"));
    }

    #[test]
    fn test_empty_source_rejected() {
        let result = Vocab::new(Vec::new());
        assert_eq!(result.err(), Some(GameError::EmptyVocabulary));
    }
}
