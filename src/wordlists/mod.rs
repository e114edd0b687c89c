//! Word lists for Distle
//!
//! Provides the embedded dictionary and loading of custom dictionaries.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};
pub use loader::{load_from_file, words_from_slice};

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: FxHashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_mixes_word_lengths() {
        let lengths: FxHashSet<usize> = DICTIONARY.iter().map(|w| w.len()).collect();
        assert!(lengths.len() > 1, "Distle words vary in length");
    }
}
