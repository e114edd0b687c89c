//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file or from the embedded list.

use crate::core::Word;
use crate::error::LoadError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load a dictionary from a file, one word per line
///
/// Blank lines and lines starting with `#` are ignored, and surrounding
/// whitespace is trimmed. Every other line is taken verbatim, case and
/// punctuation included. Duplicates are kept; the guesser drops them when a
/// game starts.
///
/// # Errors
///
/// Returns `LoadError::Read` if the file cannot be read and
/// `LoadError::NoWords` if it contains no valid word.
///
/// # Examples
/// ```no_run
/// use distle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(LoadError::NoWords {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), words = words.len(), "loaded dictionary");
    Ok(words)
}

fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use distle::wordlists::loader::words_from_slice;
/// use distle::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
