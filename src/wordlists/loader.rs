//! Word list loading utilities
//!
//! Records are one per line; only the first comma or whitespace separated
//! field is read. Entries are lowercased and anything that is not a
//! five-letter word is skipped.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_autosolver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_records(&content))
}

/// Load several word lists and merge them
///
/// The union is deduplicated keeping the first occurrence.
///
/// # Errors
///
/// Returns the first I/O error encountered.
pub fn load_merged<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<Word>> {
    let mut merged = Vec::new();
    for path in paths {
        let words = load_from_file(path)?;
        log::debug!("{}: {} words", path.as_ref().display(), words.len());
        merged.extend(words);
    }
    Ok(dedup(merged))
}

/// Parse word-list text into words
#[must_use]
pub fn parse_records(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let field = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .find(|f| !f.is_empty())?;
            Word::new(field).ok()
        })
        .collect()
}

/// Drop repeated words, keeping first-seen order
#[must_use]
pub fn dedup(words: Vec<Word>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_autosolver::wordlists::loader::words_from_slice;
/// use wordle_autosolver::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
