//! Word-list dictionary
//!
//! Supplies the [`Dictionary`] predicate the game session consumes: an
//! embedded list compiled into the binary, or a newline-delimited file.
//! Lines that are not exactly five ASCII letters are skipped on load, so a
//! loaded list never contains an invalid word.

mod embedded;

pub use embedded::WORDS;

use crate::core::{Dictionary, WORD_SIZE};
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// An immutable set of accepted five-letter words.
pub struct WordList {
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl WordList {
    /// The built-in word list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(WORDS.iter().copied())
    }

    /// Load a newline-delimited word list from a file, skipping invalid
    /// lines.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_words(content.lines()))
    }

    /// Build a list from arbitrary strings, keeping only words that are
    /// exactly [`WORD_SIZE`] ASCII letters and canonicalizing to uppercase.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim().to_uppercase();
                (word.len() == WORD_SIZE && word.chars().all(|c| c.is_ascii_uppercase()))
                    .then_some(word)
            })
            .collect();
        let index = words.iter().cloned().collect();

        Self { words, index }
    }

    /// Pick a random target word, or `None` if the list is empty.
    #[must_use]
    pub fn random_target(&self) -> Option<&str> {
        self.words.choose(&mut rand::rng()).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn contains(&self, candidate: &str) -> bool {
        self.index.contains(candidate)
    }
}
