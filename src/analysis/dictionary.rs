//! Word membership set and word-list parsing rules

use std::collections::HashSet;

use crate::analysis::sizes::WordSizes;
use crate::io::configuration::POSSESSIVE_SUFFIX;

/// Set of valid lowercase words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from words, trimming and lower-casing each
    ///
    /// Blank entries are skipped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();
        for word in words {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }

    /// Parse a newline separated word list
    ///
    /// Lines are trimmed and lower-cased; blank lines and possessive forms
    /// ending in `'s` are skipped.
    pub fn parse_word_list(contents: &str) -> Self {
        Self::from_words(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.ends_with(POSSESSIVE_SUFFIX)),
        )
    }

    /// Add a word, returning whether it was new
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        self.words.insert(word.to_lowercase())
    }

    /// Membership test against a lowercase word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Drop every word whose length is not one of `sizes`
    pub fn retain_lengths(&mut self, sizes: &WordSizes) {
        self.words
            .retain(|word| sizes.contains(word.chars().count()));
    }
}
