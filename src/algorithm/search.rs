//! Depth-first search for ordered word sequences carved out of a collapsing grid
//!
//! Each level of the search owns a private copy of the grid and a path cursor
//! over it. A dictionary match at a non-final level collapses a fresh copy and
//! descends; the parent copy is never touched, so sibling paths are always
//! tried against the same starting state.

use std::fmt;

use crate::analysis::dictionary::Dictionary;
use crate::analysis::sizes::WordSizes;
use crate::io::configuration::SOLUTION_SEPARATOR;
use crate::spatial::grid::{LetterGrid, Position};
use crate::spatial::path::PathCursor;

/// One complete ordered word list, one word per requested size
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    /// Wrap an ordered word list
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Words in extraction order
    pub const fn words(&self) -> &[String] {
        self.words.as_slice()
    }

    /// Number of words
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the solution holds no words
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = SOLUTION_SEPARATOR.to_string();
        f.write_str(&self.words.join(&separator))
    }
}

/// Receives notifications while paths are enumerated and words are matched
///
/// Every hook defaults to doing nothing.
pub trait SearchObserver {
    /// A complete candidate path was produced
    fn path_enumerated(&mut self, _path: &[Position]) {}

    /// A candidate path spelled a dictionary word at search depth `depth`
    fn word_matched(&mut self, _depth: usize, _word: &str) {}

    /// A full solution is about to be yielded
    fn solution_found(&mut self, _solution: &Solution) {}
}

/// Observer that tallies search activity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidate paths produced at every depth
    pub paths_enumerated: u64,
    /// Candidate paths whose text was in the dictionary
    pub words_matched: u64,
    /// Solutions yielded, duplicates included
    pub solutions_found: u64,
}

impl SearchObserver for SearchStats {
    fn path_enumerated(&mut self, _path: &[Position]) {
        self.paths_enumerated += 1;
    }

    fn word_matched(&mut self, _depth: usize, _word: &str) {
        self.words_matched += 1;
    }

    fn solution_found(&mut self, _solution: &Solution) {
        self.solutions_found += 1;
    }
}

/// One search level: its grid snapshot and the cursor walking it
struct Frame {
    grid: LetterGrid,
    cursor: PathCursor,
}

/// Lazy iterator over every solution, in depth-first enumeration order
///
/// The same word list may be yielded more than once when it can be reached
/// through different paths.
pub struct WordSequences<'a> {
    dictionary: &'a Dictionary,
    sizes: &'a WordSizes,
    frames: Vec<Frame>,
    /// Word chosen at each level below the top frame
    words: Vec<String>,
    observer: Option<&'a mut dyn SearchObserver>,
}

impl<'a> WordSequences<'a> {
    /// Start a search over a copy of `grid`
    pub fn new(grid: &LetterGrid, dictionary: &'a Dictionary, sizes: &'a WordSizes) -> Self {
        let frames = sizes
            .first()
            .map(|length| Frame {
                cursor: PathCursor::new(length, grid),
                grid: grid.clone(),
            })
            .into_iter()
            .collect();

        Self {
            dictionary,
            sizes,
            frames,
            words: Vec::with_capacity(sizes.len()),
            observer: None,
        }
    }

    /// Report search activity to `observer`
    #[must_use]
    pub fn with_observer(mut self, observer: &'a mut dyn SearchObserver) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl Iterator for WordSequences<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Solution> {
        loop {
            let depth = self.frames.len().checked_sub(1)?;
            let frame = self.frames.last_mut()?;

            let Some(path) = frame.cursor.next_path(&frame.grid) else {
                // Branch exhausted: drop its grid and the word that led here
                self.frames.pop();
                self.words.pop();
                continue;
            };
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.path_enumerated(&path);
            }

            let Some(word) = frame.grid.word_for(&path) else {
                continue;
            };
            if !self.dictionary.contains(&word) {
                continue;
            }
            if let Some(observer) = self.observer.as_deref_mut() {
                observer.word_matched(depth, &word);
            }

            let Some(next_length) = self.sizes.get(depth + 1) else {
                let mut words = self.words.clone();
                words.push(word);
                let solution = Solution::new(words);
                if let Some(observer) = self.observer.as_deref_mut() {
                    observer.solution_found(&solution);
                }
                return Some(solution);
            };

            let mut grid = frame.grid.clone();
            grid.collapse(&path);
            let cursor = PathCursor::new(next_length, &grid);
            self.frames.push(Frame { grid, cursor });
            self.words.push(word);
        }
    }
}

impl std::iter::FusedIterator for WordSequences<'_> {}

/// Search `grid` for every ordered word sequence matching `sizes`
pub fn find_word_sequences<'a>(
    grid: &LetterGrid,
    dictionary: &'a Dictionary,
    sizes: &'a WordSizes,
) -> WordSequences<'a> {
    WordSequences::new(grid, dictionary, sizes)
}
