//! Puzzle handle tying a grid, a dictionary and the required word sizes together

use std::collections::BTreeSet;

use crate::algorithm::search::{SearchObserver, Solution, WordSequences};
use crate::analysis::dictionary::Dictionary;
use crate::analysis::sizes::WordSizes;
use crate::io::error::Result;
use crate::spatial::grid::LetterGrid;

/// A validated puzzle ready to be solved
///
/// The stored grid is the starting state and is never mutated by solving;
/// every call to [`Puzzle::solve`] starts a fresh search.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: LetterGrid,
    dictionary: Dictionary,
    sizes: WordSizes,
}

impl Puzzle {
    /// Validate and assemble a puzzle from a letter matrix
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidGrid`] if the matrix is not square, or
    /// [`crate::SolverError::InvalidParameter`] if `word_sizes` is empty or holds a zero
    pub fn new(letters: &[Vec<char>], dictionary: Dictionary, word_sizes: &[usize]) -> Result<Self> {
        let grid = LetterGrid::from_matrix(letters)?;
        let sizes = WordSizes::new(word_sizes)?;
        Ok(Self::from_parts(grid, dictionary, sizes))
    }

    /// Validate and assemble a puzzle from one string per grid row
    ///
    /// # Errors
    ///
    /// Same conditions as [`Puzzle::new`]
    pub fn from_rows<S: AsRef<str>>(
        rows: &[S],
        dictionary: Dictionary,
        word_sizes: &[usize],
    ) -> Result<Self> {
        let grid = LetterGrid::from_rows(rows)?;
        let sizes = WordSizes::new(word_sizes)?;
        Ok(Self::from_parts(grid, dictionary, sizes))
    }

    /// Assemble a puzzle from already validated parts
    pub const fn from_parts(grid: LetterGrid, dictionary: Dictionary, sizes: WordSizes) -> Self {
        Self {
            grid,
            dictionary,
            sizes,
        }
    }

    /// Starting grid
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Words accepted as solutions
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Required word lengths in order
    pub const fn word_sizes(&self) -> &WordSizes {
        &self.sizes
    }

    /// Lazily enumerate every solution in depth-first order
    pub fn solve(&self) -> WordSequences<'_> {
        WordSequences::new(&self.grid, &self.dictionary, &self.sizes)
    }

    /// Like [`Puzzle::solve`], reporting search activity to `observer`
    pub fn solve_with<'a>(&'a self, observer: &'a mut dyn SearchObserver) -> WordSequences<'a> {
        self.solve().with_observer(observer)
    }

    /// Upper-cased grid rows separated by newlines
    pub fn render_grid(&self) -> String {
        self.grid.render()
    }
}

/// Deduplicate solutions and sort them by their word lists
pub fn distinct_sorted<I>(solutions: I) -> Vec<Solution>
where
    I: IntoIterator<Item = Solution>,
{
    solutions
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
