//! Validated list of required word lengths

use std::fmt;
use std::num::NonZeroUsize;

use crate::io::configuration::SOLUTION_SEPARATOR;
use crate::io::error::{Result, invalid_parameter};

/// Ordered, non-empty list of positive word lengths
///
/// The first length must be found first, the second in the grid left behind
/// by the first, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSizes {
    sizes: Vec<NonZeroUsize>,
}

impl WordSizes {
    /// Validate a list of lengths
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] if the list is empty or
    /// contains a zero
    pub fn new(sizes: &[usize]) -> Result<Self> {
        if sizes.is_empty() {
            return Err(invalid_parameter(
                "word_sizes",
                &"",
                &"at least one word size is required",
            ));
        }

        let sizes = sizes
            .iter()
            .map(|&size| {
                NonZeroUsize::new(size).ok_or_else(|| {
                    invalid_parameter("word_sizes", &size, &"word sizes must be positive")
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sizes })
    }

    /// Parse comma separated lengths such as `"4, 5,3"`
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] if an entry is not an
    /// integer, is not positive, or no entries are given
    pub fn parse(text: &str) -> Result<Self> {
        let sizes = text
            .split(SOLUTION_SEPARATOR)
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                let value: i64 = entry.parse().map_err(|_parse_error| {
                    invalid_parameter("word_sizes", &entry, &"word sizes must be integers")
                })?;
                usize::try_from(value)
                    .ok()
                    .filter(|&size| size > 0)
                    .ok_or_else(|| {
                        invalid_parameter("word_sizes", &value, &"word sizes must be positive")
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&sizes)
    }

    /// Number of words in a solution
    pub const fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the list holds no lengths
    pub const fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Length of the word at `index`
    pub fn get(&self, index: usize) -> Option<NonZeroUsize> {
        self.sizes.get(index).copied()
    }

    /// Length of the first word
    pub fn first(&self) -> Option<NonZeroUsize> {
        self.get(0)
    }

    /// Iterate lengths in order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.sizes.iter().map(|size| size.get())
    }

    /// Whether any word has exactly `length` letters
    pub fn contains(&self, length: usize) -> bool {
        self.iter().any(|size| size == length)
    }

    /// Sum of all word lengths
    pub fn total_letters(&self) -> usize {
        self.iter().sum()
    }

    /// Side length of the square grid that the words exactly use up
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] if the letter total is not
    /// a perfect square
    pub fn grid_size(&self) -> Result<usize> {
        let total = self.total_letters();
        let side = total.isqrt();
        if side * side == total {
            Ok(side)
        } else {
            Err(invalid_parameter(
                "word_sizes",
                self,
                &format!("letter total {total} is not a perfect square"),
            ))
        }
    }
}

impl fmt::Display for WordSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.iter().map(|size| size.to_string()).collect();
        f.write_str(&text.join(&SOLUTION_SEPARATOR.to_string()))
    }
}
