//! Letter grid state with gravity-based collapse
//!
//! Cells hold a lowercase letter or nothing. Removing a path's letters and
//! letting each column settle is the only mutation the search performs, and it
//! is always applied to a private copy of the grid.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::{EMPTY_CELL_DISPLAY, EMPTY_CELL_MARKERS};
use crate::io::error::{Result, invalid_grid};

/// Grid coordinates as `[row, column]`
pub type Position = [usize; 2];

/// The 8 neighbour offsets as `[row, column]` deltas
///
/// Order determines path enumeration order and must stay fixed.
pub const NEIGHBOUR_OFFSETS: [[isize; 2]; 8] = [
    [0, 1],
    [1, 0],
    [0, -1],
    [-1, 0],
    [1, 1],
    [1, -1],
    [-1, 1],
    [-1, -1],
];

/// Square grid of letters where consumed cells are refilled from above
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: Array2<Option<char>>,
}

impl LetterGrid {
    /// Create an N×N grid with every cell empty
    pub fn empty(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    /// Build a grid from a character matrix
    ///
    /// Whitespace and `.` become empty cells; everything else is stored lower-cased.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidGrid`] if any row length differs from the
    /// number of rows
    pub fn from_matrix(letters: &[Vec<char>]) -> Result<Self> {
        let size = letters.len();
        let mut cells = Vec::with_capacity(size * size);

        for (row_index, row) in letters.iter().enumerate() {
            if row.len() != size {
                return Err(invalid_grid(&format!(
                    "row {} has {} cells but the grid has {size} rows",
                    row_index + 1,
                    row.len()
                )));
            }
            cells.extend(row.iter().map(|&c| normalize_cell(c)));
        }

        let cells = Array2::from_shape_vec((size, size), cells)
            .map_err(|e| invalid_grid(&e))?;
        Ok(Self { cells })
    }

    /// Build a grid from one string per row
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidGrid`] if the rows do not form a square
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let letters: Vec<Vec<char>> = rows.iter().map(|r| r.as_ref().chars().collect()).collect();
        Self::from_matrix(&letters)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Total number of cells, empty or not
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of a position
    pub fn cell_index(&self, position: Position) -> usize {
        position[0] * self.size() + position[1]
    }

    /// Position of a row-major index
    pub fn position_of(&self, index: usize) -> Option<Position> {
        let size = self.size();
        (index < self.cell_count()).then(|| [index / size, index % size])
    }

    /// Letter at a position, `None` if empty or out of bounds
    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.cells.get(position).copied().flatten()
    }

    /// Whether a position is in bounds and holds a letter
    pub fn is_occupied(&self, position: Position) -> bool {
        self.letter_at(position).is_some()
    }

    /// Apply a neighbour offset, returning the position only if it is in bounds
    pub fn neighbour(&self, position: Position, offset: [isize; 2]) -> Option<Position> {
        let row = position[0].checked_add_signed(offset[0])?;
        let col = position[1].checked_add_signed(offset[1])?;
        let size = self.size();
        (row < size && col < size).then_some([row, col])
    }

    /// Letters along a path concatenated in path order
    ///
    /// Returns `None` if any position on the path is empty.
    pub fn word_for(&self, path: &[Position]) -> Option<String> {
        path.iter().map(|&position| self.letter_at(position)).collect()
    }

    /// Remove the letters on `path` and let every column settle downward
    ///
    /// Surviving letters keep their relative order within their column;
    /// vacated cells at the top of each column become empty.
    pub fn collapse(&mut self, path: &[Position]) {
        for &position in path {
            if let Some(cell) = self.cells.get_mut(position) {
                *cell = None;
            }
        }

        for mut column in self.cells.columns_mut() {
            let letters: Vec<char> = column.iter().flatten().copied().collect();
            let gap = column.len() - letters.len();
            for (row, cell) in column.iter_mut().enumerate() {
                *cell = row
                    .checked_sub(gap)
                    .and_then(|index| letters.get(index).copied());
            }
        }
    }

    /// Upper-cased rows separated by newlines, empty cells shown as spaces
    ///
    /// Every cell renders as exactly one character, so each row is `size` wide.
    pub fn render(&self) -> String {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|&cell| display_cell(cell)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn display_cell(cell: Option<char>) -> char {
    cell.map_or(EMPTY_CELL_DISPLAY, |letter| {
        letter.to_uppercase().next().unwrap_or(letter)
    })
}

fn normalize_cell(c: char) -> Option<char> {
    if c.is_whitespace() || EMPTY_CELL_MARKERS.contains(&c) {
        None
    } else {
        c.to_lowercase().next()
    }
}
