//! Enumeration of every connected letter path of a fixed length
//!
//! Paths start from each occupied cell in row-major order and extend through
//! the 8 neighbours in [`NEIGHBOUR_OFFSETS`] order, never revisiting a cell and
//! never stepping onto an empty one. No dictionary knowledge lives here.

use std::num::NonZeroUsize;

use crate::algorithm::bitset::CellSet;
use crate::algorithm::search::SearchObserver;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{LetterGrid, NEIGHBOUR_OFFSETS, Position};

/// Ordered cells consumed by one candidate word
pub type Path = Vec<Position>;

/// Depth-first path enumeration state, detached from any grid borrow
///
/// The cursor must always be advanced against the same grid (or an identical
/// copy of it) that it was created for. Keeping the grid out of the cursor lets
/// a search frame own both its grid copy and the cursor walking it.
#[derive(Debug, Clone)]
pub struct PathCursor {
    length: usize,
    next_start: usize,
    path: Path,
    /// Next offset index to try from each path position
    directions: Vec<usize>,
    visited: CellSet,
}

impl PathCursor {
    /// Create a cursor yielding paths of exactly `length` cells over `grid`
    pub fn new(length: NonZeroUsize, grid: &LetterGrid) -> Self {
        let length = length.get();
        Self {
            length,
            next_start: 0,
            path: Vec::with_capacity(length),
            directions: Vec::with_capacity(length),
            visited: CellSet::new(grid.cell_count()),
        }
    }

    /// Target path length
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Advance to the next complete path, or `None` once every start is exhausted
    pub fn next_path(&mut self, grid: &LetterGrid) -> Option<Path> {
        loop {
            // The previous call emitted a full path; backtrack from it
            if self.path.len() == self.length {
                self.pop(grid);
            }

            if self.path.is_empty() {
                let start = self.next_start(grid)?;
                self.push(grid, start);
            } else if let Some(next) = self.extension(grid) {
                self.push(grid, next);
            } else {
                self.pop(grid);
                continue;
            }

            if self.path.len() == self.length {
                return Some(self.path.clone());
            }
        }
    }

    fn next_start(&mut self, grid: &LetterGrid) -> Option<Position> {
        while let Some(position) = grid.position_of(self.next_start) {
            self.next_start += 1;
            if grid.is_occupied(position) {
                return Some(position);
            }
        }
        None
    }

    fn extension(&mut self, grid: &LetterGrid) -> Option<Position> {
        let tail = *self.path.last()?;
        let direction = self.directions.last_mut()?;

        while let Some(&offset) = NEIGHBOUR_OFFSETS.get(*direction) {
            *direction += 1;
            let Some(candidate) = grid.neighbour(tail, offset) else {
                continue;
            };
            if grid.is_occupied(candidate) && !self.visited.contains(grid.cell_index(candidate)) {
                return Some(candidate);
            }
        }
        None
    }

    fn push(&mut self, grid: &LetterGrid, position: Position) {
        self.visited.insert(grid.cell_index(position));
        self.path.push(position);
        self.directions.push(0);
    }

    fn pop(&mut self, grid: &LetterGrid) {
        if let Some(position) = self.path.pop() {
            self.visited.remove(grid.cell_index(position));
        }
        self.directions.pop();
    }
}

/// Lazy iterator over every path of one length through a borrowed grid
pub struct Paths<'a> {
    grid: &'a LetterGrid,
    cursor: PathCursor,
    observer: Option<&'a mut dyn SearchObserver>,
}

impl<'a> Paths<'a> {
    /// Enumerate paths of exactly `length` cells
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::InvalidParameter`] if `length` is zero
    pub fn new(grid: &'a LetterGrid, length: usize) -> Result<Self> {
        let length = NonZeroUsize::new(length)
            .ok_or_else(|| invalid_parameter("length", &length, &"path length must be positive"))?;
        Ok(Self {
            grid,
            cursor: PathCursor::new(length, grid),
            observer: None,
        })
    }

    /// Notify `observer` of every path as it is produced
    #[must_use]
    pub fn with_observer(mut self, observer: &'a mut dyn SearchObserver) -> Self {
        self.observer = Some(observer);
        self
    }
}

impl Iterator for Paths<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        let path = self.cursor.next_path(self.grid)?;
        if let Some(observer) = self.observer.as_deref_mut() {
            observer.path_enumerated(&path);
        }
        Some(path)
    }
}

impl std::iter::FusedIterator for Paths<'_> {}

/// Enumerate every path of exactly `length` cells through `grid`
///
/// # Errors
///
/// Returns [`crate::SolverError::InvalidParameter`] if `length` is zero
pub fn enumerate_paths(grid: &LetterGrid, length: usize) -> Result<Paths<'_>> {
    Paths::new(grid, length)
}
