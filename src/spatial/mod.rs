//! Spatial data structures and grid manipulation
//!
//! This module contains:
//! - The letter grid with its collapse operation
//! - Enumeration of connected letter paths

/// Letter grid state, neighbour offsets and collapse
pub mod grid;
/// Path enumeration over a grid snapshot
pub mod path;

pub use grid::{LetterGrid, Position};
pub use path::{Path, enumerate_paths};
