//! Solver for letter-grid word puzzles where consumed letters fall under gravity
//!
//! Words are traced along 8-connected paths through a square grid. Once a word
//! is taken its letters disappear and every column settles downward before the
//! next word is searched for, so each solution is an ordered word sequence.

#![forbid(unsafe_code)]

/// Depth-first word sequence search and the puzzle handle
pub mod algorithm;
/// Dictionary and word size preprocessing
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Letter grid state and path enumeration
pub mod spatial;

pub use algorithm::search::{SearchObserver, Solution};
pub use algorithm::solver::Puzzle;
pub use io::error::{Result, SolverError};
