/// Fixed-size bitset tracking the cells a path already uses
pub mod bitset;
/// Lazy multi-word search over collapsing grid copies
pub mod search;
/// Puzzle construction, solving entry points and result ordering
pub mod solver;
