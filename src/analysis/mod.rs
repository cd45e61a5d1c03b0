//! Input preprocessing shared by the solver and the CLI

/// Word membership set and word-list parsing
pub mod dictionary;
/// Validated required word lengths
pub mod sizes;
