/// Command-line parsing and solve orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Progress spinner fed by search callbacks
pub mod progress;
/// Interactive capture of word sizes and grid rows
pub mod prompt;
/// Grid banner and solution list output
pub mod report;
/// Word list file loading
pub mod wordlist;
