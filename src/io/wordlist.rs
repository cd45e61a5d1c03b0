//! Loading a word list file into a dictionary

use std::path::Path;

use crate::analysis::dictionary::Dictionary;
use crate::io::error::{Result, WithPath};

/// Read a newline separated word list from disk
///
/// Invalid UTF-8 sequences are replaced rather than rejected, since system
/// word lists are not always clean. Parsing follows
/// [`Dictionary::parse_word_list`].
///
/// # Errors
///
/// Returns [`crate::SolverError::FileSystem`] if the file cannot be read
pub fn load_word_list(path: &Path) -> Result<Dictionary> {
    let bytes = std::fs::read(path).with_path(path, "read word list")?;
    Ok(Dictionary::parse_word_list(&String::from_utf8_lossy(&bytes)))
}
