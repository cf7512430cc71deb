//! Word list loading
//!
//! A word list is a plain text file with one candidate word per line.
//! Loading trims each line and drops lines that trim to empty; everything
//! else (case conversion, length filtering) happens later in the pipeline.

use std::fs;
use std::io;
use std::path::Path;

/// Read a word list file into trimmed, non-empty lines.
///
/// The whole file is read into memory; word lists are expected to fit.
/// I/O and decoding failures propagate to the pipeline-level error boundary.
pub fn load_words(path: &Path) -> io::Result<Vec<String>> {
    let source = fs::read_to_string(path)?;
    Ok(split_words(&source))
}

/// Split word list text into trimmed, non-empty lines.
///
/// Line order is preserved and duplicates are kept.
pub fn split_words(source: &str) -> Vec<String> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
