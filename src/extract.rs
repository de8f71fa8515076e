// Document text extraction — file reads and line splitting.
//
// Plain UTF-8 text only. An unreadable file is fatal to the invoking
// command (surfaced with context), unlike the in-pipeline drops which are
// always silent.

use std::path::Path;

use anyhow::{Context, Result};

/// Read a document into a string.
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))
}

/// Split a document into trimmed, non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
