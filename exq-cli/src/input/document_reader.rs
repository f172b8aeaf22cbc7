//! Document reading
//!
//! A document is the concatenated text of one exam paper, already
//! extracted from the PDF upstream. One file (or stdin) per document.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Reads extracted-text documents
pub struct DocumentReader;

impl DocumentReader {
    /// Read a document from a UTF-8 text file
    pub fn read_path(path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read document: {}", path.display()))
    }

    /// Read a single document from stdin
    pub fn read_stdin() -> Result<String> {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read document from stdin")?;
        Ok(buffer)
    }
}
