//! Input pattern resolution
//!
//! Each argument is either a literal path or a glob pattern. Literal
//! paths must exist; a pattern that matches nothing is tolerated as long
//! as some other argument produces files.

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve input arguments to a sorted, deduplicated list of files
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        if is_literal_path(pattern) {
            let path = PathBuf::from(pattern);
            if !path.is_file() {
                return Err(CliError::FileNotFound(pattern.clone()).into());
            }
            files.push(path);
            continue;
        }

        let matches = glob(pattern)
            .map_err(|_| CliError::InvalidPattern(pattern.clone()))?;
        for entry in matches {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInput.into());
    }

    files.sort();
    files.dedup();

    Ok(files)
}

/// Whether the argument contains no glob metacharacters
fn is_literal_path(pattern: &str) -> bool {
    !pattern.contains(['*', '?', '[', ']'])
}
