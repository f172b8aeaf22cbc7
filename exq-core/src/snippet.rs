//! Snippet construction
//!
//! Fifth pipeline stage: derives a short display preview from surviving
//! block content. Snippets are cosmetic only; filtering and deduplication
//! operate on the untruncated content.

use crate::error::Result;
use regex::Regex;

/// Ellipsis appended to truncated snippets
pub const ELLIPSIS: &str = "...";

/// Builds display snippets from question content
#[derive(Debug)]
pub struct SnippetBuilder {
    speaker_label: Regex,
    max_chars: usize,
}

impl SnippetBuilder {
    /// Compile the speaker-label pattern
    pub fn new(max_chars: usize) -> Result<Self> {
        Ok(Self {
            // Dialogue framing like "A:", "Boy 1:", "Woman :" at the start
            // of listening-section content.
            speaker_label: Regex::new(r"^[A-Za-z]+\s*\d*\s*:\s*")?,
            max_chars,
        })
    }

    /// Derive a snippet: strip a leading speaker label, trim, truncate
    ///
    /// Truncation counts characters, not bytes, so a multi-byte character
    /// is never split.
    pub fn build(&self, content: &str) -> String {
        let stripped = self.speaker_label.replace(content, "");
        let stripped = stripped.trim();

        match stripped.char_indices().nth(self.max_chars) {
            Some((byte_end, _)) => format!("{}{}", &stripped[..byte_end], ELLIPSIS),
            None => stripped.to_string(),
        }
    }
}
