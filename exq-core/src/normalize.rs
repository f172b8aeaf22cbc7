//! Text normalization
//!
//! First pipeline stage: collapses whitespace noise from the PDF text
//! extractor and strips the recurring page-header decoration that Eiken
//! papers repeat on every page (e.g. "Grade 3 ! 4 !", "Grade Pre-2 ! 6 !").

use crate::error::Result;
use regex::Regex;

/// Whitespace and page-header normalizer
#[derive(Debug)]
pub struct Normalizer {
    whitespace: Regex,
    page_header: Regex,
}

impl Normalizer {
    /// Compile the normalization patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            whitespace: Regex::new(r"\s+")?,
            // "Grade", grade level (optionally "Pre-" prefixed), then the
            // exclamation-delimited page number decoration.
            page_header: Regex::new(r"Grade\s+(?:Pre-)?\d+\s*!\s*\d+\s*!")?,
        })
    }

    /// Normalize raw extracted text
    ///
    /// Collapses every whitespace run to a single space, removes page-header
    /// fragments, and collapses again. Idempotent; empty input yields an
    /// empty string. Never fails.
    pub fn normalize(&self, text: &str) -> String {
        let collapsed = self.whitespace.replace_all(text, " ");
        let mut current = collapsed.trim().to_string();

        // Removing a header can expose another one spanning the removal
        // site, so strip to a fixpoint. Each pass shortens the text, so
        // this terminates.
        loop {
            let stripped = self.page_header.replace_all(&current, " ");
            let recollapsed = self.whitespace.replace_all(&stripped, " ");
            let next = recollapsed.trim().to_string();
            if next == current {
                return current;
            }
            current = next;
        }
    }
}
