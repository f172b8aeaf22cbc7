//! Question extraction pipeline for exam-paper text
//!
//! Turns a single concatenated, whitespace-noisy text string (the output of
//! an upstream PDF text extractor) into an ordered list of question records,
//! keyed by the parenthesized number markers embedded in the text.
//!
//! The pipeline is a pure, synchronous transformation: identical input text
//! always produces the identical output list. It performs no I/O and holds
//! no hidden state, so a single [`QuestionExtractor`] may be shared across
//! threads and invoked concurrently for independent documents.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod normalize;
pub mod scanner;
pub mod segment;
pub mod snippet;
pub mod types;

// Re-export key types
pub use config::{ExtractorConfig, ExtractorConfigBuilder};
pub use error::{CoreError, Result};
pub use extractor::QuestionExtractor;
pub use filter::{ArtifactFilter, ExclusionRule};
pub use types::{Question, QuestionCandidate};

/// Extract questions from text with the default configuration
pub fn extract_questions(text: &str) -> Result<Vec<Question>> {
    let extractor = QuestionExtractor::new()?;
    Ok(extractor.extract(text))
}
