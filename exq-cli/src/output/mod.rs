//! Output formatting module

use anyhow::Result;
use exq_core::Question;
use serde::Serialize;

/// Questions extracted from one input document
#[derive(Debug, Clone, Serialize)]
pub struct DocumentQuestions {
    /// Where the document came from (path or "<stdin>")
    pub source: String,
    /// Extracted question records, ordered by question number
    pub questions: Vec<Question>,
}

/// Trait for output formatters
pub trait OutputFormatter: Send {
    /// Format and output one document's question list
    fn format_document(&mut self, document: &DocumentQuestions) -> Result<()>;

    /// Finalize output (e.g. close the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
