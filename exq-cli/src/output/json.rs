//! JSON output formatter

use super::{DocumentQuestions, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter
///
/// Buffers documents and serializes on [`finish`](OutputFormatter::finish):
/// a single document becomes a plain array of question records; several
/// documents become an array of `{ source, questions }` objects.
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentQuestions>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &DocumentQuestions) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match self.documents.as_slice() {
            [single] => serde_json::to_writer_pretty(&mut self.writer, &single.questions)?,
            many => serde_json::to_writer_pretty(&mut self.writer, many)?,
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
