//! Plain text output formatter

use super::{DocumentQuestions, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one question per line
///
/// Emits `id<TAB>raw_number<TAB>snippet` rows; with `full` enabled the
/// untruncated question text follows each row, indented. A source header
/// is printed once more than one document is written.
pub struct TextFormatter<W: Write> {
    writer: W,
    full: bool,
    documents_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, full: bool) -> Self {
        Self {
            writer,
            full,
            documents_written: 0,
        }
    }
}

impl<W: Write + Send> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &DocumentQuestions) -> Result<()> {
        if self.documents_written > 0 {
            writeln!(self.writer)?;
        }
        if self.documents_written > 0 || document.source != "<stdin>" {
            writeln!(self.writer, "# {}", document.source)?;
        }

        for question in &document.questions {
            writeln!(
                self.writer,
                "{}\t{}\t{}",
                question.id, question.raw_number, question.snippet
            )?;
            if self.full {
                writeln!(self.writer, "    {}", question.full_text)?;
            }
        }

        self.documents_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
