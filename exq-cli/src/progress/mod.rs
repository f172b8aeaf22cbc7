//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for multi-document runs
///
/// Stays silent for single documents and in quiet mode; the bar draws to
/// stderr so it never mixes with formatted output on stdout.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter for the given number of documents
    pub fn new(total_documents: u64, quiet: bool) -> Self {
        if quiet || total_documents < 2 {
            return Self { progress_bar: None };
        }

        let pb = ProgressBar::new(total_documents);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} documents {msg}")
                .unwrap()
                .progress_chars("##-"),
        );

        Self {
            progress_bar: Some(pb),
        }
    }

    /// Record a completed document
    pub fn document_completed(&self, source: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("Processed: {source}"));
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear();
        }
    }
}
