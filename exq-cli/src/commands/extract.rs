//! Extract command implementation

use crate::input::{resolve_patterns, DocumentReader};
use crate::output::{DocumentQuestions, JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use exq_core::{ExtractorConfig, QuestionExtractor};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Input files or glob patterns; "-" reads one document from stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the untruncated question text beneath each row (text format)
    #[arg(long)]
    pub full: bool,

    /// Minimum question content length in characters
    #[arg(long, value_name = "CHARS")]
    pub min_length: Option<usize>,

    /// Snippet truncation length in characters
    #[arg(long, value_name = "CHARS")]
    pub snippet_length: Option<usize>,

    /// Process input documents in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated rows, one question per line
    Text,
    /// JSON array of question records
    Json,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting question extraction");
        log::debug!("Arguments: {:?}", self);

        let extractor = QuestionExtractor::with_config(self.extractor_config())?;
        let documents = self.read_documents()?;

        let progress = ProgressReporter::new(documents.len() as u64, self.quiet);
        let results = if self.parallel {
            documents
                .par_iter()
                .map(|(source, text)| self.run_document(&extractor, &progress, source, text))
                .collect::<Vec<_>>()
        } else {
            documents
                .iter()
                .map(|(source, text)| self.run_document(&extractor, &progress, source, text))
                .collect()
        };
        progress.finish();

        self.write_output(&results)
    }

    fn extractor_config(&self) -> ExtractorConfig {
        let mut builder = ExtractorConfig::builder();
        if let Some(min) = self.min_length {
            builder = builder.min_content_len(min);
        }
        if let Some(len) = self.snippet_length {
            builder = builder.snippet_len(len);
        }
        builder.build()
    }

    /// Read every input document into memory as (source, text) pairs
    fn read_documents(&self) -> Result<Vec<(String, String)>> {
        if self.input.iter().any(|arg| arg == "-") {
            if self.input.len() > 1 {
                anyhow::bail!("stdin input (\"-\") cannot be combined with file patterns");
            }
            return Ok(vec![("<stdin>".to_string(), DocumentReader::read_stdin()?)]);
        }

        let paths = resolve_patterns(&self.input)?;
        log::info!("Processing {} document(s)", paths.len());

        paths
            .into_iter()
            .map(|path| {
                let text = DocumentReader::read_path(&path)?;
                Ok((path.display().to_string(), text))
            })
            .collect()
    }

    /// Run the pipeline over one document
    fn run_document(
        &self,
        extractor: &QuestionExtractor,
        progress: &ProgressReporter,
        source: &str,
        text: &str,
    ) -> DocumentQuestions {
        let questions = extractor.extract(text);
        if questions.is_empty() {
            // A user-facing condition, not a failure.
            log::warn!("No questions found in {source}");
        } else {
            log::debug!("{source}: {} question(s)", questions.len());
        }
        progress.document_completed(source);

        DocumentQuestions {
            source: source.to_string(),
            questions,
        }
    }

    fn write_output(&self, results: &[DocumentQuestions]) -> Result<()> {
        let writer: Box<dyn Write + Send> = match &self.output {
            Some(path) => Box::new(File::create(path)?),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, self.full)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };

        for document in results {
            formatter.format_document(document)?;
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
