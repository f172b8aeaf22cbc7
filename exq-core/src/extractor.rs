//! Pipeline assembly
//!
//! Ties the stages together: normalize, scan, segment, filter, snippet,
//! deduplicate, sort, assign identifiers. Data flows strictly forward;
//! no stage consults a later stage's output.

use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::filter::ArtifactFilter;
use crate::normalize::Normalizer;
use crate::scanner::MarkerScanner;
use crate::segment;
use crate::snippet::SnippetBuilder;
use crate::types::{Question, QuestionCandidate};
use std::collections::HashMap;

/// The question extraction pipeline
///
/// Compiles all patterns once at construction; [`extract`](Self::extract)
/// is then infallible and safe to call concurrently for independent
/// documents.
pub struct QuestionExtractor {
    config: ExtractorConfig,
    normalizer: Normalizer,
    scanner: MarkerScanner,
    filter: ArtifactFilter,
    snippets: SnippetBuilder,
}

impl QuestionExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with a custom configuration
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        let filter = ArtifactFilter::standard(&config)?;
        Self::with_filter(config, filter)
    }

    /// Create an extractor with a caller-supplied artifact filter
    pub fn with_filter(config: ExtractorConfig, filter: ArtifactFilter) -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
            scanner: MarkerScanner::new()?,
            snippets: SnippetBuilder::new(config.snippet_len)?,
            filter,
            config,
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the ordered question list from raw concatenated page text
    ///
    /// Never fails on string input: text without recognizable markers, or
    /// where every block is filtered out, yields an empty list.
    pub fn extract(&self, text: &str) -> Vec<Question> {
        let normalized = self.normalizer.normalize(text);
        let markers = self.scanner.scan(&normalized);
        let blocks = segment::segment(&normalized, &markers);

        let candidates = blocks.iter().filter_map(|block| {
            if self.filter.discards(block.content) {
                return None;
            }
            let marker = block.marker;
            Some(QuestionCandidate {
                number: marker.number,
                raw_number: marker.raw.clone(),
                content: block.content.to_string(),
                content_len: block.content.chars().count(),
                snippet: self.snippets.build(block.content),
                full_text: format!("{} {}", marker.raw, block.content)
                    .trim()
                    .to_string(),
            })
        });

        // Keep the most complete occurrence per number; a strictly-greater
        // comparison preserves the first-seen candidate on equal lengths.
        let mut best: HashMap<u32, QuestionCandidate> = HashMap::new();
        for candidate in candidates {
            match best.get(&candidate.number) {
                Some(kept) if kept.content_len >= candidate.content_len => {}
                _ => {
                    best.insert(candidate.number, candidate);
                }
            }
        }

        let mut survivors: Vec<QuestionCandidate> = best.into_values().collect();
        survivors.sort_by_key(|c| c.number);

        survivors
            .into_iter()
            .enumerate()
            .map(|(rank, c)| Question {
                id: format!("q-{}", rank + 1),
                raw_number: c.raw_number,
                snippet: c.snippet,
                full_text: c.full_text,
            })
            .collect()
    }
}
