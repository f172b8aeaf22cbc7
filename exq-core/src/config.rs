//! Extraction configuration

/// Minimum trimmed content length (in characters) for a block to count as
/// question text rather than a stray artifact.
pub const DEFAULT_MIN_CONTENT_LEN: usize = 40;

/// Maximum snippet length (in characters) before truncation.
pub const DEFAULT_SNIPPET_LEN: usize = 70;

/// Tunable parameters for the extraction pipeline
///
/// The defaults were calibrated against Eiken exam papers; other corpora
/// may need different thresholds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Blocks with fewer trimmed characters than this are discarded
    pub min_content_len: usize,
    /// Snippets longer than this are truncated with an ellipsis
    pub snippet_len: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_content_len: DEFAULT_MIN_CONTENT_LEN,
            snippet_len: DEFAULT_SNIPPET_LEN,
        }
    }
}

impl ExtractorConfig {
    /// Create a builder
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ExtractorConfigBuilder {
    config: ExtractorConfig,
}

impl ExtractorConfigBuilder {
    /// Set the minimum content length
    pub fn min_content_len(mut self, len: usize) -> Self {
        self.config.min_content_len = len;
        self
    }

    /// Set the snippet truncation length
    pub fn snippet_len(mut self, len: usize) -> Self {
        self.config.snippet_len = len;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ExtractorConfig {
        self.config
    }
}
