//! Artifact filtering
//!
//! Fourth pipeline stage: discards content blocks that are too short or
//! match known answer-sheet layouts. The rules are corpus-specific
//! heuristics (calibrated on Eiken papers), kept behind a trait so other
//! document formats can extend the set without touching the pipeline.

use crate::config::ExtractorConfig;
use crate::error::Result;
use regex::Regex;

/// A single exclusion heuristic
///
/// Rules see the trimmed block content and vote to discard it. They are
/// applied in order; the first rule that excludes a block wins.
pub trait ExclusionRule: Send + Sync {
    /// Short identifier for logging and diagnostics
    fn name(&self) -> &'static str;

    /// Whether this rule discards the block
    fn excludes(&self, content: &str) -> bool;
}

/// Discards blocks shorter than the configured minimum
///
/// Very short blocks are typically stray punctuation or running headers,
/// not question text. Runs first so the pattern rules only see blocks of
/// plausible size.
#[derive(Debug)]
pub struct MinLengthRule {
    min_chars: usize,
}

impl MinLengthRule {
    /// Create a rule with the given character threshold
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }
}

impl ExclusionRule for MinLengthRule {
    fn name(&self) -> &'static str {
        "min-length"
    }

    fn excludes(&self, content: &str) -> bool {
        content.chars().count() < self.min_chars
    }
}

/// Discards answer-bubble legend rows: "( ) 1 2 3 4"
#[derive(Debug)]
pub struct BubbleLegendRule {
    pattern: Regex,
}

impl BubbleLegendRule {
    /// Compile the legend pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"^\(\s*\)\s*1\s+2\s+3\s+4")?,
        })
    }
}

impl ExclusionRule for BubbleLegendRule {
    fn name(&self) -> &'static str {
        "bubble-legend"
    }

    fn excludes(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

/// Discards numbered answer rows: "1 2 3 4" followed by another digit
#[derive(Debug)]
pub struct AnswerRowRule {
    pattern: Regex,
}

impl AnswerRowRule {
    /// Compile the answer-row pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(r"^1\s+2\s+3\s+4\s+\d")?,
        })
    }
}

impl ExclusionRule for AnswerRowRule {
    fn name(&self) -> &'static str {
        "answer-row"
    }

    fn excludes(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

/// Ordered set of exclusion rules
pub struct ArtifactFilter {
    rules: Vec<Box<dyn ExclusionRule>>,
}

impl std::fmt::Debug for ArtifactFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<_> = self.rules.iter().map(|r| r.name()).collect();
        f.debug_struct("ArtifactFilter").field("rules", &names).finish()
    }
}

impl ArtifactFilter {
    /// Build the standard rule set: length check first, then the
    /// answer-sheet shapes
    pub fn standard(config: &ExtractorConfig) -> Result<Self> {
        Ok(Self {
            rules: vec![
                Box::new(MinLengthRule::new(config.min_content_len)),
                Box::new(BubbleLegendRule::new()?),
                Box::new(AnswerRowRule::new()?),
            ],
        })
    }

    /// Build a filter from caller-supplied rules
    pub fn with_rules(rules: Vec<Box<dyn ExclusionRule>>) -> Self {
        Self { rules }
    }

    /// Append a rule after the existing ones
    pub fn push_rule(&mut self, rule: Box<dyn ExclusionRule>) {
        self.rules.push(rule);
    }

    /// Whether any rule discards this block
    pub fn discards(&self, content: &str) -> bool {
        self.rules.iter().any(|rule| rule.excludes(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> ArtifactFilter {
        ArtifactFilter::standard(&ExtractorConfig::default()).unwrap()
    }

    const LONG: &str = "This sentence is comfortably longer than forty characters in total.";

    #[test]
    fn discards_short_blocks() {
        let f = filter();
        assert!(f.discards("too short"));
        assert!(f.discards(""));
        assert!(!f.discards(LONG));
    }

    #[test]
    fn length_threshold_counts_characters() {
        let f = ArtifactFilter::standard(
            &ExtractorConfig::builder().min_content_len(5).build(),
        )
        .unwrap();
        // Five multi-byte characters pass a five-character threshold.
        assert!(!f.discards("あいうえお"));
        assert!(f.discards("あいうえ"));
    }

    #[test]
    fn discards_bubble_legend_rows() {
        let f = filter();
        let block = format!("( ) 1 2 3 4 {LONG}");
        assert!(f.discards(&block));
    }

    #[test]
    fn discards_numbered_answer_rows() {
        let f = filter();
        let block = format!("1 2 3 4 5 {LONG}");
        assert!(f.discards(&block));
    }

    #[test]
    fn answer_row_needs_trailing_digit() {
        let f = filter();
        let block = format!("1 2 3 4 people went to the station. {LONG}");
        assert!(!f.discards(&block));
    }

    #[test]
    fn answer_shapes_only_match_at_block_start() {
        let f = filter();
        let block = format!("{LONG} 1 2 3 4 5");
        assert!(!f.discards(&block));
    }

    #[test]
    fn caller_rules_extend_the_set() {
        struct NoFoo;
        impl ExclusionRule for NoFoo {
            fn name(&self) -> &'static str {
                "no-foo"
            }
            fn excludes(&self, content: &str) -> bool {
                content.contains("foo")
            }
        }

        let mut f = filter();
        f.push_rule(Box::new(NoFoo));
        let block = format!("{LONG} foo");
        assert!(f.discards(&block));
        assert!(!f.discards(LONG));
    }
}
