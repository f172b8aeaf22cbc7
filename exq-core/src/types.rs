//! Output record types

/// An intermediate question record, one per surviving content block
///
/// Candidates may share a `number` (the same question can appear in both
/// an index pass and the body); deduplication resolves that later using
/// `content_len`, never the snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCandidate {
    /// Parsed marker number
    pub number: u32,
    /// Literal marker text as scanned, e.g. "(12)"
    pub raw_number: String,
    /// Trimmed block content
    pub content: String,
    /// Character length of `content`
    pub content_len: usize,
    /// Display preview
    pub snippet: String,
    /// Marker text plus content, e.g. "(12) Where is ..."
    pub full_text: String,
}

/// A finished question record
///
/// `id`s are contiguous from "q-1" and rank records by ascending marker
/// number. Consumers should treat all fields as immutable display strings
/// and never re-parse them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// Stable display identifier, "q-{rank}"
    pub id: String,
    /// Literal marker text as scanned
    pub raw_number: String,
    /// Display preview, possibly truncated
    pub snippet: String,
    /// Marker text plus full content
    pub full_text: String,
}
