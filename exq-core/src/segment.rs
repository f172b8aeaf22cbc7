//! Content segmentation
//!
//! Third pipeline stage: pairs consecutive markers into content blocks.
//! Block `i` spans from the end of marker `i` to the start of marker
//! `i + 1`, or to end-of-text for the last marker, so every character
//! after the first marker belongs to exactly one block.

use crate::scanner::Marker;

/// The text span following one marker, up to the next
///
/// Borrowed from the normalized text; lives only for the duration of one
/// pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct ContentBlock<'a> {
    /// The marker this block belongs to
    pub marker: &'a Marker,
    /// Trimmed block content
    pub content: &'a str,
}

/// Slice the text between consecutive markers into one block per marker
pub fn segment<'a>(text: &'a str, markers: &'a [Marker]) -> Vec<ContentBlock<'a>> {
    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let content_end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            ContentBlock {
                marker,
                content: text[marker.end..content_end].trim(),
            }
        })
        .collect()
}
