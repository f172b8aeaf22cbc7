//! Marker scanning
//!
//! Second pipeline stage: locates every parenthesized question-number
//! marker (e.g. "(12)", "( 3 )") in the normalized text and records its
//! span, numeric value, and verbatim matched text.

use crate::error::Result;
use regex::Regex;

/// A question-number marker found in the text
///
/// Offsets are byte positions into the normalized text. `raw` is the
/// literal matched substring, preserved exactly as scanned for later use
/// as the display label; it is never regenerated from `number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Byte offset where the match starts
    pub start: usize,
    /// Byte offset one past the end of the match
    pub end: usize,
    /// Parsed question number
    pub number: u32,
    /// The literal matched text, e.g. "(12)"
    pub raw: String,
}

/// Scans text for question-number markers
#[derive(Debug)]
pub struct MarkerScanner {
    marker: Regex,
}

impl MarkerScanner {
    /// Compile the marker pattern
    pub fn new() -> Result<Self> {
        Ok(Self {
            marker: Regex::new(r"\(\s*(\d+)\s*\)")?,
        })
    }

    /// Collect all markers in text order
    ///
    /// Two markers with the same numeric value at different positions are
    /// both retained; disambiguation happens downstream. Zero matches is a
    /// normal outcome, not an error. A digit run too large for `u32` is
    /// not a plausible question number and is skipped.
    pub fn scan(&self, text: &str) -> Vec<Marker> {
        self.marker
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let number = caps[1].parse::<u32>().ok()?;
                Some(Marker {
                    start: whole.start(),
                    end: whole.end(),
                    number,
                    raw: whole.as_str().to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> MarkerScanner {
        MarkerScanner::new().unwrap()
    }

    #[test]
    fn finds_markers_in_text_order() {
        let markers = scanner().scan("(2) first (1) second");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].number, 2);
        assert_eq!(markers[1].number, 1);
        assert!(markers[0].start < markers[1].start);
    }

    #[test]
    fn records_spans_and_raw_text() {
        let text = "ab (12) cd";
        let markers = scanner().scan(text);
        assert_eq!(markers.len(), 1);
        let m = &markers[0];
        assert_eq!(m.start, 3);
        assert_eq!(m.end, 7);
        assert_eq!(&text[m.start..m.end], "(12)");
        assert_eq!(m.raw, "(12)");
    }

    #[test]
    fn keeps_interior_spacing_verbatim() {
        let markers = scanner().scan("x ( 7 ) y");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].number, 7);
        assert_eq!(markers[0].raw, "( 7 )");
    }

    #[test]
    fn retains_duplicate_numbers() {
        let markers = scanner().scan("(5) a (5) b");
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].number, 5);
        assert_eq!(markers[1].number, 5);
    }

    #[test]
    fn no_markers_yields_empty_sequence() {
        assert!(scanner().scan("no markers here").is_empty());
        assert!(scanner().scan("").is_empty());
    }

    #[test]
    fn empty_parentheses_are_not_markers() {
        assert!(scanner().scan("( ) 1 2 3 4").is_empty());
    }

    #[test]
    fn skips_numbers_that_overflow() {
        let markers = scanner().scan("(99999999999999999999) x (3) y");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].number, 3);
    }
}
