//! Input resolution and reading

pub mod document_reader;
pub mod pattern_resolver;

pub use document_reader::DocumentReader;
pub use pattern_resolver::resolve_patterns;
