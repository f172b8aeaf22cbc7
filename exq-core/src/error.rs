//! Core error types

use thiserror::Error;

/// Errors from the extraction core
///
/// Extraction itself never fails on string input; the only failure this
/// crate can signal is a defect in its own patterns, detected when the
/// pipeline is constructed. Callers should surface it unmodified rather
/// than swallow it.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A built-in or caller-supplied pattern failed to compile
    #[error("pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
