//! exq CLI library
//!
//! Command-line front end for the exq question extraction pipeline.
//! Reads extracted-text documents, runs the core pipeline, and prints
//! the resulting question list.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
