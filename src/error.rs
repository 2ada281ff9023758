//! Error types for the turkmorph library.
//!
//! All errors are represented by the [`TurkmorphError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use turkmorph::error::{Result, TurkmorphError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TurkmorphError::analysis("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for turkmorph operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum TurkmorphError {
    /// I/O errors (dictionary or affix file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Lexicon-related errors (dictionary loading, malformed entries)
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    /// Affix-rule errors (rule parsing, invalid condition patterns)
    #[error("Rule error: {0}")]
    Rule(String),

    /// Analysis-related errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TurkmorphError.
pub type Result<T> = std::result::Result<T, TurkmorphError>;

impl TurkmorphError {
    /// Create a new lexicon error.
    pub fn lexicon<S: Into<String>>(msg: S) -> Self {
        TurkmorphError::Lexicon(msg.into())
    }

    /// Create a new rule error.
    pub fn rule<S: Into<String>>(msg: S) -> Self {
        TurkmorphError::Rule(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TurkmorphError::Analysis(msg.into())
    }
}
