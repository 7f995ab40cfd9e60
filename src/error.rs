//! Error types for the hanzi-hint library.
//!
//! Only the loading side of the crate can fail. Queries against a loaded
//! dictionary are total and never return an error.
//!
//! # Examples
//!
//! ```
//! use hanzi_hint::error::{HanziHintError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(HanziHintError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for hanzi-hint operations.
#[derive(Error, Debug)]
pub enum HanziHintError {
    /// I/O errors (reading dictionaries, word banks, config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dictionary entry that cannot be registered
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Failure wrapped with context about the step that failed
    #[error("Anyhow error: {0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with HanziHintError.
pub type Result<T> = std::result::Result<T, HanziHintError>;

impl HanziHintError {
    /// Create a new invalid entry error.
    pub fn invalid_entry<S: Into<String>>(msg: S) -> Self {
        HanziHintError::InvalidEntry(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        HanziHintError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        HanziHintError::Other(msg.into())
    }
}
