//! Error types for the fast-bayes library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`BayesError`] enum.
//!
//! # Examples
//!
//! ```
//! use fast_bayes::error::{BayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(BayesError::invalid_config("smoothing must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for fast-bayes operations.
#[derive(Error, Debug)]
pub enum BayesError {
    /// A score was requested before any observation was recorded.
    #[error("No labels observed: the model has not been trained")]
    NoLabelsObserved,

    /// Stop word lookup errors
    #[error("Stop words error: {0}")]
    StopWords(String),

    /// Rejected configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O errors while reading training samples
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with BayesError.
pub type Result<T> = std::result::Result<T, BayesError>;

impl BayesError {
    /// Create a new stop words error.
    pub fn stop_words<S: Into<String>>(msg: S) -> Self {
        BayesError::StopWords(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        BayesError::InvalidConfig(msg.into())
    }
}
