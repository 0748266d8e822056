//! Error handling module for the jamlex CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use jam_lex::LexError;
use thiserror::Error;

/// Main error type for the jamlex CLI application.
#[derive(Error, Debug)]
pub enum JamlexError {
    /// Error when the configuration cannot be loaded or logging cannot be set up.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The first lexical error, when running without recovery.
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    /// Error when writing the token stream fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lexing finished in recovery mode but errors were reported on the way.
    #[error("{count} lexical error(s) reported")]
    Recovered {
        /// Number of errors reported.
        count: usize,
    },
}

/// Result type alias using JamlexError.
pub type Result<T> = std::result::Result<T, JamlexError>;
