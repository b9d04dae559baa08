//! Error handling module for the gcat CLI.
//!
//! Wraps the library errors so every command returns one error type.

use gitcat_lex::LexError;
use gitcat_repo::RepoError;
use thiserror::Error;

/// Main error type for the gcat CLI application.
#[derive(Error, Debug)]
pub enum GcatError {
    /// Error when the configuration cannot be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when the input is not well-formed configuration text.
    ///
    /// Displays the lexer's message unchanged.
    #[error("{0}")]
    Lex(#[from] LexError),

    /// Error when the repository skeleton cannot be created.
    #[error("{0}")]
    Repo(#[from] RepoError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GcatError.
pub type Result<T> = std::result::Result<T, GcatError>;
