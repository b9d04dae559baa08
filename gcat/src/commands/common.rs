//! Common types and utilities for gcat commands.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::GcatError;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token dumps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `line:column TYPE "value"` line per token
    #[default]
    Text,
    /// A JSON array of token objects
    Json,
}

impl OutputFormat {
    /// The name used on the command line and in `gcat.toml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = GcatError;

    /// Parses a format name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(GcatError::Validation(format!(
                "{} {}",
                error_messages::UNKNOWN_FORMAT,
                s
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message prefixes, followed by the offending value.
pub mod error_messages {
    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist:";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file:";

    /// Error when an unknown format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown format:";
}

// ============================================================================
// Output Messages
// ============================================================================

/// Standard output messages.
pub mod output_messages {
    /// Printed after a repository skeleton is created.
    pub const INITIALIZED_REPO: &str = "Initialized empty repository in";
}
