//! Lexical errors.
//!
//! Lexing is fail-fast: the first malformed construct aborts the pass and
//! is reported as a [`LexError`]. The `Display` text is stable, in the form
//! `"<description> (<line>:<column>)"`, so callers may match on it.

use thiserror::Error;

use crate::token::Position;

/// Error raised when configuration text cannot be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A section header is not closed by `]` before a newline or end of input.
    #[error("missing ] character ({position})")]
    MissingClosingBracket {
        /// Position of the offending rune.
        position: Position,
    },

    /// A subsection or quoted value is not closed by `"` before a newline or
    /// end of input.
    #[error("missing \" character ({position})")]
    MissingQuote {
        /// Position of the offending rune.
        position: Position,
    },

    /// A rune that is not allowed in a key name.
    #[error("invalid character {found} ({position})")]
    InvalidCharacter {
        /// The rejected rune.
        found: char,
        /// Position of the rejected rune.
        position: Position,
    },

    /// A backslash followed by a rune with no escape meaning inside a value.
    ///
    /// `found` is empty when the backslash is the last rune of the input.
    #[error("invalid escape sequence \\{found} ({position})")]
    InvalidEscapeSequence {
        /// The rune following the backslash.
        found: String,
        /// Position of the backslash.
        position: Position,
    },
}

/// The four kinds of [`LexError`], without their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// See [`LexError::MissingClosingBracket`].
    MissingClosingBracket,
    /// See [`LexError::MissingQuote`].
    MissingQuote,
    /// See [`LexError::InvalidCharacter`].
    InvalidCharacter,
    /// See [`LexError::InvalidEscapeSequence`].
    InvalidEscapeSequence,
}

impl LexError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::MissingClosingBracket { .. } => LexErrorKind::MissingClosingBracket,
            LexError::MissingQuote { .. } => LexErrorKind::MissingQuote,
            LexError::InvalidCharacter { .. } => LexErrorKind::InvalidCharacter,
            LexError::InvalidEscapeSequence { .. } => LexErrorKind::InvalidEscapeSequence,
        }
    }

    /// Returns the position the error points at.
    pub fn position(&self) -> Position {
        match self {
            LexError::MissingClosingBracket { position }
            | LexError::MissingQuote { position }
            | LexError::InvalidCharacter { position, .. }
            | LexError::InvalidEscapeSequence { position, .. } => *position,
        }
    }
}

/// Result type alias for lexing.
pub type LexResult<T> = std::result::Result<T, LexError>;
