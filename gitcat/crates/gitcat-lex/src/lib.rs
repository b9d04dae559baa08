//! gitcat-lex - Lexical Analyzer for git-style configuration files
//!
//! This crate turns the text of a git `config` file into a stream of typed,
//! position-annotated tokens for a downstream key-value materializer.
//!
//! # Overview
//!
//! The format is INI-like: section headers with optional quoted subsections,
//! `;`/`#` comments, and `key=value` variables whose values may be quoted,
//! contain backslash escapes, and continue across lines with a trailing
//! backslash.
//!
//! # Example Usage
//!
//! ```
//! use gitcat_lex::{Lexer, TokenType};
//!
//! let source = "[remote \"origin\"]\n\turl=https://example.com/repo.git\n";
//! let tokens = Lexer::new(source).lex().unwrap();
//!
//! assert_eq!(tokens[0].kind(), TokenType::Section);
//! assert_eq!(tokens[0].value(), "remote");
//! assert_eq!(tokens[1].value(), "origin");
//! assert_eq!(tokens[2].value(), "url");
//! assert_eq!(tokens[3].value(), "https://example.com/repo.git");
//! assert!(tokens[4].is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, token type and position definitions
//! - [`stream`] - The token stream returned by a lexing pass
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Rune cursor with single-rune pushback
//! - [`unicode`] - Character classes for names, blanks and line ends
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! - **SECTION**: `[core]` → `core` (lowercased)
//! - **SUBSECTION**: `[remote "Origin"]` → `Origin` (case kept)
//! - **COMMENT**: `; text` / `# text` → ` text` (verbatim)
//! - **KEY**: `Name = ...` → `name` (lowercased)
//! - **VALUE**: the decoded text after `=`
//! - **EOF**: end of input, always last
//!
//! # Escapes
//!
//! Inside values: `\\`, `\"`, `\t`, `\b`, `\n`, and a backslash at the end
//! of a line to continue the value on the next one. Any other escape is an
//! error. Inside subsections a backslash makes the next rune literal.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod stream;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexErrorKind, LexResult};
pub use lexer::Lexer;
pub use stream::TokenStream;
pub use token::{Position, Token, TokenType};

/// Tokenizes configuration text in one call.
///
/// Shorthand for `Lexer::new(source).lex()`.
///
/// # Example
///
/// ```
/// use gitcat_lex::lex;
///
/// let err = lex("[core").unwrap_err();
/// assert_eq!(err.to_string(), "missing ] character (1:6)");
/// ```
pub fn lex(source: &str) -> LexResult<TokenStream> {
    Lexer::new(source).lex()
}
