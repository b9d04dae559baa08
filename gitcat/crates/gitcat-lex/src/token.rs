//! Token definitions for configuration text.
//!
//! Every token carries the [`Position`] it was read from, its
//! [`TokenType`], and its decoded text. Section and key names arrive
//! already lowercased; subsection and value text arrive with escapes
//! resolved.

use std::fmt;

/// A 1-based line/column coordinate in the source text.
///
/// Columns count Unicode scalar values, not bytes, and restart at 1 after
/// every `\n`.
///
/// # Example
///
/// ```
/// use gitcat_lex::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.to_string(), "2:5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Position {
    /// Creates a position from a line and column.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The kind of a lexed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// End of input. Always the last token of a stream.
    Eof,
    /// Section name from `[name]`, lowercased.
    Section,
    /// Quoted subsection from `[name "sub"]`, case preserved.
    Subsection,
    /// Text following `;` or `#` up to the end of the line.
    Comment,
    /// Variable name, lowercased.
    Key,
    /// Decoded variable value.
    Value,
}

impl TokenType {
    /// Returns the upper-case name used when printing tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Eof => "EOF",
            TokenType::Section => "SECTION",
            TokenType::Subsection => "SUBSECTION",
            TokenType::Comment => "COMMENT",
            TokenType::Key => "KEY",
            TokenType::Value => "VALUE",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lexed token.
///
/// Tokens are immutable once built; the fields are only reachable
/// through accessors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    position: Position,
    kind: TokenType,
    value: String,
}

impl Token {
    /// Creates a token.
    ///
    /// # Example
    ///
    /// ```
    /// use gitcat_lex::{Position, Token, TokenType};
    ///
    /// let token = Token::new(Position::new(1, 2), TokenType::Section, "core");
    /// assert_eq!(token.value(), "core");
    /// ```
    pub fn new(position: Position, kind: TokenType, value: impl Into<String>) -> Self {
        Self {
            position,
            kind,
            value: value.into(),
        }
    }

    /// Returns where the token starts.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the token kind.
    #[inline]
    pub fn kind(&self) -> TokenType {
        self.kind
    }

    /// Returns the decoded token text. Empty for [`TokenType::Eof`].
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true for the terminal EOF token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenType::Eof => write!(f, "{} {}", self.position, self.kind),
            _ => write!(f, "{} {} {:?}", self.position, self.kind, self.value),
        }
    }
}
