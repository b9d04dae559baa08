//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its statement dispatch.

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::LexResult;
use crate::stream::TokenStream;
use crate::token::{Position, Token, TokenType};
use crate::unicode::is_comment_start;

/// Lexer for git-style configuration text.
///
/// The lexer runs a single pass over the whole input and either returns the
/// complete [`TokenStream`] or the first [`LexError`](crate::LexError) it
/// hits. It is consumed by [`lex`](Lexer::lex), so no partially lexed state
/// survives a failure.
///
/// # Example
///
/// ```
/// use gitcat_lex::{Lexer, TokenType};
///
/// let tokens = Lexer::new("[user]\n\tname=Jo").lex().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenType::Section, TokenType::Key, TokenType::Value, TokenType::Eof]
/// );
/// ```
pub struct Lexer<'a> {
    /// Rune cursor over the source.
    pub(crate) cursor: Cursor<'a>,

    /// Tokens emitted so far.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given configuration text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    /// Tokenizes the whole input.
    ///
    /// Whitespace between statements is skipped. A statement starting with
    /// `[` is a section header, one starting with `;` or `#` is a comment,
    /// and anything else is a key. The stream always ends with one EOF token
    /// placed just past the last consumed rune.
    ///
    /// # Errors
    ///
    /// Returns the first [`LexError`](crate::LexError) encountered; no
    /// tokens are returned in that case.
    pub fn lex(mut self) -> LexResult<TokenStream> {
        debug!(bytes = self.cursor.source().len(), "lexing configuration");

        loop {
            let Some(c) = self.cursor.advance() else {
                let position = self.cursor.position();
                self.push_token(position, TokenType::Eof, String::new());
                break;
            };

            if c.is_whitespace() {
                continue;
            }

            let result = match c {
                '[' => self.lex_section(),
                c if is_comment_start(c) => {
                    self.lex_comment();
                    Ok(())
                },
                _ => {
                    self.cursor.pushback();
                    self.lex_key()
                },
            };

            result.inspect_err(|err| debug!(%err, "lexing failed"))?;
        }

        debug!(tokens = self.tokens.len(), "lexing finished");
        Ok(TokenStream::new(self.tokens))
    }

    /// Appends a token to the output.
    pub(crate) fn push_token(&mut self, position: Position, kind: TokenType, value: String) {
        trace!(%position, %kind, value = %value.escape_debug(), "token");
        self.tokens.push(Token::new(position, kind, value));
    }
}
