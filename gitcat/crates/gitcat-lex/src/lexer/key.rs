//! Key lexing.

use crate::error::{LexError, LexResult};
use crate::token::TokenType;
use crate::unicode::is_name_char;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a variable name, and its value when the name is followed
    /// directly by `=`.
    ///
    /// Whitespace or the end of the line ends a bare key with no VALUE token.
    pub(crate) fn lex_key(&mut self) -> LexResult<()> {
        let start = self.cursor.next_position();
        let mut name = String::new();

        loop {
            match self.cursor.advance() {
                Some('=') => {
                    self.push_token(start, TokenType::Key, name.to_lowercase());
                    self.cursor.next_non_blank();
                    self.cursor.pushback();
                    return self.lex_value();
                },
                Some(c) if is_name_char(c) => name.push(c),
                Some(c) if !c.is_whitespace() => {
                    return Err(LexError::InvalidCharacter {
                        found: c,
                        position: self.cursor.position(),
                    });
                },
                // Whitespace or end of input ends a bare key.
                _ => {
                    self.cursor.pushback();
                    self.push_token(start, TokenType::Key, name.to_lowercase());
                    return Ok(());
                },
            }
        }
    }
}
