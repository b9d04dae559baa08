//! Comment lexing.
//!
//! This module handles `;` and `#` comments, which run to the end of the line.

use crate::token::TokenType;
use crate::unicode::is_line_break;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a comment. The leading `;` or `#` has already been consumed.
    ///
    /// The text is kept verbatim, without trimming, up to but not including
    /// the newline.
    pub(crate) fn lex_comment(&mut self) {
        let start = self.cursor.next_position();
        let mut text = String::new();

        loop {
            match self.cursor.advance() {
                Some(c) if !is_line_break(c) => text.push(c),
                _ => {
                    self.cursor.pushback();
                    break;
                },
            }
        }

        self.push_token(start, TokenType::Comment, text);
    }
}
