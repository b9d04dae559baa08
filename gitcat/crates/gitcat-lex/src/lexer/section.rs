//! Section header lexing.
//!
//! This module handles `[name]` headers and the quoted subsection form
//! `[name "sub"]`.

use crate::error::{LexError, LexResult};
use crate::token::TokenType;
use crate::unicode::{is_blank, is_end_of_line, is_line_break, is_name_char};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a section header. The opening `[` has already been consumed.
    ///
    /// Emits a lowercased SECTION token, followed by a SUBSECTION token when
    /// the name is followed by a quoted string.
    pub(crate) fn lex_section(&mut self) -> LexResult<()> {
        self.cursor.next_non_blank();
        let start = self.cursor.position();
        self.cursor.pushback();

        let mut name = String::new();

        loop {
            match self.cursor.advance() {
                Some(c) if is_name_char(c) => name.push(c),
                Some(']') => {
                    self.push_token(start, TokenType::Section, name.to_lowercase());
                    return Ok(());
                },
                Some(c) if is_blank(c) => {
                    self.push_token(start, TokenType::Section, name.to_lowercase());

                    let next = self.cursor.next_non_blank();
                    return match next {
                        Some(']') => Ok(()),
                        Some('"') => self.lex_subsection(),
                        _ if is_end_of_line(next) => Err(LexError::MissingClosingBracket {
                            position: self.cursor.position(),
                        }),
                        _ => Err(LexError::MissingQuote {
                            position: self.cursor.position(),
                        }),
                    };
                },
                // A newline, the end of input, or a rune no name may contain.
                _ => {
                    return Err(LexError::MissingClosingBracket {
                        position: self.cursor.position(),
                    });
                },
            }
        }
    }

    /// Lexes a quoted subsection name. The opening `"` has already been
    /// consumed.
    ///
    /// The name keeps its case. A backslash makes the following rune literal,
    /// which covers `\\` and `\"`; a newline or end of input, escaped or not,
    /// means the quote was never closed.
    fn lex_subsection(&mut self) -> LexResult<()> {
        let start = self.cursor.next_position();
        let mut name = String::new();

        loop {
            let c = self.cursor.advance();

            match c {
                Some('\\') => {
                    let escaped = self.cursor.advance();
                    match escaped {
                        Some(escaped) if !is_line_break(escaped) => name.push(escaped),
                        _ => {
                            return Err(LexError::MissingQuote {
                                position: self.cursor.position(),
                            });
                        },
                    }
                },
                Some('"') => {
                    self.push_token(start, TokenType::Subsection, name);

                    return match self.cursor.next_non_blank() {
                        Some(']') => Ok(()),
                        _ => Err(LexError::MissingClosingBracket {
                            position: self.cursor.position(),
                        }),
                    };
                },
                Some(c) if !is_line_break(c) => name.push(c),
                _ => {
                    return Err(LexError::MissingQuote {
                        position: self.cursor.position(),
                    });
                },
            }
        }
    }
}
