//! Value lexing.
//!
//! This module handles unquoted and quoted values, escape sequences, and
//! backslash line continuations.

use crate::error::{LexError, LexResult};
use crate::token::TokenType;
use crate::unicode::{is_comment_start, is_line_break};
use crate::Lexer;

/// What a backslash escape inside a value decodes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Escape {
    /// The escape stands for a single character.
    Char(char),
    /// A backslash before a physical newline joins the next line.
    LineContinuation,
}

/// Decodes the rune following a backslash inside a value.
///
/// Handles: `\\`, `\"`, `\t`, `\b`, `\n`, and backslash-newline.
fn unescape(c: char) -> Option<Escape> {
    match c {
        '\\' => Some(Escape::Char('\\')),
        '"' => Some(Escape::Char('"')),
        't' => Some(Escape::Char('\t')),
        'b' => Some(Escape::Char('\u{8}')),
        'n' => Some(Escape::Char('\n')),
        '\n' => Some(Escape::LineContinuation),
        _ => None,
    }
}

impl<'a> Lexer<'a> {
    /// Lexes a value. The `=` and any blanks after it have been consumed.
    ///
    /// A leading `"` switches to quoted mode, where `;` and `#` are literal
    /// and only a closing `"` ends the value. Unquoted values end before a
    /// comment marker, a newline, or the end of input.
    pub(crate) fn lex_value(&mut self) -> LexResult<()> {
        let quoted = self.cursor.advance() == Some('"');
        if !quoted {
            self.cursor.pushback();
        }

        let start = self.cursor.next_position();
        let mut value = String::new();

        loop {
            match self.cursor.advance() {
                Some(c) if is_comment_start(c) && !quoted => {
                    self.cursor.pushback();
                    break;
                },
                Some('"') if quoted => break,
                Some('\\') => {
                    let backslash = self.cursor.position();
                    let escaped = self.cursor.advance();

                    match escaped.and_then(unescape) {
                        Some(Escape::Char(decoded)) => value.push(decoded),
                        Some(Escape::LineContinuation) => {},
                        None => {
                            return Err(LexError::InvalidEscapeSequence {
                                found: escaped.map(String::from).unwrap_or_default(),
                                position: backslash,
                            });
                        },
                    }
                },
                Some(c) if !is_line_break(c) => value.push(c),
                // A newline or the end of input.
                _ => {
                    if quoted {
                        return Err(LexError::MissingQuote {
                            position: self.cursor.position(),
                        });
                    }
                    self.cursor.pushback();
                    break;
                },
            }
        }

        self.push_token(start, TokenType::Value, value);
        Ok(())
    }
}
