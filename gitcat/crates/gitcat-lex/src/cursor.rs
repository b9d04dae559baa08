//! Rune cursor for traversing configuration text.
//!
//! This module provides the `Cursor` struct which hands out the source one
//! `char` at a time while tracking the line/column of the rune it handed out
//! last. It supports exactly one rune of pushback, which is all the lexer
//! needs to put a terminator back for the caller to see.

use crate::token::Position;
use crate::unicode::is_blank;

/// A cursor over configuration text with single-rune pushback.
///
/// The cursor records the position of the most recently consumed rune.
/// End of input is reported as `None`, so every code point, U+0000
/// included, reaches the lexer as an ordinary rune. Reading past the end
/// keeps returning `None` and keeps moving the column forward, so an error
/// raised at end of input points one column past the last real rune.
///
/// # Example
///
/// ```
/// use gitcat_lex::cursor::Cursor;
/// use gitcat_lex::Position;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.advance(), Some('b'));
/// cursor.pushback();
/// assert_eq!(cursor.position(), Position::new(1, 1));
/// assert_eq!(cursor.advance(), Some('b'));
/// assert_eq!(cursor.advance(), None);
/// assert_eq!(cursor.position(), Position::new(1, 3));
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next rune to hand out.
    offset: usize,

    /// The most recently consumed rune; `None` before the first read and
    /// once the end has been reached.
    current: Option<char>,

    /// Position of `current`. Starts at column 0 so the first rune lands on 1.
    position: Position,

    /// State before the last `advance`, consumed by `pushback`.
    previous: Option<CursorSnapshot>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            current: None,
            position: Position::new(1, 0),
            previous: None,
        }
    }

    /// Returns the next rune without consuming it, or `None` at the end of
    /// the source.
    ///
    /// # Example
    ///
    /// ```
    /// use gitcat_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x");
    /// assert_eq!(cursor.peek(), Some('x'));
    /// assert_eq!(Cursor::new("").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        // Fast path for ASCII
        match self.source.as_bytes().get(self.offset) {
            None => None,
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.source[self.offset..].chars().next(),
        }
    }

    /// Consumes and returns the next rune, or `None` at the end of the
    /// source.
    ///
    /// A newline consumed last moves the cursor to column 1 of the next line;
    /// anything else moves it one column right. The position advances even
    /// when `None` is returned.
    pub fn advance(&mut self) -> Option<char> {
        self.previous = Some(self.snapshot());

        let c = self.peek();
        if let Some(c) = c {
            self.offset += c.len_utf8();
        }
        self.position = self.next_position();
        self.current = c;
        c
    }

    /// Restores the rune consumed by the last [`advance`](Self::advance).
    ///
    /// Only one rune can be pushed back; a second call without an
    /// intervening `advance` does nothing.
    pub fn pushback(&mut self) {
        debug_assert!(self.previous.is_some(), "pushback without a prior advance");
        if let Some(snapshot) = self.previous.take() {
            self.restore(snapshot);
        }
    }

    /// Consumes runes until one that is not a blank and returns it. A
    /// newline is not a blank, and neither is the end of input.
    ///
    /// The returned rune is consumed, so callers that only want to skip
    /// blanks follow this with [`pushback`](Self::pushback).
    ///
    /// # Example
    ///
    /// ```
    /// use gitcat_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t ]");
    /// assert_eq!(cursor.next_non_blank(), Some(']'));
    ///
    /// let mut cursor = Cursor::new("  \nx");
    /// assert_eq!(cursor.next_non_blank(), Some('\n'));
    /// ```
    pub fn next_non_blank(&mut self) -> Option<char> {
        loop {
            match self.advance() {
                Some(c) if is_blank(c) => continue,
                other => return other,
            }
        }
    }

    /// Returns the position of the most recently consumed rune.
    ///
    /// Before anything is consumed this is line 1, column 0.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the position the next consumed rune will have.
    ///
    /// # Example
    ///
    /// ```
    /// use gitcat_lex::cursor::Cursor;
    /// use gitcat_lex::Position;
    ///
    /// let mut cursor = Cursor::new("a\nb");
    /// assert_eq!(cursor.next_position(), Position::new(1, 1));
    /// cursor.advance();
    /// cursor.advance();
    /// assert_eq!(cursor.next_position(), Position::new(2, 1));
    /// ```
    #[inline]
    pub fn next_position(&self) -> Position {
        if self.current == Some('\n') {
            Position::new(self.position.line + 1, 1)
        } else {
            Position::new(self.position.line, self.position.column + 1)
        }
    }

    /// Returns true if every rune has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }

    fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            offset: self.offset,
            current: self.current,
            position: self.position,
        }
    }

    fn restore(&mut self, snapshot: CursorSnapshot) {
        self.offset = snapshot.offset;
        self.current = snapshot.current;
        self.position = snapshot.position;
    }
}

/// Cursor state saved before each `advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CursorSnapshot {
    offset: usize,
    current: Option<char>,
    position: Position,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("[core]");
        assert_eq!(cursor.peek(), Some('['));
        assert_eq!(cursor.position(), Position::new(1, 0));
        assert_eq!(cursor.next_position(), Position::new(1, 1));
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.position(), Position::new(1, 1));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.position(), Position::new(1, 3));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.advance(), Some('α'));
        assert_eq!(cursor.advance(), Some('β'));
        assert_eq!(cursor.advance(), Some('γ'));
        assert_eq!(cursor.position(), Position::new(1, 3));
        assert_eq!(cursor.advance(), None);
    }

    #[test]
    fn test_advance_past_end_keeps_counting() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::new(1, 3));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::new(1, 4));
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd\n");
        cursor.advance(); // a
        cursor.advance(); // b
        assert_eq!(cursor.advance(), Some('\n'));
        // The newline itself sits at the end of line 1.
        assert_eq!(cursor.position(), Position::new(1, 3));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.position(), Position::new(2, 1));
        cursor.advance(); // d
        cursor.advance(); // \n
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::new(3, 1));
    }

    #[test]
    fn test_pushback_restores_rune_and_position() {
        let mut cursor = Cursor::new("a\nb");
        cursor.advance();
        cursor.advance(); // \n
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.position(), Position::new(2, 1));

        cursor.pushback();
        assert_eq!(cursor.position(), Position::new(1, 2));
        assert_eq!(cursor.peek(), Some('b'));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.position(), Position::new(2, 1));
    }

    #[test]
    fn test_pushback_at_end() {
        let mut cursor = Cursor::new("x");
        cursor.advance();
        assert_eq!(cursor.advance(), None);
        cursor.pushback();
        assert_eq!(cursor.position(), Position::new(1, 1));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::new(1, 2));
    }

    #[test]
    fn test_pushback_multibyte() {
        let mut cursor = Cursor::new("é=");
        assert_eq!(cursor.advance(), Some('é'));
        cursor.pushback();
        assert_eq!(cursor.peek(), Some('é'));
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.advance(), Some('='));
    }

    #[test]
    fn test_next_non_blank_skips_tabs_and_spaces() {
        let mut cursor = Cursor::new(" \t \u{3000}x");
        assert_eq!(cursor.next_non_blank(), Some('x'));
        assert_eq!(cursor.position(), Position::new(1, 5));
    }

    #[test]
    fn test_next_non_blank_stops_at_newline() {
        let mut cursor = Cursor::new("  \n  x");
        assert_eq!(cursor.next_non_blank(), Some('\n'));
        assert_eq!(cursor.position(), Position::new(1, 3));
    }

    #[test]
    fn test_next_non_blank_at_end() {
        let mut cursor = Cursor::new("  ");
        assert_eq!(cursor.next_non_blank(), None);
        assert_eq!(cursor.position(), Position::new(1, 3));
    }

    #[test]
    fn test_pushback_only_undoes_last_advance() {
        let mut cursor = Cursor::new("key");
        cursor.advance();
        cursor.advance();
        cursor.pushback();
        assert_eq!(cursor.position(), Position::new(1, 1));
        assert_eq!(cursor.advance(), Some('e'));
    }

    #[test]
    fn test_nul_is_an_ordinary_rune() {
        let mut cursor = Cursor::new("a\0b");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.advance(), Some('\0'));
        assert_eq!(cursor.position(), Position::new(1, 2));
        assert!(!cursor.is_at_end());
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::new(1, 4));
    }

    #[test]
    fn test_next_non_blank_returns_nul() {
        let mut cursor = Cursor::new(" \0");
        assert_eq!(cursor.next_non_blank(), Some('\0'));
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), Position::new(1, 1));
    }
}
