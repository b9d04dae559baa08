//! The token stream returned by a lexing pass.

use std::ops::Index;
use std::slice;

use crate::token::Token;

/// An ordered, read-only sequence of tokens ending in exactly one EOF token.
///
/// # Example
///
/// ```
/// use gitcat_lex::{lex, TokenType};
///
/// let stream = lex("[core]").unwrap();
/// assert_eq!(stream.len(), 2);
/// assert_eq!(stream[0].kind(), TokenType::Section);
/// assert!(stream.last().is_eof());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    /// Wraps a finished token list. The lexer guarantees the EOF terminator.
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(
            tokens.last().is_some_and(Token::is_eof),
            "token stream must end with EOF"
        );
        Self { tokens }
    }

    /// Returns the number of tokens, including EOF.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the stream holds no tokens. Never true for a stream
    /// produced by the lexer.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the terminal EOF token.
    pub fn last(&self) -> &Token {
        // `new` only accepts lists ending in EOF.
        &self.tokens[self.tokens.len() - 1]
    }

    /// Iterates over the tokens in source order.
    pub fn iter(&self) -> slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Borrows the tokens as a slice.
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Consumes the stream and returns the underlying tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }
}

impl Index<usize> for TokenStream {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
