//! Edge case tests for gitcat-lex

use crate::{lex, LexError, LexErrorKind, Position, Token, TokenType};

fn lex_all(source: &str) -> Vec<Token> {
    lex(source).unwrap().into_vec()
}

fn kinds(source: &str) -> Vec<TokenType> {
    lex_all(source).iter().map(Token::kind).collect()
}

// ==================== EDGE CASES ====================

#[test]
fn test_edge_empty_section_name() {
    assert_eq!(
        lex_all("[]"),
        vec![
            Token::new(Position::new(1, 2), TokenType::Section, ""),
            Token::new(Position::new(1, 3), TokenType::Eof, ""),
        ]
    );
}

#[test]
fn test_edge_empty_subsection() {
    let tokens = lex_all("[remote \"\"]");
    assert_eq!(tokens[1], Token::new(Position::new(1, 10), TokenType::Subsection, ""));
}

#[test]
fn test_edge_long_key() {
    let name = "k".repeat(10_000);
    let tokens = lex_all(&format!("{}=v", name));
    assert_eq!(tokens[0].value(), name);
    assert_eq!(tokens[1].position(), Position::new(1, 10_002));
}

#[test]
fn test_edge_unicode_columns_count_chars() {
    let tokens = lex_all("[日本]\nnäme=wërt");
    assert_eq!(tokens[0], Token::new(Position::new(1, 2), TokenType::Section, "日本"));
    assert_eq!(tokens[1], Token::new(Position::new(2, 1), TokenType::Key, "näme"));
    assert_eq!(tokens[2], Token::new(Position::new(2, 6), TokenType::Value, "wërt"));
    assert_eq!(tokens[3], Token::new(Position::new(2, 10), TokenType::Eof, ""));
}

#[test]
fn test_edge_crlf_line_endings() {
    // `\r` is ordinary whitespace; it ends keys and is kept inside values.
    assert_eq!(
        lex_all("[core]\r\nbare=false\r\n"),
        vec![
            Token::new(Position::new(1, 2), TokenType::Section, "core"),
            Token::new(Position::new(2, 1), TokenType::Key, "bare"),
            Token::new(Position::new(2, 6), TokenType::Value, "false\r"),
            Token::new(Position::new(3, 1), TokenType::Eof, ""),
        ]
    );
}

#[test]
fn test_edge_multiple_continuations() {
    let tokens = lex_all("k=a\\\nb\\\nc\nnext");
    assert_eq!(tokens[1].value(), "abc");
    assert_eq!(tokens[2], Token::new(Position::new(4, 1), TokenType::Key, "next"));
}

#[test]
fn test_edge_continuation_then_comment() {
    assert_eq!(
        kinds("k=a\\\n;c"),
        vec![TokenType::Key, TokenType::Value, TokenType::Comment, TokenType::Eof]
    );
}

#[test]
fn test_edge_statement_starting_with_equals() {
    let tokens = lex_all("=v");
    assert_eq!(tokens[0], Token::new(Position::new(1, 1), TokenType::Key, ""));
    assert_eq!(tokens[1], Token::new(Position::new(1, 2), TokenType::Value, "v"));
}

#[test]
fn test_edge_value_followed_by_next_statement() {
    assert_eq!(
        kinds("a=1\n[b]\nc"),
        vec![
            TokenType::Key,
            TokenType::Value,
            TokenType::Section,
            TokenType::Key,
            TokenType::Eof,
        ]
    );
}

#[test]
fn test_edge_key_value_on_section_line() {
    assert_eq!(
        kinds("[core] bare=true"),
        vec![TokenType::Section, TokenType::Key, TokenType::Value, TokenType::Eof]
    );
}

#[test]
fn test_edge_nul_is_ordinary_input() {
    assert_eq!(
        lex_all("k=a\0b ; c\0"),
        vec![
            Token::new(Position::new(1, 1), TokenType::Key, "k"),
            Token::new(Position::new(1, 3), TokenType::Value, "a\0b "),
            Token::new(Position::new(1, 8), TokenType::Comment, " c\0"),
            Token::new(Position::new(1, 11), TokenType::Eof, ""),
        ]
    );

    // Text after a NUL is still lexed, so its errors surface.
    let err = lex("[core]\n\0\n[broken").unwrap_err();
    assert_eq!(err.kind(), LexErrorKind::InvalidCharacter);
    let err = lex("k=a\0\n[broken").unwrap_err();
    assert_eq!(err, LexError::MissingClosingBracket { position: Position::new(2, 8) });
}

#[test]
fn test_edge_single_eof() {
    for source in ["", "[a]", "k=v", "; c", "k", "[a \"b\"]\n"] {
        let tokens = lex_all(source);
        let eofs = tokens.iter().filter(|t| t.is_eof()).count();
        assert_eq!(eofs, 1, "input: {:?}", source);
        assert!(tokens.last().is_some_and(Token::is_eof));
    }
}

#[test]
fn test_edge_errors_are_deterministic() {
    let first = lex("[core]\nuser=\"john").unwrap_err();
    let second = lex("[core]\nuser=\"john").unwrap_err();
    assert_eq!(first, second);
    assert_eq!(first, LexError::MissingQuote { position: Position::new(2, 11) });
}

#[test]
fn test_edge_first_error_wins() {
    let err = lex("user]x\n[core").unwrap_err();
    assert_eq!(err.kind(), LexErrorKind::InvalidCharacter);
}

// ==================== PROPERTY TESTS ====================

#[test]
fn test_property_whitespace_only_yields_single_eof() {
    use proptest::prelude::*;

    const BLANKS: [char; 9] = [' ', '\t', '\n', '\r', '\u{0B}', '\u{0C}', '\u{A0}', '\u{2003}', '\u{3000}'];

    proptest!(|(chars in prop::collection::vec(prop::sample::select(BLANKS.to_vec()), 0..64))| {
        let input: String = chars.into_iter().collect();
        let tokens = lex_all(&input);

        let line = 1 + input.matches('\n').count() as u32;
        let tail = input.rsplit('\n').next().unwrap_or("");
        let column = tail.chars().count() as u32 + 1;

        prop_assert_eq!(tokens, vec![Token::new(Position::new(line, column), TokenType::Eof, "")]);
    });
}

#[test]
fn test_property_section_names_are_lowercased() {
    use proptest::prelude::*;

    proptest!(|(name in "[a-zA-Z0-9-]{1,32}")| {
        let tokens = lex_all(&format!("[{}]", name));
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind(), TokenType::Section);
        prop_assert_eq!(tokens[0].value(), name.to_lowercase());
    });
}

#[test]
fn test_property_subsections_keep_case() {
    use proptest::prelude::*;

    proptest!(|(sub in "[^\"\\\\\n\\x00]{0,40}")| {
        let tokens = lex_all(&format!("[s \"{}\"]", sub));
        prop_assert_eq!(tokens[1].kind(), TokenType::Subsection);
        prop_assert_eq!(tokens[1].value(), sub.as_str());
    });
}

#[test]
fn test_property_quoted_values_round_trip() {
    use proptest::prelude::*;

    proptest!(|(text in "[^\"\\\\\n\\x00]{0,60}")| {
        let tokens = lex_all(&format!("key=\"{}\"", text));
        prop_assert_eq!(tokens.len(), 3);
        prop_assert_eq!(tokens[1].kind(), TokenType::Value);
        prop_assert_eq!(tokens[1].value(), text.as_str());
    });
}

#[test]
fn test_property_lexing_never_panics() {
    use proptest::prelude::*;

    proptest!(|(input in "[\\[\\]\"=;#\\\\ \ta-zA-Z0-9\\x00\n-]{0,80}")| {
        if let Ok(tokens) = lex(&input) {
            prop_assert!(tokens.last().is_eof());
            prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);

            let lines = 1 + input.matches('\n').count() as u32;
            prop_assert_eq!(tokens.last().position().line, lines);
        }
    });
}
