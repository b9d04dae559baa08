//! Character classes used by the configuration lexer.
//!
//! Names (sections and keys) accept any Unicode letter or digit plus `-`;
//! whitespace follows the Unicode `White_Space` property.

/// Checks if a character may appear in a section or key name.
///
/// # Example
///
/// ```
/// use gitcat_lex::unicode::is_name_char;
///
/// assert!(is_name_char('a'));
/// assert!(is_name_char('Z'));
/// assert!(is_name_char('7'));
/// assert!(is_name_char('-'));
/// assert!(is_name_char('ß'));
/// assert!(!is_name_char('_'));
/// assert!(!is_name_char('.'));
/// assert!(!is_name_char(' '));
/// ```
#[inline]
pub fn is_name_char(c: char) -> bool {
    c == '-' || c.is_alphanumeric()
}

/// Checks if a character starts a comment.
///
/// # Example
///
/// ```
/// use gitcat_lex::unicode::is_comment_start;
///
/// assert!(is_comment_start(';'));
/// assert!(is_comment_start('#'));
/// assert!(!is_comment_start('/'));
/// ```
#[inline]
pub fn is_comment_start(c: char) -> bool {
    c == ';' || c == '#'
}

/// Checks if a character is a physical line break.
#[inline]
pub fn is_line_break(c: char) -> bool {
    c == '\n'
}

/// Checks if a cursor read ends the current line: a newline or end of input.
///
/// # Example
///
/// ```
/// use gitcat_lex::unicode::is_end_of_line;
///
/// assert!(is_end_of_line(Some('\n')));
/// assert!(is_end_of_line(None));
/// assert!(!is_end_of_line(Some('\0')));
/// ```
#[inline]
pub fn is_end_of_line(c: Option<char>) -> bool {
    c.is_none_or(is_line_break)
}

/// Checks if a character is whitespace that does not end the line.
///
/// # Example
///
/// ```
/// use gitcat_lex::unicode::is_blank;
///
/// assert!(is_blank(' '));
/// assert!(is_blank('\t'));
/// assert!(is_blank('\r'));
/// assert!(!is_blank('\n'));
/// assert!(!is_blank('x'));
/// ```
#[inline]
pub fn is_blank(c: char) -> bool {
    c.is_whitespace() && !is_line_break(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_chars_unicode() {
        assert!(is_name_char('é'));
        assert!(is_name_char('日'));
        assert!(is_name_char('٣')); // Arabic-Indic digit three
        assert!(!is_name_char('='));
        assert!(!is_name_char(']'));
        assert!(!is_name_char('"'));
    }

    #[test]
    fn test_end_of_line() {
        assert!(is_end_of_line(Some('\n')));
        assert!(is_end_of_line(None));
        assert!(!is_end_of_line(Some('\r')));
        assert!(!is_end_of_line(Some(' ')));
        assert!(!is_end_of_line(Some('\0')));
    }

    #[test]
    fn test_blank_unicode_spaces() {
        assert!(is_blank('\u{00A0}'));
        assert!(is_blank('\u{2003}'));
        assert!(is_blank('\u{3000}'));
        assert!(!is_blank('\0'));
    }
}
