//! Character classification for the Jam scanner.
//!
//! The scanner's behaviour is driven entirely by the predicates in this
//! module. The classes are fixed and shared by every lexer instance.

/// Checks if a character is skipped as whitespace.
///
/// Every character from `'\0'` up to and including `' '` is whitespace,
/// which covers the ASCII control characters, tabs and line breaks.
///
/// # Example
///
/// ```
/// use jam_lex::char_class::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(is_whitespace('\0'));
/// assert!(!is_whitespace('a'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c <= ' '
}

/// Checks if a character may appear inside a word.
///
/// Word characters are `[0-9a-zA-Z_?]`. The `?` lets primitive names such
/// as `null?` be spelled as a single word.
///
/// # Example
///
/// ```
/// use jam_lex::char_class::is_word_char;
///
/// assert!(is_word_char('x'));
/// assert!(is_word_char('7'));
/// assert!(is_word_char('?'));
/// assert!(!is_word_char('-'));
/// ```
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '?'
}

/// Checks if a character can start a word.
///
/// A leading digit starts a numeric literal instead, so words begin with
/// any word character other than a digit.
#[inline]
pub fn is_word_start(c: char) -> bool {
    is_word_char(c) && !c.is_ascii_digit()
}

/// Checks if a character is a decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
