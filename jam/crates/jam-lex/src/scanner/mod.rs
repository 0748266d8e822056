//! Character scanner.
//!
//! The scanner turns characters into raw lexemes:
//! - `comment` - whitespace and `//` comment skipping
//! - `word` - identifier and keyword spellings
//! - `number` - numeric literal text
//!
//! It knows nothing about tokens. The [`Lexer`](crate::Lexer) combines
//! lexemes into tokens and may hand one lexeme back with
//! [`Scanner::push_back`] after looking at it.

mod comment;
mod number;
mod word;

use std::fmt;
use std::io::{self, BufRead};

use crate::char_class::{is_digit, is_word_start};
use crate::cursor::{Cursor, Position};

/// A raw lexical primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexeme {
    /// A run of word characters not starting with a digit.
    Word(String),
    /// Source text of a numeric literal: digits with at most one `.`.
    Number(String),
    /// Any other single character.
    Char(char),
    /// End of input.
    Eof,
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lexeme::Word(text) | Lexeme::Number(text) => f.write_str(text),
            Lexeme::Char(c) => write!(f, "{}", c),
            Lexeme::Eof => f.write_str("end of input"),
        }
    }
}

/// Scanner producing [`Lexeme`]s from a buffered reader.
pub struct Scanner<R> {
    /// Character cursor over the input.
    cursor: Cursor<R>,

    /// Lexeme handed back by the lexer, with its start position.
    pushed_back: Option<(Lexeme, Position)>,

    /// Start of the most recently returned lexeme.
    lexeme_start: Position,
}

impl<R: BufRead> Scanner<R> {
    /// Creates a scanner reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            cursor: Cursor::new(reader),
            pushed_back: None,
            lexeme_start: Position::START,
        }
    }

    /// Returns the next lexeme, skipping whitespace and comments.
    ///
    /// At end of input every call returns [`Lexeme::Eof`].
    pub fn next_lexeme(&mut self) -> io::Result<Lexeme> {
        if let Some((lexeme, start)) = self.pushed_back.take() {
            self.lexeme_start = start;
            return Ok(lexeme);
        }

        self.skip_whitespace_and_comments()?;
        self.lexeme_start = self.cursor.position();

        let Some(c) = self.cursor.current_char()? else {
            return Ok(Lexeme::Eof);
        };

        if is_word_start(c) {
            return self.scan_word();
        }
        if is_digit(c) || (c == '.' && self.cursor.peek_char(1).is_some_and(is_digit)) {
            return self.scan_number();
        }

        self.cursor.advance()?;
        Ok(Lexeme::Char(c))
    }

    /// Hands back the lexeme most recently returned by
    /// [`Scanner::next_lexeme`], so the next call returns it again.
    ///
    /// Only one lexeme can be pending at a time.
    pub fn push_back(&mut self, lexeme: Lexeme) {
        debug_assert!(self.pushed_back.is_none(), "scanner holds one pushed-back lexeme");
        self.pushed_back = Some((lexeme, self.lexeme_start));
    }

    /// Discards any pushed-back lexeme and the rest of the current line.
    pub fn flush(&mut self) -> io::Result<()> {
        self.pushed_back = None;
        self.cursor.skip_line()
    }

    /// Returns where the most recently returned lexeme starts.
    pub fn lexeme_start(&self) -> Position {
        self.lexeme_start
    }

    /// Returns the line of the next unread character (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }
}
