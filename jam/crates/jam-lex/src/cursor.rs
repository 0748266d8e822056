//! Character cursor over a buffered input stream.
//!
//! This module provides the `Cursor` struct which pulls source text from any
//! [`BufRead`] one line at a time and hands it out character by character.
//! It tracks line/column information for error reporting.
//!
//! Reads block until the reader produces a full line (or end of input), so
//! a cursor over the console only waits when the scanner actually needs
//! another character.

use std::fmt;
use std::io::{self, BufRead};

/// A 1-based line/column location in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

impl Position {
    /// The position of the first character of any input.
    pub const START: Position = Position { line: 1, column: 1 };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A cursor for traversing an input stream character by character.
///
/// The cursor holds at most one line of input. Lookahead past the current
/// character ([`Cursor::peek_char`]) is limited to that line, which is all
/// the scanner needs: no multi-character construct spans a line break.
///
/// # Example
///
/// ```
/// use jam_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x".as_bytes());
///
/// assert_eq!(cursor.current_char().unwrap(), Some('l'));
/// cursor.advance().unwrap();
/// assert_eq!(cursor.current_char().unwrap(), Some('e'));
/// ```
pub struct Cursor<R> {
    /// The input stream.
    reader: R,

    /// The line currently being consumed, including its line terminator.
    line_buf: String,

    /// Byte offset of the next unread character in `line_buf`.
    offset: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// Whether the reader has reported end of input.
    at_eof: bool,
}

impl<R: BufRead> Cursor<R> {
    /// Creates a new cursor reading from the given stream.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buf: String::new(),
            offset: 0,
            line: 1,
            column: 1,
            at_eof: false,
        }
    }

    /// Makes sure the line buffer holds an unread character, unless the
    /// input is exhausted. Once the reader reports end of input it is never
    /// read again.
    fn fill(&mut self) -> io::Result<()> {
        while self.offset >= self.line_buf.len() && !self.at_eof {
            self.line_buf.clear();
            self.offset = 0;
            if self.reader.read_line(&mut self.line_buf)? == 0 {
                self.at_eof = true;
            }
        }
        Ok(())
    }

    /// Returns the character at the cursor position without consuming it.
    ///
    /// Returns `None` at end of input.
    pub fn current_char(&mut self) -> io::Result<Option<char>> {
        self.fill()?;
        Ok(self.line_buf[self.offset..].chars().next())
    }

    /// Returns the character `offset` characters past the current one,
    /// looking only within the buffered line.
    ///
    /// `peek_char(0)` is the current character. Call [`Cursor::current_char`]
    /// first so the buffer is filled.
    ///
    /// # Example
    ///
    /// ```
    /// use jam_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("ab\ncd".as_bytes());
    /// cursor.current_char().unwrap();
    /// assert_eq!(cursor.peek_char(1), Some('b'));
    /// assert_eq!(cursor.peek_char(2), Some('\n'));
    /// assert_eq!(cursor.peek_char(3), None);
    /// ```
    pub fn peek_char(&self, offset: usize) -> Option<char> {
        self.line_buf[self.offset..].chars().nth(offset)
    }

    /// Consumes and returns the current character.
    ///
    /// Updates line and column tracking. Returns `None` at end of input.
    pub fn advance(&mut self) -> io::Result<Option<char>> {
        self.fill()?;
        let Some(c) = self.line_buf[self.offset..].chars().next() else {
            return Ok(None);
        };
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Ok(Some(c))
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use jam_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("//".as_bytes());
    /// assert!(cursor.match_char('/').unwrap());
    /// assert!(!cursor.match_char('*').unwrap());
    /// ```
    pub fn match_char(&mut self, expected: char) -> io::Result<bool> {
        if self.current_char()? == Some(expected) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes characters up to and including the next line break, or to
    /// the end of input.
    pub fn skip_line(&mut self) -> io::Result<()> {
        while let Some(c) = self.advance()? {
            if c == '\n' {
                break;
            }
        }
        Ok(())
    }

    /// Returns true if the input is exhausted.
    pub fn is_at_end(&mut self) -> io::Result<bool> {
        Ok(self.current_char()?.is_none())
    }

    /// Returns the position of the next character to be consumed.
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }
}
