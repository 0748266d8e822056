//! Numeric literal scanning.

use std::io::{self, BufRead};

use super::{Lexeme, Scanner};
use crate::char_class::is_digit;

impl<R: BufRead> Scanner<R> {
    /// Scans digits with at most one decimal point.
    ///
    /// The text is kept as written; the lexer checks that it denotes a
    /// 32-bit integer. A second `.` ends the literal.
    pub(super) fn scan_number(&mut self) -> io::Result<Lexeme> {
        let mut text = String::new();
        let mut seen_dot = false;
        while let Some(c) = self.cursor.current_char()? {
            if c == '.' && !seen_dot {
                seen_dot = true;
            } else if !is_digit(c) {
                break;
            }
            text.push(c);
            self.cursor.advance()?;
        }
        Ok(Lexeme::Number(text))
    }
}
