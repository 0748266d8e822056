//! Whitespace and comment skipping.

use std::io::{self, BufRead};

use super::Scanner;
use crate::char_class::is_whitespace;

impl<R: BufRead> Scanner<R> {
    /// Skips whitespace and `//` line comments.
    ///
    /// A single `/` is left in place; it is the divide operator.
    pub(super) fn skip_whitespace_and_comments(&mut self) -> io::Result<()> {
        loop {
            match self.cursor.current_char()? {
                Some(c) if is_whitespace(c) => {
                    self.cursor.advance()?;
                },
                Some('/') if self.cursor.peek_char(1) == Some('/') => {
                    self.cursor.skip_line()?;
                },
                _ => return Ok(()),
            }
        }
    }
}
