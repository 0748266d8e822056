//! Word scanning.

use std::io::{self, BufRead};

use super::{Lexeme, Scanner};
use crate::char_class::is_word_char;

impl<R: BufRead> Scanner<R> {
    /// Scans a maximal run of word characters.
    ///
    /// Whether the spelling is a keyword, constant, primitive or identifier
    /// is decided by the symbol table, not here.
    pub(super) fn scan_word(&mut self) -> io::Result<Lexeme> {
        let mut text = String::new();
        while let Some(c) = self.cursor.current_char()? {
            if !is_word_char(c) {
                break;
            }
            text.push(c);
            self.cursor.advance()?;
        }
        Ok(Lexeme::Word(text))
    }
}
