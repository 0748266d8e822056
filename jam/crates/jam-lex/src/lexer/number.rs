//! Integer literal validation.
//!
//! The scanner accepts digits with an optional decimal point. Only values
//! that are exactly representable as a 32-bit signed integer become
//! [`Token::IntConstant`]; everything else is a numeric overflow.

use std::io::BufRead;

use crate::cursor::Position;
use crate::error::{LexError, Result};
use crate::token::Token;
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Converts numeric literal text into an integer constant.
    ///
    /// `3.` is accepted as 3. Fractions and magnitudes beyond `i32::MAX`
    /// are rejected.
    pub(super) fn lex_number(&self, text: String, start: Position) -> Result<Token> {
        match literal_value(&text) {
            Some(value) => Ok(Token::IntConstant(value)),
            None => Err(LexError::NumericOverflow {
                literal: text,
                position: start,
            }),
        }
    }
}

fn literal_value(text: &str) -> Option<i32> {
    let value: f64 = text.parse().ok()?;
    // `as` saturates, so out of range values fail the comparison below
    let n = value as i32;
    (f64::from(n) == value).then_some(n)
}
