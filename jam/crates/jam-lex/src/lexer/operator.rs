//! Multi-character operator lexing.
//!
//! `<`, `>`, `!` and `:` look at the next lexeme to decide what they are.
//! The lookahead is a whole lexeme, so whitespace or a comment between the
//! two characters does not split the operator. A lookahead that is not
//! used is pushed back to the scanner.

use std::io::BufRead;

use crate::cursor::Position;
use crate::error::{LexError, Result};
use crate::scanner::Lexeme;
use crate::token::{Op, Token};
use crate::Lexer;

impl<R: BufRead> Lexer<R> {
    /// Lexes less or less-equals.
    ///
    /// Handles: `<`, `<=`
    pub(super) fn lex_less(&mut self) -> Result<Token> {
        let op = if self.match_equals()?.is_none() {
            Op::LessThanEquals
        } else {
            Op::LessThan
        };
        Ok(Token::Operator(op))
    }

    /// Lexes greater or greater-equals.
    ///
    /// Handles: `>`, `>=`
    pub(super) fn lex_greater(&mut self) -> Result<Token> {
        let op = if self.match_equals()?.is_none() {
            Op::GreaterThanEquals
        } else {
            Op::GreaterThan
        };
        Ok(Token::Operator(op))
    }

    /// Lexes not-equals. A `!` on its own is an error.
    ///
    /// Handles: `!=`
    pub(super) fn lex_bang(&mut self, start: Position) -> Result<Token> {
        match self.match_equals()? {
            None => Ok(Token::Operator(Op::NotEquals)),
            Some(follower) => Err(illegal_sequence('!', &follower, start)),
        }
    }

    /// Lexes the binding keyword. A `:` on its own is an error.
    ///
    /// Handles: `:=`
    pub(super) fn lex_colon(&mut self, start: Position) -> Result<Token> {
        match self.match_equals()? {
            None => Ok(self.symbols.resolve(":=")),
            Some(follower) => Err(illegal_sequence(':', &follower, start)),
        }
    }

    /// Consumes the next lexeme if it is `=`.
    ///
    /// Returns `None` when `=` was consumed. Otherwise the lexeme is pushed
    /// back and a copy is returned for error reporting.
    fn match_equals(&mut self) -> Result<Option<Lexeme>> {
        let lexeme = self.scanner.next_lexeme()?;
        if lexeme == Lexeme::Char('=') {
            return Ok(None);
        }
        self.scanner.push_back(lexeme.clone());
        Ok(Some(lexeme))
    }
}

fn illegal_sequence(op: char, follower: &Lexeme, position: Position) -> LexError {
    let sequence = match follower {
        Lexeme::Eof => format!("{} at end of input", op),
        other => format!("{}{}", op, other),
    };
    LexError::IllegalOperatorSequence { sequence, position }
}
