//! Error types for the Jam lexer.
//!
//! Every failure of the token-producing operations is reported through
//! [`LexError`]. Nothing is recovered internally: the caller decides whether
//! to give up or to resynchronize with [`Lexer::flush`](crate::Lexer::flush).

use std::io;

use thiserror::Error;

use crate::cursor::Position;

/// Error type for lexical analysis.
#[derive(Debug, Error)]
pub enum LexError {
    /// A numeric literal that is not representable as a 32-bit signed integer.
    ///
    /// Raised for literals with a fractional part (`3.5`) and for literals
    /// whose magnitude is out of range (`2147483648`).
    #[error("the number {literal} is not a 32 bit integer ({position})")]
    NumericOverflow {
        /// Source text of the literal.
        literal: String,
        /// Where the literal starts.
        position: Position,
    },

    /// A character outside the recognized grammar.
    #[error("`{ch}' is not a legal token ({position})")]
    IllegalCharacter {
        /// The offending character.
        ch: char,
        /// Where the character appears.
        position: Position,
    },

    /// A `!` or `:` that is not followed by `=`.
    #[error("{sequence} is not a legal token ({position})")]
    IllegalOperatorSequence {
        /// The operator character followed by whatever came after it.
        sequence: String,
        /// Where the operator character appears.
        position: Position,
    },

    /// Failure of the underlying input resource.
    #[error("input error: {0}")]
    Input(#[from] io::Error),
}

/// Discriminant of a [`LexError`], for matching on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// See [`LexError::NumericOverflow`].
    NumericOverflow,
    /// See [`LexError::IllegalCharacter`].
    IllegalCharacter,
    /// See [`LexError::IllegalOperatorSequence`].
    IllegalOperatorSequence,
    /// See [`LexError::Input`].
    Input,
}

impl LexError {
    /// Returns the category of this error.
    pub fn kind(&self) -> LexErrorKind {
        match self {
            LexError::NumericOverflow { .. } => LexErrorKind::NumericOverflow,
            LexError::IllegalCharacter { .. } => LexErrorKind::IllegalCharacter,
            LexError::IllegalOperatorSequence { .. } => LexErrorKind::IllegalOperatorSequence,
            LexError::Input(_) => LexErrorKind::Input,
        }
    }

    /// Returns where the offending lexeme starts, if the error has a position.
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::NumericOverflow { position, .. }
            | LexError::IllegalCharacter { position, .. }
            | LexError::IllegalOperatorSequence { position, .. } => Some(*position),
            LexError::Input(_) => None,
        }
    }
}

/// Result type alias for lexer operations.
pub type Result<T> = std::result::Result<T, LexError>;
