//! Token output formatting.

use std::io::Write;

use jam_lex::{Position, Token};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::Result;

/// One token as written in JSON mode.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord {
    /// Token category, e.g. `Operator`.
    pub kind: &'static str,
    /// Source spelling of the token.
    pub text: String,
    /// Line where the token starts.
    pub line: u32,
    /// Column where the token starts.
    pub column: u32,
}

impl TokenRecord {
    /// Builds the record for `token` starting at `position`.
    pub fn new(token: &Token, position: Position) -> Self {
        Self {
            kind: token.kind().as_str(),
            text: token.to_string(),
            line: position.line,
            column: position.column,
        }
    }
}

/// Writes one token in the requested format, followed by a newline.
pub fn write_token<W: Write>(
    out: &mut W,
    format: OutputFormat,
    token: &Token,
    position: Position,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            writeln!(out, "Token {} in {}", token, token.kind())?;
        },
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &TokenRecord::new(token, position))?;
            writeln!(out)?;
        },
    }
    Ok(())
}
