//! The lexing loop behind the command line.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use jam_lex::{LexErrorKind, Lexer};
use tracing::{debug, error, info};

use crate::config::OutputFormat;
use crate::error::{JamlexError, Result};
use crate::output::write_token;

/// Settings for one run, after merging config file and flags.
#[derive(Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Source file; console input when `None`.
    pub input: Option<PathBuf>,
    /// Token output format.
    pub format: OutputFormat,
    /// Continue after lexical errors.
    pub recover: bool,
}

/// Lexes the configured input and writes its tokens to `out`.
pub fn run<W: Write>(args: &RunArgs, out: &mut W) -> Result<()> {
    match &args.input {
        Some(path) => {
            info!(path = %path.display(), "lexing file");
            let mut lexer = Lexer::open(path)?;
            lex_stream(&mut lexer, out, args.format, args.recover)
        },
        None => {
            info!("lexing standard input");
            let mut lexer = Lexer::stdin();
            lex_stream(&mut lexer, out, args.format, args.recover)
        },
    }
}

/// Writes every token of `lexer` to `out` until end of input.
///
/// Without `recover` the first lexical error is returned. With `recover`
/// each error is logged and the lexer skips to the next line; the run then
/// fails with [`JamlexError::Recovered`] if anything was reported. Input
/// errors always end the run.
pub fn lex_stream<R: BufRead, W: Write>(
    lexer: &mut Lexer<R>,
    out: &mut W,
    format: OutputFormat,
    recover: bool,
) -> Result<()> {
    let mut tokens = 0usize;
    let mut errors = 0usize;

    loop {
        match lexer.read_token() {
            Ok(Some(token)) => {
                write_token(out, format, &token, lexer.token_position())?;
                tokens += 1;
            },
            Ok(None) => break,
            Err(err) if recover && err.kind() != LexErrorKind::Input => {
                error!("{}", err);
                errors += 1;
                lexer.flush()?;
            },
            Err(err) => {
                error!("{}", err);
                out.flush()?;
                return Err(err.into());
            },
        }
    }

    out.flush()?;
    debug!(tokens, errors, "reached end of input");

    if errors > 0 {
        return Err(JamlexError::Recovered { count: errors });
    }
    Ok(())
}
