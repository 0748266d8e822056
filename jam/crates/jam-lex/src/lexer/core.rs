//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the peek buffer and the dispatch
//! from scanner lexemes to tokens.

use std::fs::File;
use std::io::{self, BufRead, BufReader, StdinLock};
use std::path::Path;

use tracing::debug;

use crate::cursor::Position;
use crate::error::{LexError, Result};
use crate::scanner::{Lexeme, Scanner};
use crate::symbol::SymbolTable;
use crate::token::{Op, Punct, Token};

/// Lexer for the Jam language.
///
/// The lexer pulls lexemes from its [`Scanner`], resolves words through its
/// own [`SymbolTable`] and keeps at most one token of lookahead for
/// [`Lexer::peek`].
pub struct Lexer<R> {
    /// Character scanner over the input.
    pub(super) scanner: Scanner<R>,

    /// Spelling to token bindings for this session.
    pub(super) symbols: SymbolTable,

    /// Token assembled by `peek` but not yet consumed.
    buffer: Option<(Token, Position)>,

    /// Start of the token most recently returned by `read_token`.
    token_position: Position,
}

impl<R: BufRead> Lexer<R> {
    /// Creates a lexer reading from `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            scanner: Scanner::new(reader),
            symbols: SymbolTable::new(),
            buffer: None,
            token_position: Position::START,
        }
    }

    /// Reads the next token, consuming it.
    ///
    /// Returns `Ok(None)` at end of input, and keeps doing so on every later
    /// call.
    pub fn read_token(&mut self) -> Result<Option<Token>> {
        let next = match self.buffer.take() {
            Some(buffered) => Some(buffered),
            None => self.assemble()?,
        };
        Ok(next.map(|(token, position)| {
            self.token_position = position;
            token
        }))
    }

    /// Returns the next token without consuming it.
    ///
    /// Repeated calls return the same token until [`Lexer::read_token`]
    /// consumes it.
    pub fn peek(&mut self) -> Result<Option<&Token>> {
        if self.buffer.is_none() {
            self.buffer = self.assemble()?;
        }
        Ok(self.buffer.as_ref().map(|(token, _)| token))
    }

    /// Discards the peeked token and all input through the next end of line.
    ///
    /// This is the way to resynchronize after a [`LexError`]; without it the
    /// position after an error is unspecified.
    pub fn flush(&mut self) -> Result<()> {
        self.buffer = None;
        self.scanner.flush()?;
        debug!(line = self.scanner.line(), "flushed input to end of line");
        Ok(())
    }

    /// Returns where the token most recently returned by
    /// [`Lexer::read_token`] starts.
    pub fn token_position(&self) -> Position {
        self.token_position
    }

    /// Returns the line of the next unread character (1-based).
    pub fn line(&self) -> u32 {
        self.scanner.line()
    }

    /// Returns the symbol table of this session.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Assembles one token from the scanner.
    fn assemble(&mut self) -> Result<Option<(Token, Position)>> {
        let lexeme = self.scanner.next_lexeme()?;
        let start = self.scanner.lexeme_start();

        let token = match lexeme {
            Lexeme::Eof => return Ok(None),
            Lexeme::Word(word) => self.symbols.resolve(&word),
            Lexeme::Number(text) => self.lex_number(text, start)?,
            Lexeme::Char(c) => self.lex_char(c, start)?,
        };
        Ok(Some((token, start)))
    }

    /// Maps a self-delimiting character to its token.
    fn lex_char(&mut self, c: char, start: Position) -> Result<Token> {
        let token = match c {
            '(' => Token::Punct(Punct::LeftParen),
            ')' => Token::Punct(Punct::RightParen),
            '[' => Token::Punct(Punct::LeftBrack),
            ']' => Token::Punct(Punct::RightBrack),
            ',' => Token::Punct(Punct::Comma),
            ';' => Token::Punct(Punct::SemiColon),
            '+' => Token::Operator(Op::Plus),
            '-' => Token::Operator(Op::Minus),
            '*' => Token::Operator(Op::Times),
            '/' => Token::Operator(Op::Divide),
            '~' => Token::Operator(Op::Not),
            '=' => Token::Operator(Op::Equals),
            '&' => Token::Operator(Op::And),
            '|' => Token::Operator(Op::Or),
            '<' => self.lex_less()?,
            '>' => self.lex_greater()?,
            '!' => self.lex_bang(start)?,
            ':' => self.lex_colon(start)?,
            ch => {
                return Err(LexError::IllegalCharacter {
                    ch,
                    position: start,
                })
            },
        };
        Ok(token)
    }
}

impl<'a> Lexer<&'a [u8]> {
    /// Creates a lexer over in-memory source text.
    pub fn from_source(source: &'a str) -> Self {
        Self::new(source.as_bytes())
    }
}

impl Lexer<BufReader<File>> {
    /// Creates a lexer over the contents of the file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        debug!(path = %path.display(), "opened source file");
        Ok(Self::new(BufReader::new(file)))
    }
}

impl Lexer<StdinLock<'static>> {
    /// Creates a lexer over the console input stream.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> Iterator for Lexer<R> {
    type Item = Result<Token>;

    /// Yields tokens until end of input. An error is yielded once and
    /// iteration may continue after it, so callers usually stop at the first
    /// `Err` (or call [`Lexer::flush`] before going on).
    fn next(&mut self) -> Option<Self::Item> {
        self.read_token().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexErrorKind;
    use crate::token::{Keyword, PrimFun};

    fn lex_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::from_source(source);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.read_token().unwrap() {
            tokens.push(token);
        }
        tokens
    }

    fn ident(lexer: &Lexer<&[u8]>, name: &str) -> Token {
        let token = lexer.symbols.get(name).cloned();
        token.unwrap_or_else(|| panic!("{} is not bound", name))
    }

    #[test]
    fn test_single_char_table() {
        let tokens = lex_all("( ) [ ] , ; + - * / ~ = & |");
        assert_eq!(
            tokens,
            vec![
                Token::Punct(Punct::LeftParen),
                Token::Punct(Punct::RightParen),
                Token::Punct(Punct::LeftBrack),
                Token::Punct(Punct::RightBrack),
                Token::Punct(Punct::Comma),
                Token::Punct(Punct::SemiColon),
                Token::Operator(Op::Plus),
                Token::Operator(Op::Minus),
                Token::Operator(Op::Times),
                Token::Operator(Op::Divide),
                Token::Operator(Op::Not),
                Token::Operator(Op::Equals),
                Token::Operator(Op::And),
                Token::Operator(Op::Or),
            ]
        );
    }

    #[test]
    fn test_words() {
        let mut lexer = Lexer::from_source("let f := map x to cons?(x) in f");
        let tokens: Vec<Token> = (&mut lexer).map(|t| t.unwrap()).collect();
        let f = ident(&lexer, "f");
        let x = ident(&lexer, "x");
        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Let),
                f.clone(),
                Token::Keyword(Keyword::Bind),
                Token::Keyword(Keyword::Map),
                x.clone(),
                Token::Keyword(Keyword::To),
                Token::PrimFun(PrimFun::IsCons),
                Token::Punct(Punct::LeftParen),
                x,
                Token::Punct(Punct::RightParen),
                Token::Keyword(Keyword::In),
                f,
            ]
        );
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lexer = Lexer::from_source("a b");
        let first = lexer.peek().unwrap().cloned();
        assert_eq!(lexer.peek().unwrap().cloned(), first);
        assert_eq!(lexer.read_token().unwrap(), first);
        let second = lexer.read_token().unwrap();
        assert_ne!(second, first);
        assert_eq!(lexer.read_token().unwrap(), None);
    }

    #[test]
    fn test_peek_at_eof() {
        let mut lexer = Lexer::from_source("   ");
        assert_eq!(lexer.peek().unwrap(), None);
        assert_eq!(lexer.peek().unwrap(), None);
        assert_eq!(lexer.read_token().unwrap(), None);
    }

    #[test]
    fn test_eof_is_stable() {
        let mut lexer = Lexer::from_source("1");
        assert_eq!(lexer.read_token().unwrap(), Some(Token::IntConstant(1)));
        for _ in 0..5 {
            assert_eq!(lexer.read_token().unwrap(), None);
        }
    }

    #[test]
    fn test_illegal_character() {
        let mut lexer = Lexer::from_source("x # y");
        lexer.read_token().unwrap();
        let err = lexer.read_token().unwrap_err();
        assert_eq!(err.kind(), LexErrorKind::IllegalCharacter);
        assert_eq!(err.position(), Some(Position { line: 1, column: 3 }));
        assert!(matches!(err, LexError::IllegalCharacter { ch: '#', .. }));
    }

    #[test]
    fn test_illegal_non_ascii() {
        let err = Lexer::from_source("λ").read_token().unwrap_err();
        assert!(matches!(err, LexError::IllegalCharacter { ch: 'λ', .. }));
    }

    #[test]
    fn test_peek_reports_errors() {
        let mut lexer = Lexer::from_source("$");
        let err = lexer.peek().unwrap_err();
        assert_eq!(err.kind(), LexErrorKind::IllegalCharacter);
    }

    #[test]
    fn test_flush_resynchronizes() {
        let mut lexer = Lexer::from_source("x # y z\nw");
        assert!(lexer.read_token().is_ok());
        assert!(lexer.read_token().is_err());
        lexer.flush().unwrap();
        let w = lexer.read_token().unwrap().unwrap();
        assert_eq!(w.to_string(), "w");
        assert_eq!(lexer.token_position(), Position { line: 2, column: 1 });
        assert_eq!(lexer.read_token().unwrap(), None);
    }

    #[test]
    fn test_flush_discards_peeked_token() {
        let mut lexer = Lexer::from_source("a b\nc");
        lexer.peek().unwrap();
        lexer.flush().unwrap();
        assert_eq!(lexer.read_token().unwrap().unwrap().to_string(), "c");
    }

    #[test]
    fn test_flush_at_eof() {
        let mut lexer = Lexer::from_source("a");
        lexer.read_token().unwrap();
        lexer.flush().unwrap();
        assert_eq!(lexer.read_token().unwrap(), None);
    }

    #[test]
    fn test_token_position() {
        let mut lexer = Lexer::from_source("if\n  x <= 10");
        lexer.read_token().unwrap();
        assert_eq!(lexer.token_position(), Position { line: 1, column: 1 });
        lexer.read_token().unwrap();
        assert_eq!(lexer.token_position(), Position { line: 2, column: 3 });
        lexer.read_token().unwrap();
        assert_eq!(lexer.token_position(), Position { line: 2, column: 5 });
        lexer.peek().unwrap();
        assert_eq!(lexer.token_position(), Position { line: 2, column: 5 });
        lexer.read_token().unwrap();
        assert_eq!(lexer.token_position(), Position { line: 2, column: 8 });
    }

    #[test]
    fn test_open_missing_file() {
        let err = Lexer::open("/nonexistent/dir/program.jam").err().unwrap();
        assert_eq!(err.kind(), LexErrorKind::Input);
    }

    #[test]
    fn test_iterator_matches_read_token() {
        let source = "let x := 3; in x + -4 <= y";
        let from_iter: Vec<Token> = Lexer::from_source(source).map(|t| t.unwrap()).collect();
        assert_eq!(from_iter, lex_all(source));
    }
}
