//! jam-lex - Lexical Analyzer for the Jam Language
//!
//! This crate turns Jam source text into a stream of tokens for the parser.
//! Input is read incrementally from any [`std::io::BufRead`], so a lexer can
//! sit on top of a file, the console or an in-memory string.
//!
//! # Example Usage
//!
//! ```
//! use jam_lex::{Keyword, Lexer, Op, Token};
//!
//! let mut lexer = Lexer::from_source("let x := 3 in x <= 10");
//!
//! assert_eq!(lexer.read_token()?, Some(Token::Keyword(Keyword::Let)));
//!
//! // Look at the next token without consuming it
//! let x = lexer.peek()?.cloned();
//! assert_eq!(lexer.read_token()?, x);
//!
//! assert_eq!(lexer.read_token()?, Some(Token::Keyword(Keyword::Bind)));
//! assert_eq!(lexer.read_token()?, Some(Token::IntConstant(3)));
//! # assert_eq!(lexer.read_token()?, Some(Token::Keyword(Keyword::In)));
//! # lexer.read_token()?;
//! # assert_eq!(lexer.read_token()?, Some(Token::Operator(Op::LessThanEquals)));
//! # Ok::<(), jam_lex::LexError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`char_class`] - Character classification
//! - [`cursor`] - Line-buffered character cursor with positions
//! - [`scanner`] - Raw lexemes: words, numbers, single characters
//! - [`symbol`] - Reserved words and identifier interning
//! - [`lexer`] - Token assembly and the peek buffer
//! - [`token`] - Token type definitions
//! - [`error`] - Lexical errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `then`, `else`, `let`, `in`, `map`, `to`, `:=`
//!
//! ## Constants
//!
//! - **Integer**: `0` to `2147483647`. A leading `-` is the minus operator.
//! - **Boolean**: `true`, `false`
//! - **Null**: `null`
//!
//! ## Primitive Functions
//!
//! `number?`, `function?`, `list?`, `null?`, `cons?`, `arity`, `cons`,
//! `first`, `rest`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`
//! - **Comparison**: `=`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `~`, `&`, `|`
//!
//! ## Delimiters
//!
//! `(`, `)`, `[`, `]`, `,`, `;`
//!
//! ## Comments
//!
//! `//` to end of line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod char_class;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod scanner;
pub mod symbol;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, Position};
pub use error::{LexError, LexErrorKind, Result};
pub use lexer::Lexer;
pub use scanner::{Lexeme, Scanner};
pub use symbol::{SymbolTable, RESERVED_WORDS};
pub use token::{Ident, Keyword, Op, PrimFun, Punct, Token, TokenKind};
