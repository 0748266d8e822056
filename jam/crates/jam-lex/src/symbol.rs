//! Word table mapping spellings to tokens.
//!
//! Every lexer owns a [`SymbolTable`] seeded from [`RESERVED_WORDS`]. Words
//! are always resolved through the table, so a reserved spelling can never
//! come back as an identifier, and each new identifier is bound exactly once.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::token::{Ident, Keyword, PrimFun, Token};

/// Spellings every symbol table starts with.
///
/// `:=` cannot be scanned as a word; the lexer resolves it through the table
/// after combining `:` and `=`.
pub static RESERVED_WORDS: [(&str, Token); 20] = [
    // constants
    ("null", Token::Null),
    ("true", Token::Bool(true)),
    ("false", Token::Bool(false)),
    // keywords
    ("if", Token::Keyword(Keyword::If)),
    ("then", Token::Keyword(Keyword::Then)),
    ("else", Token::Keyword(Keyword::Else)),
    ("let", Token::Keyword(Keyword::Let)),
    ("in", Token::Keyword(Keyword::In)),
    ("map", Token::Keyword(Keyword::Map)),
    ("to", Token::Keyword(Keyword::To)),
    (":=", Token::Keyword(Keyword::Bind)),
    // primitive functions
    ("number?", Token::PrimFun(PrimFun::IsNumber)),
    ("function?", Token::PrimFun(PrimFun::IsFunction)),
    ("list?", Token::PrimFun(PrimFun::IsList)),
    ("null?", Token::PrimFun(PrimFun::IsNull)),
    ("cons?", Token::PrimFun(PrimFun::IsCons)),
    ("arity", Token::PrimFun(PrimFun::Arity)),
    ("cons", Token::PrimFun(PrimFun::Cons)),
    ("first", Token::PrimFun(PrimFun::First)),
    ("rest", Token::PrimFun(PrimFun::Rest)),
];

/// Insert-only map from spelling to token.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    words: FxHashMap<Box<str>, Token>,
}

impl SymbolTable {
    /// Creates a table holding the reserved words.
    pub fn new() -> Self {
        let words = RESERVED_WORDS
            .iter()
            .map(|(spelling, token)| (Box::from(*spelling), token.clone()))
            .collect();
        Self { words }
    }

    /// Returns the token bound to `spelling`, binding a new identifier
    /// first if the spelling has not been seen before.
    pub fn resolve(&mut self, spelling: &str) -> Token {
        if let Some(token) = self.words.get(spelling) {
            return token.clone();
        }
        trace!(spelling, "interning new identifier");
        let token = Token::Identifier(Ident::new(spelling));
        self.words.insert(Box::from(spelling), token.clone());
        token
    }

    /// Returns the token bound to `spelling` without binding anything.
    pub fn get(&self, spelling: &str) -> Option<&Token> {
        self.words.get(spelling)
    }

    /// Returns true if `spelling` is bound.
    pub fn contains(&self, spelling: &str) -> bool {
        self.words.contains_key(spelling)
    }

    /// Returns the number of bound spellings.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing is bound. A fresh table is never empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
