//! Token definitions for the Jam language.
//!
//! Tokens form a closed set of variants. Apart from integer literals and
//! identifiers every token is one of a fixed, enumerable set of constants,
//! so equality is a cheap comparison of discriminants.

use std::fmt;
use std::sync::Arc;

/// A lexical token of the Jam language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// 32-bit signed integer literal. Not interned.
    IntConstant(i32),

    /// Variable name, interned per lexer instance.
    Identifier(Ident),

    /// Reserved word, including `:=`.
    Keyword(Keyword),

    /// Unary and/or binary operator.
    Operator(Op),

    /// Delimiter.
    Punct(Punct),

    /// `true` or `false`.
    Bool(bool),

    /// `null`.
    Null,

    /// Name of a built-in primitive function.
    PrimFun(PrimFun),
}

/// Category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// [`Token::IntConstant`]
    IntConstant,
    /// [`Token::Identifier`]
    Identifier,
    /// [`Token::Keyword`]
    Keyword,
    /// [`Token::Operator`]
    Operator,
    /// [`Token::Punct`]
    Punctuation,
    /// [`Token::Bool`]
    BoolConstant,
    /// [`Token::Null`]
    NullConstant,
    /// [`Token::PrimFun`]
    PrimFun,
}

impl TokenKind {
    /// Returns the name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::IntConstant => "IntConstant",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::BoolConstant => "BoolConstant",
            TokenKind::NullConstant => "NullConstant",
            TokenKind::PrimFun => "PrimFun",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Token {
    /// Returns the category of this token.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::IntConstant(_) => TokenKind::IntConstant,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Keyword(_) => TokenKind::Keyword,
            Token::Operator(_) => TokenKind::Operator,
            Token::Punct(_) => TokenKind::Punctuation,
            Token::Bool(_) => TokenKind::BoolConstant,
            Token::Null => TokenKind::NullConstant,
            Token::PrimFun(_) => TokenKind::PrimFun,
        }
    }

    /// Returns the operator if this token is one.
    pub fn as_op(&self) -> Option<Op> {
        match self {
            Token::Operator(op) => Some(*op),
            _ => None,
        }
    }

    /// Returns true if this token may start a unary application.
    pub fn is_unop(&self) -> bool {
        self.as_op().is_some_and(Op::is_unop)
    }

    /// Returns true if this token may join two operands.
    pub fn is_binop(&self) -> bool {
        self.as_op().is_some_and(Op::is_binop)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntConstant(value) => write!(f, "{}", value),
            Token::Identifier(ident) => f.write_str(ident.as_str()),
            Token::Keyword(keyword) => f.write_str(keyword.as_str()),
            Token::Operator(op) => f.write_str(op.as_str()),
            Token::Punct(punct) => f.write_str(punct.as_str()),
            Token::Bool(value) => write!(f, "{}", value),
            Token::Null => f.write_str("null"),
            Token::PrimFun(prim) => f.write_str(prim.as_str()),
        }
    }
}

/// An interned variable name.
///
/// Clones share one allocation. Equality compares spellings; use
/// [`Ident::ptr_eq`] to check that two names came from the same symbol
/// table binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ident(Arc<str>);

impl Ident {
    /// Creates a name that is not bound in any symbol table.
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the spelling of this name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if both names share the same interned allocation.
    pub fn ptr_eq(&self, other: &Ident) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reserved words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `let`
    Let,
    /// `in`
    In,
    /// `map`
    Map,
    /// `to`
    To,
    /// `:=`
    Bind,
}

impl Keyword {
    /// Returns the source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Let => "let",
            Keyword::In => "in",
            Keyword::Map => "map",
            Keyword::To => "to",
            Keyword::Bind => ":=",
        }
    }
}

/// Operators.
///
/// There is no lexical distinction between unary and binary operators
/// because `+` and `-` are both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `=`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
    /// `<=`
    LessThanEquals,
    /// `>=`
    GreaterThanEquals,
    /// `~`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
}

impl Op {
    /// Returns the source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Minus => "-",
            Op::Times => "*",
            Op::Divide => "/",
            Op::Equals => "=",
            Op::NotEquals => "!=",
            Op::LessThan => "<",
            Op::GreaterThan => ">",
            Op::LessThanEquals => "<=",
            Op::GreaterThanEquals => ">=",
            Op::Not => "~",
            Op::And => "&",
            Op::Or => "|",
        }
    }

    /// Returns true if the operator can be applied as a prefix.
    pub fn is_unop(self) -> bool {
        matches!(self, Op::Plus | Op::Minus | Op::Not)
    }

    /// Returns true if the operator can be applied infix.
    pub fn is_binop(self) -> bool {
        !matches!(self, Op::Not)
    }
}

/// Delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Punct {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBrack,
    /// `]`
    RightBrack,
    /// `,`
    Comma,
    /// `;`
    SemiColon,
}

impl Punct {
    /// Returns the source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Punct::LeftParen => "(",
            Punct::RightParen => ")",
            Punct::LeftBrack => "[",
            Punct::RightBrack => "]",
            Punct::Comma => ",",
            Punct::SemiColon => ";",
        }
    }
}

/// Built-in primitive functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimFun {
    /// `number?`
    IsNumber,
    /// `function?`
    IsFunction,
    /// `list?`
    IsList,
    /// `null?`
    IsNull,
    /// `cons?`
    IsCons,
    /// `arity`
    Arity,
    /// `cons`
    Cons,
    /// `first`
    First,
    /// `rest`
    Rest,
}

impl PrimFun {
    /// Returns the source spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            PrimFun::IsNumber => "number?",
            PrimFun::IsFunction => "function?",
            PrimFun::IsList => "list?",
            PrimFun::IsNull => "null?",
            PrimFun::IsCons => "cons?",
            PrimFun::Arity => "arity",
            PrimFun::Cons => "cons",
            PrimFun::First => "first",
            PrimFun::Rest => "rest",
        }
    }
}
