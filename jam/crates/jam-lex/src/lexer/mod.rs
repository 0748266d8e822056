//! Lexer module.
//!
//! This module organizes the token assembler into smaller components:
//! - `core` - Lexer struct, peek buffer and dispatch
//! - `operator` - Multi-character operator disambiguation
//! - `number` - Integer literal validation

mod core;
mod number;
mod operator;

pub use self::core::Lexer;
