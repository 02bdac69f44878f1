//! Hor source code parser
//!
//! This module transforms Hor source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`](mod@parse): Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`errors`]: Lexer and parser error types
//!
//! # Supported Language
//!
//! - Types: `int`, `float`, `string`, `bool`, `void`, `auto`
//! - Statements: `mut`-optional typed variable assignments
//! - Conditionals: `if` / `elseif` / `else` chains with braced bodies
//! - Expressions: arithmetic (`+ - * / % // **`), comparison, logical, unary `!`/`-`
//!
//! The `func`, `for`, `foreach`, `while`, `switch` and `case` keywords are
//! reserved by the lexer but have no grammar yet.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, one production per precedence level.
//! No external parser generator dependencies.

pub mod ast;
pub mod constants;
pub mod errors;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

use ast::Program;
use errors::{LexError, ParseError};
use lexer::{Lexer, Token};
use parse::Parser;

/// Turn source text into an `Eof`-terminated token sequence.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}

/// Parse a token sequence produced by [`tokenize`] into a [`Program`].
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    Parser::new(tokens)?.parse_program()
}

/// Tokenize and parse in one step.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    parse(tokens)
}
