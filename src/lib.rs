//! # Introduction
//!
//! Hor is a small imperative language. This crate is its front end: it turns
//! `.hor` source text into tokens and then into an abstract syntax tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST
//! ```
//!
//! 1. [`parser::lexer`] — single pass tokenizer with maximal-munch operators.
//! 2. [`parser::parse`] — recursive descent over the token sequence.
//! 3. [`parser::ast`] — the closed node types the parser produces.
//!
//! Reading files, printing trees and everything after parsing (semantic
//! analysis, code generation) live outside this crate.
//!
//! ```
//! use hor::parser::ast::{Statement, StatementOrExpression};
//!
//! let program = hor::parse_source("mut int x = 5;").unwrap();
//! assert!(matches!(
//!     program.items[0],
//!     StatementOrExpression::Statement(Statement::VariableAssignment { is_mutable: true, .. })
//! ));
//! ```

pub mod parser;

pub use parser::{parse, parse_source, tokenize};
