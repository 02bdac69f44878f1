//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the cursor helpers and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: variable assignments, `if`/`elseif`/`else` chains, bodies
//! - `expressions`: the binary operator precedence chain down to primaries
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared cursor. A production that does not
//! recognize the current token returns without moving the cursor.

use crate::parser::ast::*;
use crate::parser::constants::{DEFAULT_MAX_DEPTH, INITIAL_PROGRAM_CAPACITY};
use crate::parser::errors::ParseError;
use crate::parser::lexer::{Lexer, Token, TokenKind};

/// Recursive descent parser for Hor
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Create a parser over an `Eof`-terminated token sequence.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    /// Create a parser with a custom nesting limit.
    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Result<Self, ParseError> {
        // Exactly one Eof, and it is the last token
        if tokens.iter().position(Token::is_eof) != Some(tokens.len().wrapping_sub(1)) {
            return Err(ParseError::MalformedTokenStream);
        }

        Ok(Self {
            tokens,
            position: 0,
            depth: 0,
            max_depth,
        })
    }

    /// Tokenize `source` and create a parser over the result.
    pub fn from_source(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Self::new(tokens)
    }

    /// Parse the entire program (top-level statements and expressions)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut items: Vec<StatementOrExpression> = Vec::new();
        self.reserve_items(&mut items, INITIAL_PROGRAM_CAPACITY)?;

        while !self.is_at_end() {
            let item = self.parse_statement_or_expression()?;
            if items.len() == items.capacity() {
                let additional = items.capacity().max(1);
                self.reserve_items(&mut items, additional)?;
            }
            items.push(item);
        }

        items.shrink_to_fit();
        Ok(Program { items })
    }

    fn reserve_items(
        &self,
        items: &mut Vec<StatementOrExpression>,
        additional: usize,
    ) -> Result<(), ParseError> {
        items
            .try_reserve_exact(additional)
            .map_err(|_| ParseError::AllocationFailure {
                location: self.current_location(),
            })
    }

    // ===== Helper methods =====

    /// Run `production` one nesting level deeper, failing once the
    /// configured limit is reached.
    pub(crate) fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                location: self.current_location(),
            });
        }

        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.peek().clone(),
        }
    }

    /// Consume a token of the given kind, or fail without moving.
    pub(crate) fn expect_token(
        &mut self,
        kind: TokenKind,
        expected: &str,
    ) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(self.unexpected(expected))
        }
    }

    pub(crate) fn expect_identifier(&mut self, expected: &str) -> Result<String, ParseError> {
        self.expect_token(TokenKind::Identifier, expected)
            .map(|token| token.text)
    }
}
