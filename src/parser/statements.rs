//! Statement parsing implementation
//!
//! This module handles the item-level productions:
//!
//! - Variable assignments: `mut int x = 42;`
//! - Conditional chains: `if (...) { ... } elseif (...) { ... } else { ... }`
//! - Bodies: `{ ... }`, a sequence of statement-or-expression items
//!
//! # Grammar
//!
//! ```text
//! statement_or_expression ::= statement | if_else | expression ';'?
//! statement ::= 'mut'? type_name identifier '=' expression ';'
//! if_else   ::= 'if' '(' expression ')' body
//!               ('elseif' '(' expression ')' body)*
//!               ('else' body)?
//! body      ::= '{' statement_or_expression* '}'
//! ```
//!
//! The alternatives are tried in order; the leading token alone decides which
//! one applies, so no backtracking is needed.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::errors::ParseError;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse one top-level or body item
    pub(crate) fn parse_statement_or_expression(
        &mut self,
    ) -> Result<StatementOrExpression, ParseError> {
        if let Some(statement) = self.try_parse_statement()? {
            return Ok(StatementOrExpression::Statement(statement));
        }

        if let Some(if_else) = self.try_parse_if_else()? {
            return Ok(StatementOrExpression::Expression(Expression::IfElse(
                Box::new(if_else),
            )));
        }

        let expr = self.parse_expression()?;
        // An expression item may close with a ';'
        self.match_token(TokenKind::Semicolon);
        Ok(StatementOrExpression::Expression(expr))
    }

    /// Parse a variable assignment if one starts here
    fn try_parse_statement(&mut self) -> Result<Option<Statement>, ParseError> {
        if !matches!(self.peek_kind(), TokenKind::Mutable | TokenKind::TypeName) {
            return Ok(None);
        }

        let is_mutable = self.match_token(TokenKind::Mutable);
        let type_token = self.expect_token(TokenKind::TypeName, "type name after 'mut'")?;
        let declared_type = TypeName::from_lexeme(&type_token.text).ok_or_else(|| {
            ParseError::UnexpectedToken {
                expected: "primitive type name".to_string(),
                found: type_token.clone(),
            }
        })?;

        let identifier = self.expect_identifier("variable name after type")?;
        self.expect_token(TokenKind::Eq, "'=' after variable name")?;
        let value = self.parse_expression()?;
        self.expect_token(TokenKind::Semicolon, "';' after variable assignment")?;

        Ok(Some(Statement::VariableAssignment {
            is_mutable,
            declared_type,
            identifier,
            value,
        }))
    }

    /// Parse an if / elseif / else chain if one starts here
    fn try_parse_if_else(&mut self) -> Result<Option<IfElse>, ParseError> {
        if !self.match_token(TokenKind::If) {
            return Ok(None);
        }

        let if_branch = self.parse_branch("if")?;

        let mut elseif_branches = Vec::new();
        while self.match_token(TokenKind::ElseIf) {
            elseif_branches.push(self.parse_branch("elseif")?);
        }

        let else_branch = if self.match_token(TokenKind::Else) {
            Some(self.parse_body("else")?)
        } else {
            None
        };

        Ok(Some(IfElse {
            if_branch,
            elseif_branches,
            else_branch,
        }))
    }

    /// Parse `( condition ) { body }` after an `if` or `elseif` keyword
    fn parse_branch(&mut self, keyword: &str) -> Result<Branch, ParseError> {
        self.expect_token(TokenKind::LParen, &format!("'(' after '{keyword}'"))?;
        let condition = self.parse_expression()?;
        self.expect_token(TokenKind::RParen, &format!("')' after {keyword} condition"))?;
        let body = self.parse_body(keyword)?;

        Ok(Branch { condition, body })
    }

    /// Parse a braced body
    fn parse_body(&mut self, keyword: &str) -> Result<Vec<StatementOrExpression>, ParseError> {
        self.expect_token(TokenKind::LBrace, &format!("'{{' to open {keyword} body"))?;

        let body = self.nested(|parser| {
            let mut items = Vec::new();
            while !parser.check(TokenKind::RBrace) && !parser.is_at_end() {
                items.push(parser.parse_statement_or_expression()?);
            }
            Ok(items)
        })?;

        self.expect_token(TokenKind::RBrace, &format!("'}}' to close {keyword} body"))?;
        Ok(body)
    }
}
