//! Expression parsing implementation
//!
//! This module handles parsing of Hor expressions with one recursive descent
//! production per precedence level.
//!
//! # Supported Expressions
//!
//! - Literals: integers, floats, strings, booleans
//! - Identifier references
//! - Parenthesized expressions
//! - Unary operators: `!`, `-`
//! - Binary operators: arithmetic, comparison, logical
//!
//! # Precedence
//!
//! From loosest to tightest binding:
//!
//! ```text
//! ||                  logical or
//! &&                  logical and
//! ==                  equality
//! <  <=  >  >=        relational
//! +  -                additive
//! *  /  %  //         multiplicative
//! **                  power
//! !  -                unary (prefix)
//! ```
//!
//! Every binary level is a left-associative loop, `**` included.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::errors::ParseError;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::Parser;

const LOGICAL_OR: [(TokenKind, BinOp); 1] = [(TokenKind::OrOr, BinOp::Or)];

const LOGICAL_AND: [(TokenKind, BinOp); 1] = [(TokenKind::AndAnd, BinOp::And)];

const EQUALITY: [(TokenKind, BinOp); 1] = [(TokenKind::EqEq, BinOp::Eq)];

const RELATIONAL: [(TokenKind, BinOp); 4] = [
    (TokenKind::Lt, BinOp::Lt),
    (TokenKind::Le, BinOp::Le),
    (TokenKind::Gt, BinOp::Gt),
    (TokenKind::Ge, BinOp::Ge),
];

const ADDITIVE: [(TokenKind, BinOp); 2] = [
    (TokenKind::Plus, BinOp::Add),
    (TokenKind::Minus, BinOp::Sub),
];

const MULTIPLICATIVE: [(TokenKind, BinOp); 4] = [
    (TokenKind::Star, BinOp::Mul),
    (TokenKind::Slash, BinOp::Div),
    (TokenKind::Percent, BinOp::Mod),
    (TokenKind::SlashSlash, BinOp::IntDiv),
];

const POWER: [(TokenKind, BinOp); 1] = [(TokenKind::StarStar, BinOp::Pow)];

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.nested(|parser| parser.parse_logical_or())
    }

    /// Consume the current token if it is one of the level's operators
    fn match_operator(&mut self, operators: &[(TokenKind, BinOp)]) -> Option<BinOp> {
        let kind = self.peek_kind();
        let (_, op) = operators.iter().find(|(k, _)| *k == kind)?;
        self.advance();
        Some(*op)
    }

    /// Parse logical OR (||)
    fn parse_logical_or(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_logical_and()?;

        while let Some(op) = self.match_operator(&LOGICAL_OR) {
            let right = self.parse_logical_and()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse logical AND (&&)
    fn parse_logical_and(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_equality()?;

        while let Some(op) = self.match_operator(&LOGICAL_AND) {
            let right = self.parse_equality()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse equality (==)
    fn parse_equality(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_relational()?;

        while let Some(op) = self.match_operator(&EQUALITY) {
            let right = self.parse_relational()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse relational (< <= > >=)
    fn parse_relational(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_operator(&RELATIONAL) {
            let right = self.parse_additive()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse additive (+ -)
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_operator(&ADDITIVE) {
            let right = self.parse_multiplicative()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse multiplicative (* / % //)
    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_power()?;

        while let Some(op) = self.match_operator(&MULTIPLICATIVE) {
            let right = self.parse_power()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse power (**); the right operand is a unary
    fn parse_power(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_operator(&POWER) {
            let right = self.parse_unary()?;
            left = Expression::binary(left, op, right);
        }

        Ok(left)
    }

    /// Parse unary (! -)
    fn parse_unary(&mut self) -> Result<Expression, ParseError> {
        let operator = match self.peek_kind() {
            TokenKind::Bang => UnOp::Not,
            TokenKind::Minus => UnOp::Neg,
            _ => return self.parse_primary(),
        };
        self.advance();

        let operand = self.nested(|parser| parser.parse_unary())?;
        Ok(Expression::unary(operator, operand))
    }

    /// Parse primary (literals, identifiers, parenthesized expressions)
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        match self.peek_kind() {
            kind if kind.is_literal() => {
                let token = self.advance().clone();
                Ok(Expression::Literal(literal_value(token)?))
            }
            TokenKind::Identifier => {
                let name = self.advance().text.clone();
                Ok(Expression::Identifier(name))
            }
            TokenKind::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect_token(TokenKind::RParen, "')' after expression")?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }
}

/// Convert a literal token's text into its value
fn literal_value(token: Token) -> Result<Literal, ParseError> {
    match token.kind {
        TokenKind::IntLiteral => match token.text.parse::<u32>() {
            Ok(n) => Ok(Literal::Int(n)),
            Err(_) => Err(ParseError::MalformedLiteralValue { token }),
        },
        TokenKind::FloatLiteral => match token.text.parse::<f32>() {
            Ok(x) if x.is_finite() => Ok(Literal::Float(x)),
            _ => Err(ParseError::MalformedLiteralValue { token }),
        },
        TokenKind::BooleanLiteral => match token.text.as_str() {
            "true" => Ok(Literal::Boolean(true)),
            "false" => Ok(Literal::Boolean(false)),
            _ => Err(ParseError::MalformedLiteralValue { token }),
        },
        TokenKind::StringLiteral => Ok(Literal::string(token.text)),
        _ => Err(ParseError::UnexpectedToken {
            expected: "literal".to_string(),
            found: token,
        }),
    }
}
