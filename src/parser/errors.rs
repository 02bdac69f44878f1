//! Error types for the Hor front end
//!
//! [`LexError`] covers failures while turning source text into tokens and
//! [`ParseError`] covers failures while turning tokens into a [`Program`].
//! Every error is terminal for the call that produced it: no partially built
//! token list or AST is ever returned alongside one.
//!
//! [`Program`]: super::ast::Program

use super::ast::SourceLocation;
use super::lexer::Token;
use std::fmt;

/// Errors raised by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A lexeme or token buffer could not grow
    AllocationFailure { location: SourceLocation },

    /// Input ended before the closing `"` of a string literal
    UnterminatedStringLiteral { location: SourceLocation },

    /// A character that starts no token
    UnrecognizedCharacter { ch: char, location: SourceLocation },
}

impl LexError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            LexError::AllocationFailure { location } => location,
            LexError::UnterminatedStringLiteral { location } => location,
            LexError::UnrecognizedCharacter { location, .. } => location,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.location();
        write!(
            f,
            "Lexer error at line {}, column {}: ",
            loc.line, loc.column
        )?;
        match self {
            LexError::AllocationFailure { .. } => {
                write!(f, "Out of memory while reading a token")
            }
            LexError::UnterminatedStringLiteral { .. } => {
                write!(f, "Unterminated string literal")
            }
            LexError::UnrecognizedCharacter { ch, location } => write!(
                f,
                "Unrecognized character {:?} at offset {}",
                ch, location.offset
            ),
        }
    }
}

impl std::error::Error for LexError {}

/// Errors raised by the parser
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenizing the source failed before parsing could start
    Lex(LexError),

    /// The item list could not grow
    AllocationFailure { location: SourceLocation },

    /// A literal token whose text does not convert to its kind
    MalformedLiteralValue { token: Token },

    /// A token that fits none of the alternatives at this position
    UnexpectedToken { expected: String, found: Token },

    /// Expressions or bodies nested deeper than the configured limit
    NestingTooDeep {
        limit: usize,
        location: SourceLocation,
    },

    /// The token sequence was empty, or end-of-stream was missing or not last
    MalformedTokenStream,
}

impl ParseError {
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            ParseError::Lex(err) => Some(err.location()),
            ParseError::AllocationFailure { location } => Some(location),
            ParseError::MalformedLiteralValue { token } => Some(&token.location),
            ParseError::UnexpectedToken { found, .. } => Some(&found.location),
            ParseError::NestingTooDeep { location, .. } => Some(location),
            ParseError::MalformedTokenStream => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let ParseError::Lex(err) = self {
            return fmt::Display::fmt(err, f);
        }
        if let Some(loc) = self.location() {
            write!(
                f,
                "Parse error at line {}, column {}: ",
                loc.line, loc.column
            )?;
        } else {
            write!(f, "Parse error: ")?;
        }
        match self {
            ParseError::Lex(_) => Ok(()),
            ParseError::AllocationFailure { .. } => {
                write!(f, "Out of memory while building the syntax tree")
            }
            ParseError::MalformedLiteralValue { token } => {
                write!(f, "Malformed literal value {}", token)
            }
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "Expected {}, found {}", expected, found)
            }
            ParseError::NestingTooDeep { limit, .. } => {
                write!(f, "Nesting exceeds the maximum depth of {}", limit)
            }
            ParseError::MalformedTokenStream => {
                write!(f, "Token stream must end with exactly one end of input marker")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::TokenKind;

    #[test]
    fn test_lex_error_display() {
        let err = LexError::UnrecognizedCharacter {
            ch: '@',
            location: SourceLocation::new(4, 1, 5),
        };
        assert_eq!(
            err.to_string(),
            "Lexer error at line 1, column 5: Unrecognized character '@' at offset 4"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::UnexpectedToken {
            expected: "expression".to_string(),
            found: Token::new(TokenKind::Semicolon, ";", SourceLocation::new(2, 1, 3)),
        };
        assert_eq!(
            err.to_string(),
            "Parse error at line 1, column 3: Expected expression, found ';'"
        );
    }

    #[test]
    fn test_lex_error_converts_into_parse_error() {
        let lex = LexError::UnterminatedStringLiteral {
            location: SourceLocation::new(0, 1, 1),
        };
        let err: ParseError = lex.clone().into();
        assert_eq!(err, ParseError::Lex(lex.clone()));
        assert_eq!(err.to_string(), lex.to_string());
    }
}
