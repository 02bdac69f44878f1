// Integration tests for the Hor front end

use hor::parser::ast::*;
use hor::parser::errors::{LexError, ParseError};
use hor::parser::lexer::TokenKind;
use hor::parser::parse::Parser;

#[test]
fn test_variable_assignment_end_to_end() {
    let program = hor::parse_source("mut int x = 5 ;").expect("Parsing failed");

    assert_eq!(
        program.items,
        vec![StatementOrExpression::Statement(Statement::VariableAssignment {
            is_mutable: true,
            declared_type: TypeName::Int,
            identifier: "x".to_string(),
            value: Expression::Literal(Literal::Int(5)),
        })]
    );
}

#[test]
fn test_if_else_end_to_end() {
    let program = hor::parse_source("if ( x > 1 ) { } else { }").expect("Parsing failed");
    assert_eq!(program.len(), 1);

    match &program.items[0] {
        StatementOrExpression::Expression(Expression::IfElse(if_else)) => {
            assert_eq!(
                if_else.if_branch.condition,
                Expression::binary(
                    Expression::Identifier("x".to_string()),
                    BinOp::Gt,
                    Expression::Literal(Literal::Int(1)),
                )
            );
            assert!(if_else.if_branch.body.is_empty());
            assert!(if_else.elseif_branches.is_empty());
            assert_eq!(if_else.else_branch, Some(Vec::new()));
        }
        other => panic!("Expected if-else expression, got {:?}", other),
    }
}

#[test]
fn test_program_preserves_source_order() {
    let source = r#"
        mut int count = 0;
        float ratio = 1.5 * 2;
        if (count >= 10 && ratio < 4.0) {
            bool done = true;
            "finished"
        } elseif (count == 0) {
            count + 1
        } else {
            auto fallback = count // 2;
        }
        string label = "end";
    "#;

    let program = hor::parse_source(source).expect("Parsing failed");
    assert_eq!(program.len(), 4);

    let names: Vec<&str> = program
        .items
        .iter()
        .filter_map(|item| match item {
            StatementOrExpression::Statement(Statement::VariableAssignment {
                identifier, ..
            }) => Some(identifier.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["count", "ratio", "label"]);

    match &program.items[2] {
        StatementOrExpression::Expression(Expression::IfElse(if_else)) => {
            assert_eq!(if_else.if_branch.body.len(), 2);
            assert_eq!(
                if_else.if_branch.body[1],
                StatementOrExpression::Expression(Expression::Literal(Literal::string(
                    "finished"
                )))
            );
            assert_eq!(if_else.elseif_branches.len(), 1);
            let else_body = if_else.else_branch.as_ref().expect("Missing else branch");
            match &else_body[0] {
                StatementOrExpression::Statement(Statement::VariableAssignment {
                    declared_type,
                    value,
                    ..
                }) => {
                    assert_eq!(*declared_type, TypeName::Auto);
                    assert!(matches!(
                        value,
                        Expression::BinaryOperation {
                            operator: BinOp::IntDiv,
                            ..
                        }
                    ));
                }
                other => panic!("Expected assignment in else body, got {:?}", other),
            }
        }
        other => panic!("Expected if-else expression, got {:?}", other),
    }
}

#[test]
fn test_tokenize_then_parse_matches_parse_source() {
    let source = "mut float f = 2.5; if (f > 1) { f }";
    let tokens = hor::tokenize(source).expect("Tokenizing failed");
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));

    let from_tokens = hor::parse(tokens).expect("Parsing failed");
    let from_source = hor::parse_source(source).expect("Parsing failed");
    assert_eq!(from_tokens, from_source);
}

#[test]
fn test_parse_is_deterministic() {
    let source = "int a = 1 + 2 * 3; if (a == 7) { \"ok\" } else { \"bad\" }";
    let first = hor::parse_source(source).expect("Parsing failed");
    let second = hor::parse_source(source).expect("Parsing failed");
    assert_eq!(first, second);
}

#[test]
fn test_empty_source_is_not_an_error() {
    let tokens = hor::tokenize("").expect("Tokenizing failed");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);

    let program = hor::parse(tokens).expect("Parsing failed");
    assert!(program.is_empty());
}

#[test]
fn test_unterminated_string_fails_whole_parse() {
    let err = hor::parse_source("string s = \"abc").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Lex(LexError::UnterminatedStringLiteral { .. })
    ));
    assert!(err.to_string().contains("Unterminated string literal"));
}

#[test]
fn test_unrecognized_character_reports_offset() {
    let err = hor::tokenize("int x = 5 $ 3;").unwrap_err();
    match err {
        LexError::UnrecognizedCharacter { ch, location } => {
            assert_eq!(ch, '$');
            assert_eq!(location.offset, 10);
        }
        other => panic!("Expected unrecognized character, got {:?}", other),
    }
}

#[test]
fn test_malformed_literal_fails_whole_parse() {
    let err = hor::parse_source("int ok = 1; int big = 99999999999;").unwrap_err();
    match err {
        ParseError::MalformedLiteralValue { token } => {
            assert_eq!(token.text, "99999999999");
            assert_eq!(token.location.line, 1);
            assert_eq!(token.location.column, 23);
        }
        other => panic!("Expected malformed literal, got {:?}", other),
    }
}

#[test]
fn test_unexpected_token_message() {
    let err = hor::parse_source("int x = ;").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parse error at line 1, column 9: Expected expression, found ';'"
    );
}

#[test]
fn test_reserved_keywords_have_no_grammar() {
    let err = hor::parse_source("while (x) { }").unwrap_err();
    match err {
        ParseError::UnexpectedToken { found, .. } => {
            assert_eq!(found.kind, TokenKind::While);
        }
        other => panic!("Expected unexpected token, got {:?}", other),
    }
}

#[test]
fn test_custom_depth_limit() {
    let tokens = hor::tokenize("((((1))))").expect("Tokenizing failed");
    let mut parser = Parser::with_max_depth(tokens, 3).expect("Parser creation failed");
    assert!(matches!(
        parser.parse_program(),
        Err(ParseError::NestingTooDeep { limit: 3, .. })
    ));
}
