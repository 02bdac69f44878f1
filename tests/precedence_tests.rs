// Operator precedence and associativity through the public API

use hor::parser::ast::{BinOp, Expression, Literal, StatementOrExpression, UnOp};

fn expr(source: &str) -> Expression {
    let program = hor::parse_source(source).expect("Parsing failed");
    assert_eq!(program.len(), 1, "Expected a single item in {:?}", source);
    match program.items.into_iter().next() {
        Some(StatementOrExpression::Expression(expr)) => expr,
        other => panic!("Expected expression, got {:?}", other),
    }
}

fn int(n: u32) -> Expression {
    Expression::Literal(Literal::Int(n))
}

fn var(name: &str) -> Expression {
    Expression::Identifier(name.to_string())
}

fn bin(left: Expression, op: BinOp, right: Expression) -> Expression {
    Expression::binary(left, op, right)
}

#[test]
fn test_product_nests_under_sum() {
    assert_eq!(
        expr("1 + 2 * 3"),
        bin(int(1), BinOp::Add, bin(int(2), BinOp::Mul, int(3)))
    );
    assert_ne!(
        expr("1 + 2 * 3"),
        bin(bin(int(1), BinOp::Add, int(2)), BinOp::Mul, int(3))
    );
}

#[test]
fn test_additive_is_left_associative() {
    assert_eq!(
        expr("10 - 4 - 3"),
        bin(bin(int(10), BinOp::Sub, int(4)), BinOp::Sub, int(3))
    );
}

#[test]
fn test_multiplicative_operators_share_a_level() {
    assert_eq!(
        expr("8 // 3 % 2 / 1"),
        bin(
            bin(bin(int(8), BinOp::IntDiv, int(3)), BinOp::Mod, int(2)),
            BinOp::Div,
            int(1)
        )
    );
}

#[test]
fn test_power_binds_tighter_than_product() {
    assert_eq!(
        expr("2 * 3 ** 2"),
        bin(int(2), BinOp::Mul, bin(int(3), BinOp::Pow, int(2)))
    );
}

#[test]
fn test_power_chain_folds_left() {
    assert_eq!(
        expr("2 ** 3 ** 2"),
        bin(bin(int(2), BinOp::Pow, int(3)), BinOp::Pow, int(2))
    );
}

#[test]
fn test_comparison_below_arithmetic() {
    assert_eq!(
        expr("a + 1 >= b * 2"),
        bin(
            bin(var("a"), BinOp::Add, int(1)),
            BinOp::Ge,
            bin(var("b"), BinOp::Mul, int(2))
        )
    );
}

#[test]
fn test_equality_below_relational() {
    assert_eq!(
        expr("a < b == c > d"),
        bin(
            bin(var("a"), BinOp::Lt, var("b")),
            BinOp::Eq,
            bin(var("c"), BinOp::Gt, var("d"))
        )
    );
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(
        expr("a || b && c"),
        bin(var("a"), BinOp::Or, bin(var("b"), BinOp::And, var("c")))
    );
    assert_eq!(
        expr("a && b || c && d"),
        bin(
            bin(var("a"), BinOp::And, var("b")),
            BinOp::Or,
            bin(var("c"), BinOp::And, var("d"))
        )
    );
}

#[test]
fn test_not_applies_to_the_nearest_operand() {
    assert_eq!(
        expr("!a == b"),
        bin(Expression::unary(UnOp::Not, var("a")), BinOp::Eq, var("b"))
    );
    assert_eq!(
        expr("!(a == b)"),
        Expression::unary(UnOp::Not, bin(var("a"), BinOp::Eq, var("b")))
    );
}

#[test]
fn test_subtraction_versus_negation() {
    assert_eq!(
        expr("1 - -2"),
        bin(int(1), BinOp::Sub, Expression::unary(UnOp::Neg, int(2)))
    );
}
