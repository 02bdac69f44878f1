// AST (Abstract Syntax Tree) definitions for the Hor language

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    /// Byte offset from the start of the source (0-based)
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

/// Primitive type names usable in a variable declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    Int,
    Float,
    String,
    Bool,
    Void,
    Auto,
}

impl TypeName {
    /// Resolve a type-name lexeme. Returns `None` for anything that is not
    /// one of the primitive type keywords.
    pub fn from_lexeme(text: &str) -> Option<Self> {
        match text {
            "int" => Some(TypeName::Int),
            "float" => Some(TypeName::Float),
            "string" => Some(TypeName::String),
            "bool" => Some(TypeName::Bool),
            "void" => Some(TypeName::Void),
            "auto" => Some(TypeName::Auto),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Int => "int",
            TypeName::Float => "float",
            TypeName::String => "string",
            TypeName::Bool => "bool",
            TypeName::Void => "void",
            TypeName::Auto => "auto",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    IntDiv, // //
    Mod,
    Pow, // **
    // Comparison
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    // Logical
    And,
    Or,
}

impl BinOp {
    /// The operator as it is spelled in source
    pub fn symbol(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::IntDiv => "//",
            BinOp::Mod => "%",
            BinOp::Pow => "**",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Eq => "==",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg, // -x
    Not, // !x
}

impl UnOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            UnOp::Neg => "-",
            UnOp::Not => "!",
        }
    }
}

/// Literal values, already converted from their lexemes
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(u32),
    Float(f32),
    String { value: String, length: usize },
    Boolean(bool),
}

impl Literal {
    /// Build a string literal, recording its byte length
    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        let length = value.len();
        Literal::String { value, length }
    }
}

/// A guarded body: condition plus the items executed when it holds
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub condition: Expression,
    pub body: Vec<StatementOrExpression>,
}

/// `if` / `elseif`* / `else`? chain
#[derive(Debug, Clone, PartialEq)]
pub struct IfElse {
    pub if_branch: Branch,
    pub elseif_branches: Vec<Branch>,
    /// The else body has no condition of its own
    pub else_branch: Option<Vec<StatementOrExpression>>,
}

/// Expression nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Identifier(String),
    UnaryOperation {
        operator: UnOp,
        operand: Box<Expression>,
    },
    BinaryOperation {
        left: Box<Expression>,
        operator: BinOp,
        right: Box<Expression>,
    },
    IfElse(Box<IfElse>),
}

impl Expression {
    pub fn binary(left: Expression, operator: BinOp, right: Expression) -> Self {
        Expression::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: UnOp, operand: Expression) -> Self {
        Expression::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }
}

/// Statement nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableAssignment {
        is_mutable: bool,
        declared_type: TypeName,
        identifier: String,
        value: Expression,
    },
}

/// One top-level (or body) item
#[derive(Debug, Clone, PartialEq)]
pub enum StatementOrExpression {
    Statement(Statement),
    Expression(Expression),
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub items: Vec<StatementOrExpression>, // In source order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_lexemes() {
        for ty in [
            TypeName::Int,
            TypeName::Float,
            TypeName::String,
            TypeName::Bool,
            TypeName::Void,
            TypeName::Auto,
        ] {
            assert_eq!(TypeName::from_lexeme(ty.as_str()), Some(ty));
        }
        assert_eq!(TypeName::from_lexeme("integer"), None);
    }

    #[test]
    fn test_string_literal_length_is_bytes() {
        match Literal::string("héllo") {
            Literal::String { value, length } => {
                assert_eq!(value, "héllo");
                assert_eq!(length, 6);
            }
            other => panic!("Expected string literal, got {:?}", other),
        }
    }

    #[test]
    fn test_binop_symbols() {
        assert_eq!(BinOp::IntDiv.to_string(), "//");
        assert_eq!(BinOp::Pow.to_string(), "**");
        assert_eq!(BinOp::Ge.symbol(), ">=");
    }
}
