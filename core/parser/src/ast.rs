//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for calculator expressions.
//! CONTEXT: After the Lexer tokenizes the prepared display text, the Parser
//! converts those tokens into this tree structure. The engine's evaluator
//! then traverses this tree to compute the final number.

/// Represents a parsed arithmetic expression.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    /// A decimal literal.
    Literal(f64),

    /// A binary operation: left op right (e.g., 5 + 3).
    BinaryOp {
        left: Box<Expression>,
        op: BinaryOperator,
        right: Box<Expression>,
    },

    /// A unary operation: op operand (e.g., -5).
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
}

/// Binary operators, lowest precedence group first.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOperator {
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
}

/// Unary operators.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum UnaryOperator {
    Negate, // -
    Plus,   // +
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BinaryOperator::Add => write!(f, "+"),
            BinaryOperator::Subtract => write!(f, "-"),
            BinaryOperator::Multiply => write!(f, "*"),
            BinaryOperator::Divide => write!(f, "/"),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOperator::Negate => write!(f, "-"),
            UnaryOperator::Plus => write!(f, "+"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Literal(n) => write!(f, "{}", n),
            Expression::BinaryOp { left, op, right } => write!(f, "({} {} {})", left, op, right),
            Expression::UnaryOp { op, operand } => write!(f, "{}{}", op, operand),
        }
    }
}
