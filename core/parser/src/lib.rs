//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the calculator expression parser.
//! CONTEXT: This module exposes the text preparation pass, lexer, parser, and
//! AST components needed to convert display text into an evaluatable tree.
//!
//! PIPELINE: Display Text --> Prepare --> Lexer --> Tokens --> Parser --> AST --> Evaluator
//!
//! SUPPORTED FEATURES:
//! - Arithmetic: +, -, *, /
//! - Multiplication glyphs: x, × (normalized to *)
//! - Implicit multiplication: 6(2) is read as 6*(2)
//! - Parentheses for grouping
//! - Unary sign: -5, +5
//! - Decimal literals including .5 and 5.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod prepare;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::{BinaryOperator, Expression, UnaryOperator};
pub use lexer::Lexer;
pub use parser::{parse, ParseError, ParseResult, Parser, MAX_DEPTH};
pub use prepare::{insert_implicit_multiplication, normalize_symbols, prepare};
pub use token::Token;
