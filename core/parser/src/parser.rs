//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes tokens
//! from the Lexer and builds an Expression tree that can be evaluated.
//!
//! GRAMMAR:
//!   expression     --> additive
//!   additive       --> multiplicative ( ("+" | "-") multiplicative )*
//!   multiplicative --> unary ( ("*" | "/") unary )*
//!   unary          --> ("-" | "+") unary | primary
//!   primary        --> NUMBER | "(" expression ")"

use crate::ast::{BinaryOperator, Expression, UnaryOperator};
use crate::lexer::Lexer;
use crate::token::Token;

/// Parser errors with descriptive messages.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(message: impl Into<String>) -> Self {
        ParseError {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting, and tallest expression tree, the parser accepts.
/// Evaluation walks the tree recursively, so this also bounds its stack use.
pub const MAX_DEPTH: usize = 256;

fn too_deep() -> ParseError {
    ParseError::new("Expression nested too deeply")
}

/// The Parser struct holds the lexer and current token state.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
    /// Open parentheses and unary signs currently being parsed.
    depth: usize,
    /// Height of the tree most recently returned by a parse_* method.
    height: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from an input string.
    /// Automatically advances to the first token.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token();
        Parser {
            lexer,
            current_token,
            depth: 0,
            height: 0,
        }
    }

    /// Parses the entire input and returns the AST.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        if self.current_token == Token::EOF {
            return Err(ParseError::new("Empty expression"));
        }

        let expr = self.parse_expression()?;

        // Ensure we consumed all tokens
        if self.current_token != Token::EOF {
            return Err(ParseError::new(format!(
                "Unexpected token after expression: {:?}",
                self.current_token
            )));
        }

        Ok(expr)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current_token = self.lexer.next_token();
    }

    /// Checks if the current token matches the expected token.
    /// If it matches, advances and returns Ok. Otherwise returns an error.
    fn expect(&mut self, expected: Token) -> ParseResult<()> {
        if self.current_token == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "Expected {:?}, found {:?}",
                expected, self.current_token
            )))
        }
    }

    /// Enters one level of parenthesis or unary nesting.
    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(too_deep());
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Records the height of the tree just built, rejecting trees that are too tall.
    fn set_height(&mut self, height: usize) -> ParseResult<()> {
        if height > MAX_DEPTH {
            return Err(too_deep());
        }
        self.height = height;
        Ok(())
    }

    /// Entry point for expression parsing.
    fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_additive()
    }

    /// Parses additive expressions (+ and -).
    fn parse_additive(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_multiplicative()?;
        let mut height = self.height;

        loop {
            let op = match &self.current_token {
                Token::Plus => BinaryOperator::Add,
                Token::Minus => BinaryOperator::Subtract,
                _ => break,
            };

            self.advance();
            let right = self.parse_multiplicative()?;
            height = height.max(self.height) + 1;
            self.set_height(height)?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses multiplicative expressions (* and /).
    fn parse_multiplicative(&mut self) -> ParseResult<Expression> {
        let mut left = self.parse_unary()?;
        let mut height = self.height;

        loop {
            let op = match &self.current_token {
                Token::Asterisk => BinaryOperator::Multiply,
                Token::Slash => BinaryOperator::Divide,
                _ => break,
            };

            self.advance();
            let right = self.parse_unary()?;
            height = height.max(self.height) + 1;
            self.set_height(height)?;

            left = Expression::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses unary sign expressions. Only reachable where an operand is
    /// expected, so "2+-3" and "(-1)" are accepted while "2*/3" is not.
    fn parse_unary(&mut self) -> ParseResult<Expression> {
        let op = match self.current_token {
            Token::Minus => UnaryOperator::Negate,
            Token::Plus => UnaryOperator::Plus,
            _ => return self.parse_primary(),
        };

        self.enter()?;
        self.advance();
        let operand = self.parse_unary()?;
        self.leave();
        self.set_height(self.height + 1)?;

        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    /// Parses primary expressions (number literals and parenthesized groups).
    fn parse_primary(&mut self) -> ParseResult<Expression> {
        match self.current_token {
            Token::Number(n) => {
                self.advance();
                self.height = 1;
                Ok(Expression::Literal(n))
            }

            Token::LParen => {
                self.enter()?;
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(Token::RParen)?;
                self.leave();
                Ok(expr)
            }

            Token::EOF => Err(ParseError::new("Unexpected end of expression")),

            Token::Illegal(ch) => Err(ParseError::new(format!("Illegal character: '{}'", ch))),

            ref token => Err(ParseError::new(format!("Unexpected token: {:?}", token))),
        }
    }
}

/// Convenience function to parse an expression string.
pub fn parse(input: &str) -> ParseResult<Expression> {
    let mut parser = Parser::new(input);
    parser.parse()
}
