//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates calculator display text to a formatted result.
//! CONTEXT: Runs the full pipeline on the finalized buffer text: prepare
//! (glyph normalization + implicit multiplication), parse, walk the AST with
//! f64 arithmetic, then format. Every failure comes back as a typed result;
//! nothing here panics on user input.
//!
//! SUPPORTED FEATURES:
//! - Binary operations: +, -, *, /
//! - Unary operations: - (negation), + (identity)
//! - Division by an exact zero (either sign) is reported, never yields inf/NaN

use crate::error::EvalError;
use crate::number_format::format_result;
use parser::{BinaryOperator, Expression, UnaryOperator};

/// The outcome of evaluating buffer text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationResult {
    /// Formatted result, ready to become the new buffer text.
    Number(String),
    SyntaxError,
    DivisionByZero,
}

impl EvaluationResult {
    /// The fixed message shown for a failure, or None for a number.
    pub fn error_message(&self) -> Option<String> {
        match self {
            EvaluationResult::Number(_) => None,
            EvaluationResult::SyntaxError => Some(EvalError::Syntax.to_string()),
            EvaluationResult::DivisionByZero => Some(EvalError::DivisionByZero.to_string()),
        }
    }
}

impl From<Result<f64, EvalError>> for EvaluationResult {
    fn from(result: Result<f64, EvalError>) -> Self {
        match result {
            Ok(n) => EvaluationResult::Number(format_result(n)),
            Err(EvalError::Syntax) => EvaluationResult::SyntaxError,
            Err(EvalError::DivisionByZero) => EvaluationResult::DivisionByZero,
        }
    }
}

/// Evaluates raw buffer text.
pub fn evaluate(text: &str) -> EvaluationResult {
    let result = evaluate_text(text);
    log::debug!(target: "EVAL", "text={:?} --> {:?}", text, result);
    result.into()
}

/// Prepares, parses and evaluates `text` to a finite number.
pub fn evaluate_text(text: &str) -> Result<f64, EvalError> {
    let prepared = parser::prepare(text);
    let expr = parser::parse(&prepared).map_err(|e| {
        log::trace!(target: "EVAL", "prepared={:?} {}", prepared, e);
        EvalError::from(e)
    })?;

    let value = evaluate_expression(&expr)?;

    // inf cannot be typed back in, so it is not a usable result
    if !value.is_finite() {
        return Err(EvalError::Syntax);
    }

    Ok(value)
}

/// Walks the AST. Left operands are evaluated before right operands.
pub fn evaluate_expression(expr: &Expression) -> Result<f64, EvalError> {
    match expr {
        Expression::Literal(n) => Ok(*n),

        Expression::UnaryOp { op, operand } => {
            let value = evaluate_expression(operand)?;
            Ok(match op {
                UnaryOperator::Negate => -value,
                UnaryOperator::Plus => value,
            })
        }

        Expression::BinaryOp { left, op, right } => {
            let left_val = evaluate_expression(left)?;
            let right_val = evaluate_expression(right)?;
            eval_binary_op(left_val, *op, right_val)
        }
    }
}

fn eval_binary_op(left: f64, op: BinaryOperator, right: f64) -> Result<f64, EvalError> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Subtract => Ok(left - right),
        BinaryOperator::Multiply => Ok(left * right),
        BinaryOperator::Divide => {
            if right == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(left / right)
            }
        }
    }
}
