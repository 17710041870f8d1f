//! FILENAME: core/engine/src/error.rs

use thiserror::Error;

/// Failures an evaluation can end in. The `Display` text is exactly what
/// the calculator shows in place of a result.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("Syntax Error")]
    Syntax,

    #[error("Division by Zero")]
    DivisionByZero,
}

impl From<parser::ParseError> for EvalError {
    fn from(_: parser::ParseError) -> Self {
        EvalError::Syntax
    }
}
