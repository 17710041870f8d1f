//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports public types and modules for use by UI hosts.

pub mod calculator;
pub mod command;
pub mod error;
pub mod evaluator;
pub mod input_buffer;
pub mod number_format;

// Re-export commonly used types at the crate root
pub use calculator::{Calculator, OverflowCheck};
pub use command::EditCommand;
pub use error::EvalError;
pub use evaluator::{evaluate, evaluate_expression, evaluate_text, EvaluationResult};
pub use input_buffer::{BufferState, InputBuffer};
pub use number_format::{format_result, RESULT_PRECISION};
