//! FILENAME: core/engine/src/command.rs
//! PURPOSE: The edit commands a UI layer feeds into the input buffer.

use serde::{Deserialize, Serialize};

/// One atomic user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditCommand {
    Clear,
    Backspace,
    Evaluate,
    /// Digits, '.', '(', ')', '+', '-', '/', and either '×' or '*'.
    Append(char),
}
