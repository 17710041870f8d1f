//! FILENAME: core/engine/src/calculator.rs
//! PURPOSE: The single entry point a UI collaborator talks to.
//! CONTEXT: Owns the session's one InputBuffer together with the display
//! width check supplied by the UI. Not shareable across threads without a
//! lock; each command runs to completion before the next is accepted.

use crate::command::EditCommand;
use crate::input_buffer::{BufferState, InputBuffer};

/// Width check supplied by the UI: true when the candidate text would not
/// fit on the display.
pub type OverflowCheck = Box<dyn Fn(&str) -> bool + Send>;

pub struct Calculator {
    buffer: InputBuffer,
    overflows: OverflowCheck,
}

impl Calculator {
    pub fn new(overflows: impl Fn(&str) -> bool + Send + 'static) -> Self {
        Calculator {
            buffer: InputBuffer::new(),
            overflows: Box::new(overflows),
        }
    }

    /// A calculator whose display never fills up.
    pub fn unbounded() -> Self {
        Self::new(|_| false)
    }

    /// Applies one command and returns the text to display.
    pub fn apply_command(&mut self, command: EditCommand) -> &str {
        let overflows = &self.overflows;
        self.buffer.apply(command, |candidate| overflows(candidate))
    }

    pub fn current_text(&self) -> &str {
        self.buffer.text()
    }

    pub fn is_error(&self) -> bool {
        self.buffer.state() == BufferState::Error
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
