//! FILENAME: core/engine/src/input_buffer.rs
//! PURPOSE: The text the user is composing and the edit state machine over it.
//! CONTEXT: Holds either editable text or a fixed error message. While in the
//! error state, the next command of any kind first wipes the message, so a
//! user never edits (or evaluates) the words "Syntax Error".

use crate::command::EditCommand;
use crate::evaluator::{evaluate, EvaluationResult};

/// Whether the buffer holds user text or an error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferState {
    #[default]
    Editing,
    Error,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    state: BufferState,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> BufferState {
        self.state
    }

    pub fn is_error(&self) -> bool {
        self.state == BufferState::Error
    }

    /// Applies one command. `overflows` reports whether a candidate text is
    /// too wide for the display; appends that overflow are rolled back.
    pub fn apply<F>(&mut self, command: EditCommand, overflows: F) -> &str
    where
        F: Fn(&str) -> bool,
    {
        if self.is_error() {
            self.reset();
        }

        match command {
            EditCommand::Clear => self.reset(),
            EditCommand::Backspace => {
                self.text.pop();
            }
            EditCommand::Append(ch) => self.append(ch, overflows),
            EditCommand::Evaluate => self.evaluate(),
        }

        &self.text
    }

    fn reset(&mut self) {
        self.text.clear();
        self.state = BufferState::Editing;
    }

    fn append<F>(&mut self, ch: char, overflows: F)
    where
        F: Fn(&str) -> bool,
    {
        self.text.push(ch);
        if overflows(&self.text) {
            self.text.pop();
            log::trace!(target: "BUFFER", "rejected {:?}: display full", ch);
        }
    }

    fn evaluate(&mut self) {
        if self.text.is_empty() {
            return;
        }

        match evaluate(&self.text) {
            EvaluationResult::Number(s) => {
                self.text = s;
                self.state = BufferState::Editing;
            }
            failure => {
                self.text = failure.error_message().unwrap_or_default();
                self.state = BufferState::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbounded(_: &str) -> bool {
        false
    }

    fn type_text(buffer: &mut InputBuffer, text: &str) {
        for ch in text.chars() {
            buffer.apply(EditCommand::Append(ch), unbounded);
        }
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer = InputBuffer::new();
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.state(), BufferState::Editing);
    }

    #[test]
    fn test_append_and_backspace() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "12+3");
        assert_eq!(buffer.text(), "12+3");

        assert_eq!(buffer.apply(EditCommand::Backspace, unbounded), "12+");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut buffer = InputBuffer::new();
        buffer.apply(EditCommand::Backspace, unbounded);
        assert_eq!(buffer.text(), "");
        assert!(!buffer.is_error());
    }

    #[test]
    fn test_clear() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "99");
        buffer.apply(EditCommand::Clear, unbounded);
        assert_eq!(buffer.text(), "");
    }

    #[test]
    fn test_evaluate_replaces_text_with_result() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "6(2)");
        assert_eq!(buffer.apply(EditCommand::Evaluate, unbounded), "12.0");
        assert_eq!(buffer.state(), BufferState::Editing);
    }

    #[test]
    fn test_evaluate_empty_is_noop() {
        let mut buffer = InputBuffer::new();
        buffer.apply(EditCommand::Evaluate, unbounded);
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.state(), BufferState::Editing);
    }

    #[test]
    fn test_result_can_be_extended() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "2+2");
        buffer.apply(EditCommand::Evaluate, unbounded);
        type_text(&mut buffer, "*2");
        assert_eq!(buffer.apply(EditCommand::Evaluate, unbounded), "8.0");
    }

    #[test]
    fn test_errors_set_message_and_state() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "2+");
        buffer.apply(EditCommand::Evaluate, unbounded);
        assert_eq!(buffer.text(), "Syntax Error");
        assert!(buffer.is_error());

        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "5/0");
        buffer.apply(EditCommand::Evaluate, unbounded);
        assert_eq!(buffer.text(), "Division by Zero");
        assert!(buffer.is_error());
    }

    #[test]
    fn test_append_after_error_starts_fresh() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "(2+3");
        buffer.apply(EditCommand::Evaluate, unbounded);

        assert_eq!(buffer.apply(EditCommand::Append('5'), unbounded), "5");
        assert_eq!(buffer.state(), BufferState::Editing);
    }

    #[test]
    fn test_backspace_after_error_clears_message() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "0/0");
        buffer.apply(EditCommand::Evaluate, unbounded);

        assert_eq!(buffer.apply(EditCommand::Backspace, unbounded), "");
        assert!(!buffer.is_error());
    }

    #[test]
    fn test_evaluate_after_error_only_resets() {
        let mut buffer = InputBuffer::new();
        type_text(&mut buffer, "2+");
        buffer.apply(EditCommand::Evaluate, unbounded);

        assert_eq!(buffer.apply(EditCommand::Evaluate, unbounded), "");
        assert!(!buffer.is_error());
    }

    #[test]
    fn test_overflowing_append_is_rolled_back() {
        let mut buffer = InputBuffer::new();
        let max_three = |candidate: &str| candidate.chars().count() > 3;

        for ch in "12345".chars() {
            buffer.apply(EditCommand::Append(ch), max_three);
        }
        assert_eq!(buffer.text(), "123");

        buffer.apply(EditCommand::Backspace, max_three);
        buffer.apply(EditCommand::Append('9'), max_three);
        assert_eq!(buffer.text(), "129");
    }

    #[test]
    fn test_rejection_is_per_character() {
        // wide glyph does not fit, narrow digit still does
        let mut buffer = InputBuffer::new();
        let width = |candidate: &str| -> usize {
            candidate.chars().map(|c| if c == '×' { 2 } else { 1 }).sum()
        };
        let overflows = |candidate: &str| width(candidate) > 3;

        type_text(&mut buffer, "12");
        buffer.apply(EditCommand::Append('×'), overflows);
        assert_eq!(buffer.text(), "12");
        buffer.apply(EditCommand::Append('3'), overflows);
        assert_eq!(buffer.text(), "123");
    }
}
