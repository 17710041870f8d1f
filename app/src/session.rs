//! FILENAME: app/src/session.rs
// PURPOSE: One calculator session: the engine behind a single writer lock.
// CONTEXT: All UI input funnels through here so the buffer is never mutated
// concurrently, even if key and button events arrive on different threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use engine::{Calculator, EditCommand};

use crate::config::CalculatorConfig;
use crate::keymap::{command_for_button, command_for_key};
use crate::log_debug;
use crate::width::column_limit;

pub struct Session {
    calculator: Mutex<Calculator>,
}

impl Session {
    pub fn new(config: CalculatorConfig) -> Self {
        let calculator = Calculator::new(column_limit(config.display.columns));
        Session {
            calculator: Mutex::new(calculator),
        }
    }

    fn calculator(&self) -> MutexGuard<'_, Calculator> {
        self.calculator.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies a command and returns the new display text.
    pub fn apply(&self, command: EditCommand) -> String {
        let mut calculator = self.calculator();
        let shown = calculator.apply_command(command).to_string();
        log_debug!("CALC", "{:?} --> {:?}", command, shown);
        shown
    }

    /// Handles a button click. Unknown labels leave the display untouched.
    pub fn press_button(&self, label: &str) -> String {
        match command_for_button(label) {
            Some(command) => self.apply(command),
            None => self.display_text(),
        }
    }

    /// Handles a key press. Ignored keys leave the display untouched.
    pub fn press_key(&self, key: char) -> String {
        match command_for_key(key) {
            Some(command) => self.apply(command),
            None => self.display_text(),
        }
    }

    /// Presses each key of `keys` in order and returns the final display text.
    pub fn type_keys(&self, keys: &str) -> String {
        for key in keys.chars() {
            self.press_key(key);
        }
        self.display_text()
    }

    pub fn display_text(&self) -> String {
        self.calculator().current_text().to_string()
    }

    pub fn is_error(&self) -> bool {
        self.calculator().is_error()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}
