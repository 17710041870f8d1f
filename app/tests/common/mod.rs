//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for calculator host integration tests.

#![allow(dead_code)]

use app_lib::{CalculatorConfig, DisplayConfig, Session};

/// Test harness owning one calculator session.
pub struct TestHarness {
    pub session: Session,
}

impl TestHarness {
    /// Create a new test harness with the default display.
    pub fn new() -> Self {
        TestHarness {
            session: Session::default(),
        }
    }

    /// Create a harness whose display fits `columns` characters.
    pub fn with_columns(columns: usize) -> Self {
        let config = CalculatorConfig {
            display: DisplayConfig { columns },
            ..CalculatorConfig::default()
        };
        TestHarness {
            session: Session::new(config),
        }
    }

    /// Click a sequence of buttons; returns the final display text.
    pub fn click(&self, labels: &[&str]) -> String {
        let mut shown = self.session.display_text();
        for label in labels {
            shown = self.session.press_button(label);
        }
        shown
    }

    /// Type keys; returns the final display text.
    pub fn type_keys(&self, keys: &str) -> String {
        self.session.type_keys(keys)
    }

    pub fn display(&self) -> String {
        self.session.display_text()
    }

    pub fn assert_display(&self, expected: &str) {
        assert_eq!(self.display(), expected, "display mismatch");
    }
}
