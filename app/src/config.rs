//! FILENAME: app/src/config.rs
// PURPOSE: Host configuration (display size, logging), loaded from JSON.
// CONTEXT: The engine takes no configuration; only the width check derived
// from `display.columns` reaches it.

use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Columns the display fits with the default font.
pub const DEFAULT_COLUMNS: usize = 18;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Terminal columns available for the buffer text.
    pub columns: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            columns: DEFAULT_COLUMNS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file; stderr when absent.
    pub file: Option<PathBuf>,
    pub level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

impl CalculatorConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
