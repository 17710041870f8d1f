//! FILENAME: app/src/lib.rs
// PURPOSE: Library entry point for the terminal calculator host.
// CONTEXT: Thin collaborator around the engine: loads config, installs
// logging, maps keys to edit commands, and prints the display text.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod keymap;
pub mod logging;
pub mod session;
pub mod width;

pub use config::{CalculatorConfig, DisplayConfig, LoggingConfig};
pub use error::AppError;
pub use logging::{init_log_file, next_seq, write_log};
pub use session::Session;

/// Replays `line` as typed keys followed by Enter; returns the display text.
pub fn process_line(session: &Session, line: &str) -> String {
    session.type_keys(line);
    session.press_key('\r')
}

// ============================================================================
// APP ENTRY
// ============================================================================

/// Reads key lines from stdin until EOF. The optional first argument is a
/// JSON config path.
pub fn run() -> Result<(), AppError> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = CalculatorConfig::load_or_default(config_path.as_deref())?;

    logging::init(&config.logging)?;
    log_info!(
        "SYS",
        "calculator starting, columns={} config={:?}",
        config.display.columns,
        config_path
    );

    let session = Session::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        let shown = process_line(&session, &line);
        writeln!(stdout, "{}", shown)?;
        stdout.flush()?;
    }

    log_info!("SYS", "input closed, exiting");
    Ok(())
}
