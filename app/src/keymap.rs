//! FILENAME: app/src/keymap.rs
// PURPOSE: Maps button labels and keyboard keys to engine edit commands.
// CONTEXT: Buttons insert the '×' glyph for multiplication, the keyboard
// inserts '*'. Keyboard keys are upper-cased and matched against the button
// labels, so 'c' clears; the lowercase 'x' label is button-only.

use engine::EditCommand;

/// Button labels, row by row.
pub const LAYOUT: [[&str; 4]; 5] = [
    ["C", "<-", "(", ")"],
    ["7", "8", "9", "/"],
    ["4", "5", "6", "x"],
    ["1", "2", "3", "-"],
    [".", "0", "=", "+"],
];

/// What the multiplication button inserts into the display.
pub const MULTIPLICATION_GLYPH: char = '×';

const BACKSPACE: char = '\u{8}';

pub fn is_button_label(label: &str) -> bool {
    LAYOUT.iter().flatten().any(|l| *l == label)
}

/// Command for a clicked button, or None for an unknown label.
pub fn command_for_button(label: &str) -> Option<EditCommand> {
    if !is_button_label(label) {
        return None;
    }

    let command = match label {
        "C" => EditCommand::Clear,
        "<-" => EditCommand::Backspace,
        "=" => EditCommand::Evaluate,
        "x" => EditCommand::Append(MULTIPLICATION_GLYPH),
        _ => EditCommand::Append(label.chars().next()?),
    };
    Some(command)
}

/// Command for a typed key, or None for keys the calculator ignores.
pub fn command_for_key(key: char) -> Option<EditCommand> {
    match key {
        '*' => Some(EditCommand::Append('*')),
        BACKSPACE => Some(EditCommand::Backspace),
        '\r' | '\n' => Some(EditCommand::Evaluate),
        _ => {
            let upper = key.to_ascii_uppercase().to_string();
            command_for_button(&upper)
        }
    }
}
