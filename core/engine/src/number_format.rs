//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Renders an evaluated number as display text.
//! CONTEXT: Results are written back into the input buffer, so the rendering
//! must itself be valid input: a plain decimal with at least one fractional
//! digit ("4.0", "0.25", "-3.0").

/// Digits written after the decimal point before trimming.
pub const RESULT_PRECISION: usize = 20;

/// Format a result with fixed precision, then drop trailing zeros while
/// keeping one digit after the decimal point.
pub fn format_result(value: f64) -> String {
    let fixed = format!("{:.prec$}", value, prec = RESULT_PRECISION);
    let trimmed = trim_trailing_zeros(&fixed);

    // -0 and negatives that round to zero
    if trimmed == "-0.0" {
        return "0.0".to_string();
    }
    trimmed
}

/// Strip trailing '0's from the fractional part, stopping at the last one
/// if nothing else would remain after the '.'.
fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }

    let mut trimmed = s.trim_end_matches('0').to_string();
    if trimmed.ends_with('.') {
        trimmed.push('0');
    }
    trimmed
}
