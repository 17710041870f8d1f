//! FILENAME: app/src/width.rs
// PURPOSE: Display width check handed to the engine.

use unicode_width::UnicodeWidthStr;

/// Terminal columns `text` occupies.
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// A check that reports overflow once text needs more than `columns`.
pub fn column_limit(columns: usize) -> impl Fn(&str) -> bool + Send + 'static {
    move |candidate: &str| display_width(candidate) > columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_limit() {
        let overflows = column_limit(4);
        assert!(!overflows("1234"));
        assert!(overflows("12345"));
        assert!(!overflows(""));
    }

    #[test]
    fn test_multiplication_glyph_is_one_column() {
        assert_eq!(display_width("2×3"), 3);
    }
}
