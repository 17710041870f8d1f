//! FILENAME: core/parser/src/prepare.rs
//! PURPOSE: Rewrites raw display text into the canonical form the lexer reads.
//! CONTEXT: Runs before lexing. Buttons insert the '×' glyph while the
//! keyboard inserts '*'; both reach the lexer as '*'. A digit written directly
//! against an opening parenthesis gets an explicit '*' so that "6(2)" parses
//! as "6*(2)".

/// Glyphs that display as multiplication but lex as '*'.
pub const MULTIPLICATION_GLYPHS: [char; 2] = ['×', 'x'];

/// Replaces every multiplication glyph with the canonical '*' operator.
pub fn normalize_symbols(text: &str) -> String {
    text.chars()
        .map(|ch| if MULTIPLICATION_GLYPHS.contains(&ch) { '*' } else { ch })
        .collect()
}

/// Inserts '*' between a decimal digit and an immediately following '('.
///
/// Single left-to-right pass. After an insertion the scan resumes past the
/// new '*' and the '(' it precedes. Only digit-then-paren triggers; ")(" and
/// ")2" are left for the parser to reject.
pub fn insert_implicit_multiplication(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + 4);
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        result.push(ch);

        if ch.is_ascii_digit() && chars.get(i + 1) == Some(&'(') {
            result.push('*');
            result.push('(');
            i += 2;
            continue;
        }

        i += 1;
    }

    result
}

/// Full preparation pass: symbol normalization, then implicit multiplication.
pub fn prepare(text: &str) -> String {
    insert_implicit_multiplication(&normalize_symbols(text))
}
