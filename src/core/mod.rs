pub mod dictionary;
pub mod run;
pub mod codec;

/// prefix of every code; never a word character, so encoded words cannot be re-read as words
pub const ESCAPE_MARKER: char = '_';

/// every code is the escape marker followed by one ASCII alphanumeric symbol
pub const CODE_LEN: usize = 2;

pub fn is_well_formed_code(code: &str) -> bool {
    let mut chars = code.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(ESCAPE_MARKER), Some(symbol), None) => symbol.is_ascii_alphanumeric(),
        _ => false,
    }
}
