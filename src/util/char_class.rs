use crate::core::ESCAPE_MARKER;

/// ASCII letters only; other alphabets are separators for this scheme.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[inline(always)]
pub fn is_digit_char(c: char) -> bool {
    c.is_ascii_digit()
}

#[inline(always)]
pub fn is_escape_marker(c: char) -> bool {
    c == ESCAPE_MARKER
}

/// characters the decoder gathers into one buffer before looking it up as a code
#[inline(always)]
pub fn is_code_char(c: char) -> bool {
    is_word_char(c) || is_digit_char(c) || is_escape_marker(c)
}
