//! Character classification used by the scanner's dispatch.
//!
//! Identifiers follow the usual "letter or `_`/`$`, then letters, digits,
//! `_`/`$`" shape over Unicode letters. Digits are ASCII only: literal text
//! is handed unconverted to later stages, which only understand `0-9`.

/// Whitespace separating lexemes (space, tab, newline, carriage return and
/// the other Unicode `White_Space` characters).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Characters that may start an identifier or reserved word.
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Characters that may continue an identifier after its first character.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}
