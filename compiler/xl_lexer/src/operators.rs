//! Fixed operator and separator spellings.
//!
//! Operators are at most two characters long. The lookup is bucketed by
//! length: one-character candidates match on the character, two-character
//! candidates on the pair. Anything else is [`TokenKind::BogusToken`].
//!
//! This is a pure lookup: it never touches the symbol table, so a failed
//! two-character lookup (the common case, e.g. `(x`) leaves no trace.

use xl_ir::TokenKind;

/// Classify an operator candidate.
///
/// Returns [`TokenKind::BogusToken`] if `text` is not a recognized spelling.
#[inline]
pub(crate) fn classify(text: &str) -> TokenKind {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, None) => single(c),
        (Some(a), Some(b), None) => double(a, b),
        _ => TokenKind::BogusToken,
    }
}

fn single(c: char) -> TokenKind {
    match c {
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        '=' => TokenKind::Assign,
        '!' => TokenKind::Not,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Multiply,
        '/' => TokenKind::Divide,
        '|' => TokenKind::Or,
        '&' => TokenKind::And,
        _ => TokenKind::BogusToken,
    }
}

fn double(a: char, b: char) -> TokenKind {
    match (a, b) {
        ('=', '=') => TokenKind::Equal,
        ('!', '=') => TokenKind::NotEqual,
        ('<', '=') => TokenKind::LessEqual,
        ('>', '=') => TokenKind::GreaterEqual,
        ('/', '/') => TokenKind::Comment,
        _ => TokenKind::BogusToken,
    }
}

#[cfg(test)]
mod tests;
