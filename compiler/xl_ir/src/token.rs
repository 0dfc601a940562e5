//! Token types for the XL lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::Symbol;

/// A position-tagged reference to a [`Symbol`].
///
/// Positions are 1-based: `left` and `right` are the inclusive columns of
/// the lexeme's first and last characters, `line` is where it starts.
/// Tokens never own text; they share the symbol's.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    left: u32,
    right: u32,
    line: u32,
    symbol: Symbol,
}

impl Token {
    #[inline]
    pub fn new(left: u32, right: u32, line: u32, symbol: Symbol) -> Self {
        Token {
            left,
            right,
            line,
            symbol,
        }
    }

    /// Column of the first character.
    #[inline]
    pub fn left(&self) -> u32 {
        self.left
    }

    /// Column of the last character.
    #[inline]
    pub fn right(&self) -> u32 {
        self.right
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.symbol.kind()
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.symbol.text()
    }

    /// Returns `true` for the terminal end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind() == TokenKind::Eof
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} @ {}:{}-{}",
            self.kind(),
            self.text(),
            self.line,
            self.left,
            self.right
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests;
