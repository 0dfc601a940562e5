//! Lexer error types.
//!
//! Every error is fatal to its session: the lexer records it, logs it, and
//! then behaves as if the input had ended. Errors are plain data so callers
//! can inspect them after the token stream stops.

use std::fmt;

use xl_lexer_core::SourceError;

/// A lexical error with its location.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}: {text} (line {line}, column {column})")]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// Offending text, or the fault description for source faults.
    pub text: String,
    /// 1-based line of the offending text.
    pub line: u32,
    /// 1-based column of the offending text's first character.
    pub column: u32,
}

/// What kind of lexer error occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// A one- or two-character candidate matched no operator or separator.
    IllegalCharacter,
    /// A digit-led literal matched neither the decimal nor a date shape.
    IllegalLiteral,
    /// The source failed to read (I/O fault, invalid UTF-8).
    SourceFault,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexErrorKind::IllegalCharacter => "illegal character",
            LexErrorKind::IllegalLiteral => "illegal literal",
            LexErrorKind::SourceFault => "source read failed",
        })
    }
}

impl LexError {
    #[cold]
    pub fn illegal_character(text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: LexErrorKind::IllegalCharacter,
            text: text.into(),
            line,
            column,
        }
    }

    #[cold]
    pub fn illegal_literal(text: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind: LexErrorKind::IllegalLiteral,
            text: text.into(),
            line,
            column,
        }
    }

    #[cold]
    pub fn source_fault(err: &SourceError, line: u32, column: u32) -> Self {
        Self {
            kind: LexErrorKind::SourceFault,
            text: err.to_string(),
            line,
            column,
        }
    }

    /// One-line banner in the classic driver format:
    /// `******** illegal character: #`.
    pub fn banner(&self) -> String {
        format!("******** {}: {}", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests;
