//! Lexer for XL.
//!
//! Turns a character source into position-tagged tokens whose symbols are
//! interned in an [`xl_ir::SymbolTable`]. The entry point is [`Lexer`]; pull
//! tokens with [`Lexer::next_token`] until the end-of-input token, or use it
//! as an iterator.
//!
//! ```text
//! let mut lexer = Lexer::open("prog.x", LexerConfig::default())?;
//! for token in &mut lexer {
//!     println!("{token:?}");
//! }
//! ```
//!
//! Lexical errors are fatal to the session. They are logged through
//! `tracing` when found, kept in [`Lexer::errors`], and the token stream
//! simply ends.

mod config;
mod lex_error;
mod lexer;
mod literal;
mod lookahead;
mod operators;

pub use config::{DanglingSeparator, LexerConfig};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{Lexer, Termination};

use xl_ir::{SharedSymbolTable, Token};
use xl_lexer_core::SourceReader;

/// Everything one session over an in-memory string produced.
#[derive(Debug)]
pub struct LexOutput {
    /// Tokens before the end-of-input token.
    pub tokens: Vec<Token>,
    /// Lexical errors and source faults (at most one).
    pub errors: Vec<LexError>,
    /// How the session ended.
    pub termination: Termination,
    /// The table the tokens' symbols live in.
    pub table: SharedSymbolTable,
}

/// Lex `source` to completion with a fresh symbol table.
pub fn lex(source: &str, config: LexerConfig) -> LexOutput {
    lex_with_table(source, SharedSymbolTable::new(), config)
}

/// Lex `source` to completion, interning into `table`.
pub fn lex_with_table(source: &str, table: SharedSymbolTable, config: LexerConfig) -> LexOutput {
    let mut lexer = Lexer::with_table(SourceReader::from_text(source), table, config);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    LexOutput {
        tokens,
        errors: lexer.errors().to_vec(),
        // The iterator only stops once the session has terminated.
        termination: lexer.termination().unwrap_or(Termination::Exhausted),
        table: lexer.table().clone(),
    }
}
