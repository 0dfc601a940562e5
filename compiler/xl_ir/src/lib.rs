//! XL IR - symbols and tokens
//!
//! This crate contains the data shared between the lexer and the stages that
//! consume its output:
//! - [`TokenKind`], the closed set of token classifications
//! - [`Symbol`], the canonical (text, kind) pair for one lexeme spelling
//! - [`SymbolTable`], the interning table guaranteeing one `Symbol` per text
//! - [`Token`], a position-tagged reference to a `Symbol`
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: every lexeme text maps to exactly one `Symbol`
//!   per table, so later stages compare symbols by identity.
//! - **Seed Before Scanning**: reserved words and operator spellings are
//!   inserted by the table constructor, never lazily.

mod symbol;
mod symbol_table;
mod token;

pub use symbol::Symbol;
pub use symbol_table::{SharedSymbolTable, SymbolTable};
pub use token::{Token, TokenKind};
