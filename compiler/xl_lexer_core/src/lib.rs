//! Character source for the XL lexer.
//!
//! This crate owns the lowest layer of lexing: pulling characters one at a
//! time out of a file or an in-memory string while tracking the 1-based line
//! and column of the most recently read character. It knows nothing about
//! tokens, symbols, or the XL grammar beyond character classification.
//!
//! # Reading protocol
//!
//! [`CharSource::read`] separates the three outcomes of a read:
//! - `Ok(Some(c))`: the next character,
//! - `Ok(None)`: end of input (an expected outcome, not an error),
//! - `Err(SourceError)`: a genuine I/O fault.

mod char_class;
mod source_reader;

pub use char_class::{is_digit, is_ident_continue, is_ident_start, is_whitespace};
pub use source_reader::{CharSource, FileSource, SourceError, SourceReader, TextSource};
