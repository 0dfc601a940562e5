//! Command handlers for the `xl` driver.
//!
//! Each submodule implements one CLI command. Shared helpers such as
//! [`read_source`] live here in the module root.

mod lex;

pub use lex::{dump_line, lex_file, parse_lex_args, write_listing, LexArgs, LexOptions, LexSummary};

use crate::CliError;

/// Read a source file for display.
///
/// Invalid UTF-8 is replaced rather than rejected: the listing is shown even
/// for files the lexer stopped on with a source fault.
pub fn read_source(path: &str) -> Result<String, CliError> {
    let bytes = std::fs::read(path).map_err(|e| CliError::from_io(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
