//! `xl lex`: dump the token stream of a file, then list the file.
//!
//! ```text
//! program     left: 1        right: 7        line: 1        Program
//! {           left: 9        right: 9        line: 1        LeftBrace
//! ...
//!   1: program {
//!   2:   int i
//! ```

use std::io::{self, Write};

use xl_ir::Token;
use xl_lexer::{DanglingSeparator, LexError, Lexer, LexerConfig, Termination};

use super::read_source;
use crate::CliError;

/// Options for `xl lex`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexOptions {
    pub config: LexerConfig,
    /// Print the numbered source listing after the tokens.
    pub listing: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            config: LexerConfig::default(),
            listing: true,
        }
    }
}

/// Parsed `xl lex` command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexArgs {
    pub path: String,
    pub options: LexOptions,
}

/// Parse the arguments following `xl lex`.
///
/// Flags may come before or after the path. Only the first positional
/// argument is used.
pub fn parse_lex_args(args: &[String]) -> Result<LexArgs, CliError> {
    let mut options = LexOptions::default();
    let mut path = None;

    for arg in args {
        match arg.as_str() {
            "--reject-dangling" => options.config.dangling_separator = DanglingSeparator::Reject,
            "--uniform-dates" => options.config.uniform_date_separators = true,
            "--no-listing" => options.listing = false,
            flag if flag.starts_with('-') => {
                return Err(CliError::UnknownOption(flag.to_owned()));
            }
            file if path.is_none() => path = Some(file.to_owned()),
            _ => {}
        }
    }

    let path = path.ok_or(CliError::MissingPath)?;
    Ok(LexArgs { path, options })
}

/// What a `lex` run saw.
#[derive(Debug)]
pub struct LexSummary {
    /// Tokens dumped, not counting end of input.
    pub tokens: usize,
    pub termination: Termination,
    pub errors: Vec<LexError>,
}

impl LexSummary {
    /// Whether the file lexed cleanly to the end.
    pub fn is_clean(&self) -> bool {
        self.termination == Termination::Exhausted
    }
}

/// One line of the token dump.
pub fn dump_line(token: &Token) -> String {
    format!(
        "{:<11} left: {:<8} right: {:<8} line: {:<8} {:?}",
        token.text(),
        token.left(),
        token.right(),
        token.line(),
        token.kind()
    )
}

/// Numbered listing of `text`, one `NNN: line` per source line.
pub fn write_listing(text: &str, out: &mut impl Write) -> io::Result<()> {
    for (index, line) in text.lines().enumerate() {
        writeln!(out, "{:>3}: {}", index + 1, line)?;
    }
    Ok(())
}

/// Lex the file at `path`, writing the dump (and listing) to `out`.
///
/// A lexical error is not a command failure: its banner is written where
/// the token stream stopped and the listing still follows. Only failing to
/// open the file or to write output is an `Err`.
pub fn lex_file(
    path: &str,
    options: &LexOptions,
    out: &mut impl Write,
) -> Result<LexSummary, CliError> {
    let mut lexer =
        Lexer::open(path, options.config).map_err(|e| CliError::from_source(path, e))?;
    tracing::debug!(path, ?options, "lexing");

    let mut tokens = 0;
    for token in &mut lexer {
        writeln!(out, "{}", dump_line(&token))?;
        tokens += 1;
    }
    for error in lexer.errors() {
        writeln!(out, "{}", error.banner())?;
    }

    if options.listing {
        let text = read_source(path)?;
        write_listing(&text, out)?;
    }
    out.flush()?;

    Ok(LexSummary {
        tokens,
        termination: lexer.termination().unwrap_or(Termination::Exhausted),
        errors: lexer.errors().to_vec(),
    })
}
