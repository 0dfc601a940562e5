//! The scanning automaton.
//!
//! # States
//!
//! ```text
//!   Scanning ──(source exhausted | source fault | lexical error)──▶ Eof
//! ```
//!
//! `Eof` is absorbing: once [`Lexer::next_token`] has returned the end-of-input
//! token it keeps returning it, and the source has been closed.
//!
//! # One scan step
//!
//! 1. Skip whitespace.
//! 2. Record the start column and line of the lookahead character.
//! 3. Dispatch on it: identifier start, digit, or anything else (operator).
//!
//! Comments are operators that produce no token; skipping one, like failing
//! on an illegal character, just goes around the loop in `next_token`.

use std::iter::FusedIterator;
use std::path::Path;

use xl_ir::{SharedSymbolTable, Token, TokenKind};
use xl_lexer_core::{
    is_digit, is_ident_continue, is_ident_start, is_whitespace, CharSource, FileSource,
    SourceError, SourceReader, TextSource,
};

use crate::literal::{self, LiteralClass};
use crate::lookahead::{Located, Lookahead};
use crate::{operators, LexError, LexerConfig};

/// How a lexing session reached `Eof`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Termination {
    /// The source ran out of characters.
    Exhausted,
    /// The source failed to read; see [`Lexer::errors`].
    SourceFault,
    /// An illegal character stopped the session.
    IllegalCharacter,
    /// An illegal literal stopped the session.
    IllegalLiteral,
}

/// Result of one pass through the scan loop.
enum Step {
    Token(Token),
    /// A comment was skipped; scan again.
    Skip,
    /// The session is over.
    Stop(Termination),
}

/// Pull-based lexer over a [`CharSource`].
pub struct Lexer<S: CharSource> {
    input: Lookahead<S>,
    table: SharedSymbolTable,
    config: LexerConfig,
    termination: Option<Termination>,
    errors: Vec<LexError>,
}

impl Lexer<FileSource> {
    /// Open `path` and create a lexer over it with a fresh symbol table.
    pub fn open(path: impl AsRef<Path>, config: LexerConfig) -> Result<Self, SourceError> {
        Ok(Self::new(SourceReader::open(path)?, config))
    }
}

impl Lexer<TextSource> {
    /// Create a lexer over an in-memory string with a fresh symbol table.
    pub fn from_text(text: impl Into<String>, config: LexerConfig) -> Self {
        Self::new(SourceReader::from_text(text), config)
    }
}

impl<S: CharSource> Lexer<S> {
    /// Create a lexer with its own, freshly seeded symbol table.
    pub fn new(source: S, config: LexerConfig) -> Self {
        Self::with_table(source, SharedSymbolTable::new(), config)
    }

    /// Create a lexer that interns into `table`.
    ///
    /// The table's constructor has already seeded the reserved words, so
    /// they take precedence over identifiers from the first token on.
    pub fn with_table(source: S, table: SharedSymbolTable, config: LexerConfig) -> Self {
        Self {
            input: Lookahead::new(source),
            table,
            config,
            termination: None,
            errors: Vec::new(),
        }
    }

    /// The symbol table this lexer interns into.
    pub fn table(&self) -> &SharedSymbolTable {
        &self.table
    }

    /// Errors reported so far. At most one: every error ends the session.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// How the session ended, or `None` while it is still scanning.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Returns `true` once the session is over and the source released.
    pub fn is_finished(&self) -> bool {
        self.termination.is_some() && self.input.is_closed()
    }

    /// Produce the next token.
    ///
    /// Returns the end-of-input token (kind [`TokenKind::Eof`]) when the
    /// source is exhausted or a lexical error ended the session, and keeps
    /// returning it on every later call.
    pub fn next_token(&mut self) -> Token {
        loop {
            if self.termination.is_some() {
                return self.eof_token();
            }
            match self.scan() {
                Step::Token(token) => {
                    tracing::trace!(
                        kind = ?token.kind(),
                        text = token.text(),
                        line = token.line(),
                        left = token.left(),
                        right = token.right(),
                        "token"
                    );
                    return token;
                }
                Step::Skip => {}
                Step::Stop(reason) => self.terminate(reason),
            }
        }
    }

    fn terminate(&mut self, reason: Termination) {
        tracing::debug!(?reason, "lexing session terminated");
        self.termination = Some(reason);
    }

    /// Close the source and build the end-of-input token.
    ///
    /// It sits just past the last character read: an empty span
    /// (`right == left - 1`) on the last line.
    fn eof_token(&mut self) -> Token {
        self.input.close();
        let (line, column) = self.input.last_position();
        Token::new(column + 1, column, line.max(1), self.table.eof())
    }

    /// One pass: skip whitespace, then scan a lexeme.
    fn scan(&mut self) -> Step {
        let start = loop {
            match self.input.current() {
                Some(c) if is_whitespace(c.ch) => {
                    self.input.bump();
                }
                Some(c) => break c,
                None => return self.end_of_input(),
            }
        };

        if is_ident_start(start.ch) {
            Step::Token(self.identifier(start))
        } else if is_digit(start.ch) {
            self.number(start)
        } else {
            self.operator(start)
        }
    }

    /// The source ran out: tell a clean end from a fault.
    fn end_of_input(&mut self) -> Step {
        match self.input.take_fault() {
            Some(fault) => {
                let (line, column) = fault
                    .position()
                    .unwrap_or_else(|| self.input.last_position());
                tracing::warn!(%fault, line, column, "source fault ended lexing");
                self.errors.push(LexError::source_fault(&fault, line, column));
                Step::Stop(Termination::SourceFault)
            }
            None => Step::Stop(Termination::Exhausted),
        }
    }

    /// Build a token for `text` starting at `start` and `len` characters
    /// long, interning the text with `kind` as its default classification.
    fn token(&self, start: Located, len: usize, text: &str, kind: TokenKind) -> Token {
        // Lexemes never cross a line, so the columns are contiguous.
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        let right = start.column.saturating_add(len).saturating_sub(1);
        Token::new(start.column, right, start.line, self.table.intern(text, kind))
    }

    /// Identifiers and reserved words.
    fn identifier(&mut self, start: Located) -> Token {
        let mut text = String::new();
        let mut len = 0;
        while let Some(c) = self.input.current().filter(|c| is_ident_continue(c.ch)) {
            text.push(c.ch);
            len += 1;
            self.input.bump();
        }
        // Reserved words were seeded first, so they come back with their
        // own kind instead of `Identifier`.
        self.token(start, len, &text, TokenKind::Identifier)
    }

    /// Integers, decimal numbers, and dates.
    fn number(&mut self, start: Located) -> Step {
        let input = &mut self.input;
        let candidate = literal::candidate(|n| input.peek(n).map(|c| c.ch));

        match literal::classify(&candidate, &self.config) {
            LiteralClass::Accept { len, kind } => {
                self.input.bump_n(len);
                Step::Token(self.token(start, len, &candidate[..len], kind))
            }
            LiteralClass::Illegal { len } => {
                self.input.bump_n(len);
                self.report(LexError::illegal_literal(
                    &candidate[..len],
                    start.line,
                    start.column,
                ));
                Step::Stop(Termination::IllegalLiteral)
            }
        }
    }

    /// Operators and separators by maximal munch over two characters.
    fn operator(&mut self, start: Located) -> Step {
        let mut text = String::with_capacity(2);
        text.push(start.ch);

        // Running out of input here just means a one-character token.
        let mut kind = TokenKind::BogusToken;
        if let Some(next) = self.input.peek(1) {
            text.push(next.ch);
            kind = operators::classify(&text);
            if kind == TokenKind::BogusToken {
                text.pop();
            }
        }
        if kind == TokenKind::BogusToken {
            kind = operators::classify(&text);
        }

        let len = text.chars().count();
        self.input.bump_n(len);

        match kind {
            TokenKind::Comment => {
                self.skip_line(start.line);
                Step::Skip
            }
            TokenKind::BogusToken => {
                self.report(LexError::illegal_character(text, start.line, start.column));
                Step::Stop(Termination::IllegalCharacter)
            }
            _ => Step::Token(self.token(start, len, &text, kind)),
        }
    }

    /// Skip the rest of `line`.
    fn skip_line(&mut self, line: u32) {
        while self.input.current().is_some_and(|c| c.line == line) {
            self.input.bump();
        }
    }

    /// Log a lexical error the moment it is found and keep it.
    fn report(&mut self, error: LexError) {
        tracing::error!(
            kind = %error.kind,
            text = %error.text,
            line = error.line,
            column = error.column,
            "lexical error"
        );
        self.errors.push(error);
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Token;

    /// Yields tokens up to, not including, the end-of-input token.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl<S: CharSource> FusedIterator for Lexer<S> {}

impl<S: CharSource> std::fmt::Debug for Lexer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("config", &self.config)
            .field("termination", &self.termination)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}
