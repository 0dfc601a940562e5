//! Lookahead window over a [`CharSource`].
//!
//! The scanner's state between tokens is the first unconsumed character
//! (the classic single-character lookahead). Literal disambiguation and
//! maximal munch occasionally need to see a few characters further; those
//! are pulled from the source into the window and stay there, unconsumed,
//! until the scanner bumps past them.
//!
//! Source faults are parked in the window and the window then behaves as if
//! the input had ended. The scanner collects the fault with
//! [`Lookahead::take_fault`] when it reaches that end.

use std::collections::VecDeque;

use xl_lexer_core::{CharSource, SourceError};

/// A character with the position the source reported for it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Located {
    pub ch: char,
    pub line: u32,
    pub column: u32,
}

pub(crate) struct Lookahead<S> {
    /// `None` once closed.
    source: Option<S>,
    window: VecDeque<Located>,
    /// No more characters will be pulled.
    drained: bool,
    fault: Option<SourceError>,
    /// Line and column of the last character pulled from the source.
    last: (u32, u32),
}

impl<S: CharSource> Lookahead<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Some(source),
            window: VecDeque::with_capacity(4),
            drained: false,
            fault: None,
            last: (0, 0),
        }
    }

    /// Pull one character into the window. Returns `false` at end of input.
    fn pull(&mut self) -> bool {
        if self.drained {
            return false;
        }
        let Some(source) = self.source.as_mut() else {
            return false;
        };
        match source.read() {
            Ok(Some(ch)) => {
                let located = Located {
                    ch,
                    line: source.line(),
                    column: source.column(),
                };
                self.last = (located.line, located.column);
                self.window.push_back(located);
                true
            }
            Ok(None) => {
                self.drained = true;
                false
            }
            Err(err) => {
                self.drained = true;
                self.fault = Some(err);
                false
            }
        }
    }

    /// The `n`th unconsumed character (0 is the current lookahead).
    pub fn peek(&mut self, n: usize) -> Option<Located> {
        while self.window.len() <= n {
            if !self.pull() {
                return None;
            }
        }
        self.window.get(n).copied()
    }

    /// The current lookahead character.
    #[inline]
    pub fn current(&mut self) -> Option<Located> {
        self.peek(0)
    }

    /// Consume the current lookahead character.
    pub fn bump(&mut self) -> Option<Located> {
        self.current()?;
        self.window.pop_front()
    }

    /// Consume `n` characters, returning how many were actually consumed.
    pub fn bump_n(&mut self, n: usize) -> usize {
        (0..n).take_while(|_| self.bump().is_some()).count()
    }

    /// Take the fault that ended the input, if any.
    pub fn take_fault(&mut self) -> Option<SourceError> {
        self.fault.take()
    }

    /// Line and column of the last character read from the source.
    pub fn last_position(&self) -> (u32, u32) {
        self.last
    }

    /// Release the source. Idempotent.
    pub fn close(&mut self) {
        if let Some(mut source) = self.source.take() {
            source.close();
        }
        self.window.clear();
        self.drained = true;
    }

    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }
}
