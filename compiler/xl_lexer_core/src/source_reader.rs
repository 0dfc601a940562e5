//! Line-buffered character source.
//!
//! [`SourceReader`] reads its underlying [`BufRead`] one line at a time and
//! hands the line out character by character. Lines keep their trailing
//! `\n`, so the newline belongs to the line it ends: the first character of
//! the following line is the first one reported on the next line number.
//!
//! ```text
//! "ab\ncd"   read() -> 'a' (1:1) 'b' (1:2) '\n' (1:3) 'c' (2:1) 'd' (2:2) None
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::Utf8Error;

/// Failure to open or read a source.
///
/// End of input is *not* an error; it is reported as `Ok(None)` by
/// [`CharSource::read`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source file could not be opened.
    #[error("cannot open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Reading failed part-way through (I/O fault, invalid UTF-8).
    ///
    /// `line` and `column` locate the first character that could not be
    /// read. Everything before it on the line has already been handed out.
    #[error("read failed at line {line}, column {column}: {source}")]
    Read {
        line: u32,
        column: u32,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// Line and column of a read fault.
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            SourceError::Open { .. } => None,
            SourceError::Read { line, column, .. } => Some((*line, *column)),
        }
    }
}

/// A sequential reader yielding one character at a time.
///
/// Positions are 1-based and describe the most recently read character.
/// Before the first read both are `0`.
pub trait CharSource {
    /// Read the next character.
    ///
    /// Returns `Ok(None)` at end of input and after [`close`](Self::close).
    fn read(&mut self) -> Result<Option<char>, SourceError>;

    /// Line of the most recently read character.
    fn line(&self) -> u32;

    /// Column of the most recently read character.
    fn column(&self) -> u32;

    /// Release the underlying resource. Idempotent.
    fn close(&mut self);
}

/// Source backed by a file on disk.
pub type FileSource = SourceReader<BufReader<File>>;

/// Source backed by an owned in-memory string.
pub type TextSource = SourceReader<io::Cursor<Vec<u8>>>;

/// Line-buffered [`CharSource`] over any [`BufRead`].
#[derive(Debug)]
pub struct SourceReader<R> {
    /// `None` once closed.
    reader: Option<R>,
    /// Characters of the current line, including its `\n` if present.
    line_buf: Vec<char>,
    /// Index into `line_buf` of the next character to hand out.
    next: usize,
    /// Line number of `line_buf`.
    line: u32,
    /// Set once the reader returned 0 bytes or faulted.
    exhausted: bool,
    /// Fault to raise once the readable prefix of `line_buf` is drained.
    pending: Option<SourceError>,
}

impl SourceReader<BufReader<File>> {
    /// Open a file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl SourceReader<io::Cursor<Vec<u8>>> {
    /// Create a source over an in-memory string.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(io::Cursor::new(text.into().into_bytes()))
    }
}

impl<R: BufRead> SourceReader<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
            line_buf: Vec::new(),
            next: 0,
            line: 0,
            exhausted: false,
            pending: None,
        }
    }

    /// Returns `true` once [`close`](CharSource::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.reader.is_none()
    }

    /// Pull the next line into `line_buf`.
    ///
    /// A line that fails part-way keeps its readable prefix; the fault is
    /// parked in `pending` and raised when that prefix runs out.
    ///
    /// Returns `false` at end of input.
    fn fill_line(&mut self) -> bool {
        let Some(reader) = self.reader.as_mut() else {
            return false;
        };
        if self.exhausted {
            return false;
        }

        let mut bytes = Vec::new();
        let result = reader.read_until(b'\n', &mut bytes);
        if matches!(result, Ok(0)) {
            self.exhausted = true;
            return false;
        }

        let (text, utf8_error) = decode(&bytes);
        self.line_buf.clear();
        self.line_buf.extend(text.chars());
        self.next = 0;
        self.line += 1;

        let fault = match result {
            Err(source) => Some(source),
            Ok(_) => utf8_error.map(|err| io::Error::new(io::ErrorKind::InvalidData, err)),
        };
        if let Some(source) = fault {
            self.exhausted = true;
            let column = u32::try_from(self.line_buf.len() + 1).unwrap_or(u32::MAX);
            self.pending = Some(SourceError::Read {
                line: self.line,
                column,
                source,
            });
        }
        true
    }
}

/// Split `bytes` into its longest valid UTF-8 prefix and the error that
/// ends it, if any.
fn decode(bytes: &[u8]) -> (&str, Option<Utf8Error>) {
    match std::str::from_utf8(bytes) {
        Ok(text) => (text, None),
        Err(err) => {
            let valid = std::str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default();
            (valid, Some(err))
        }
    }
}

impl<R: BufRead> CharSource for SourceReader<R> {
    fn read(&mut self) -> Result<Option<char>, SourceError> {
        while self.next >= self.line_buf.len() {
            if let Some(fault) = self.pending.take() {
                return Err(fault);
            }
            if !self.fill_line() {
                return Ok(None);
            }
        }
        let c = self.line_buf[self.next];
        self.next += 1;
        Ok(Some(c))
    }

    #[inline]
    fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    fn column(&self) -> u32 {
        // Lines longer than u32::MAX characters saturate.
        u32::try_from(self.next).unwrap_or(u32::MAX)
    }

    fn close(&mut self) {
        self.reader = None;
        self.line_buf.clear();
        self.next = 0;
        self.pending = None;
    }
}

impl<S: CharSource + ?Sized> CharSource for Box<S> {
    fn read(&mut self) -> Result<Option<char>, SourceError> {
        (**self).read()
    }

    fn line(&self) -> u32 {
        (**self).line()
    }

    fn column(&self) -> u32 {
        (**self).column()
    }

    fn close(&mut self) {
        (**self).close();
    }
}
