//! Driver errors.
//!
//! Lexical errors are not here: they end the token dump but the command
//! itself still succeeds in producing output. These are the failures that
//! stop a command before or while it writes.

use std::io;

use xl_lexer_core::SourceError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),

    #[error("missing file path")]
    MissingPath,

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

impl CliError {
    /// Classify an I/O failure on `path` the way users expect to read it.
    pub fn from_io(path: &str, err: io::Error) -> Self {
        let path = path.to_owned();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: err },
        }
    }

    /// Wrap a failure to open a lexer source.
    pub fn from_source(path: &str, err: SourceError) -> Self {
        match err {
            SourceError::Open { source, .. } | SourceError::Read { source, .. } => {
                Self::from_io(path, source)
            }
        }
    }

    /// Whether the message should be followed by the command's usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::MissingPath | CliError::UnknownOption(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn io_kinds_map_to_messages() {
        let err = CliError::from_io("a.x", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "cannot find file 'a.x'");

        let err = CliError::from_io("a.x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.to_string(), "permission denied reading 'a.x'");

        let err = CliError::from_io("a.x", io::Error::from(io::ErrorKind::InvalidData));
        assert_eq!(err.to_string(), "'a.x' contains invalid UTF-8 data");
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = CliError::from_io("a.x", io::Error::other("disk on fire"));
        assert_eq!(err.to_string(), "error reading 'a.x': disk on fire");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn source_open_failures_unwrap_to_io() {
        let err = SourceError::Open {
            path: "b.x".to_owned(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(matches!(
            CliError::from_source("b.x", err),
            CliError::NotFound { path } if path == "b.x"
        ));
    }

    #[test]
    fn usage_errors() {
        assert!(CliError::MissingPath.is_usage());
        assert!(CliError::UnknownOption("--x".to_owned()).is_usage());
        assert!(!CliError::NotFound { path: String::new() }.is_usage());
    }
}
