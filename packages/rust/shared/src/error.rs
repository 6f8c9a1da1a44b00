//! Error types for ctigroup.
//!
//! Library crates use [`CtiGroupError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Malformed input rows are deliberately absent from this enum: they are
//! skipped by the parser and never surface as errors.

use std::path::PathBuf;

/// Top-level error type for all ctigroup operations.
#[derive(Debug, thiserror::Error)]
pub enum CtiGroupError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The tab-delimited reader could not frame a record.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// An input (or config) file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be written.
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON rendering failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, CtiGroupError>;

impl CtiGroupError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Wrap a read-side `std::io::Error` with the offending path.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Wrap a write-side `std::io::Error` with the offending path.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = CtiGroupError::config("indent must be at most 16");
        assert_eq!(err.to_string(), "config error: indent must be at most 16");

        let err = CtiGroupError::parse("record 3: invalid UTF-8");
        assert!(err.to_string().contains("record 3"));
    }

    #[test]
    fn io_errors_carry_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = CtiGroupError::read("/tmp/missing.tsv", source);
        let msg = err.to_string();
        assert!(msg.starts_with("failed to read"));
        assert!(msg.contains("missing.tsv"));

        let source = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = CtiGroupError::write("/root/out.json", source);
        assert!(matches!(err, CtiGroupError::Write { .. }));
        assert!(err.to_string().contains("denied"));
    }
}
