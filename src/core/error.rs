//! Error types for GffTally
//!
//! Defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of characters of offending line text kept in an error
const ERROR_CONTENT_LIMIT: usize = 100;

/// Errors produced while parsing a single feature line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordParseError {
    /// Wrong number of tab-separated fields
    #[error("expected {expected} tab-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// Non-integer start or stop coordinate
    #[error("invalid {field} coordinate '{value}': expected an integer")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
    },
}

/// Errors produced while reading a feature source
#[derive(Debug, Error)]
pub enum GffReadError {
    /// Source could not be opened
    #[error("cannot open feature source {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line failed to parse; terminal for the stream
    #[error("line {line_number}: {source} (in '{content}')")]
    Line {
        /// 1-based physical line number, counting skipped comments and blanks
        line_number: usize,
        /// Offending line text, truncated
        content: String,
        #[source]
        source: RecordParseError,
    },

    /// I/O error while reading lines
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GffReadError {
    /// Wrap a parse failure with its 1-based line number and offending text
    pub fn at_line(line_number: usize, content: &str, source: RecordParseError) -> Self {
        GffReadError::Line {
            line_number,
            content: content.chars().take(ERROR_CONTENT_LIMIT).collect(),
            source,
        }
    }

    /// The 1-based line number, if this error is positioned
    pub fn line_number(&self) -> Option<usize> {
        match self {
            GffReadError::Line { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}

/// Result type alias for line parsing operations
pub type ParseResult<T> = std::result::Result<T, RecordParseError>;

/// Result type alias for feature reading operations
pub type ReadResult<T> = std::result::Result<T, GffReadError>;
