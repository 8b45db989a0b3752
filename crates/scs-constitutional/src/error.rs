//! Error types for the Constitutional Layer
//!
//! - Parse operations (file → brief / SCD)
//! - Serialize operations (SCD → file)

use scs_artifact::DocumentError;
use std::path::PathBuf;

/// Errors during file parsing (ingress)
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// File extension not handled by the parser
    #[error("unsupported file extension for {path}: expected one of {expected:?}")]
    UnsupportedExtension {
        /// Offending path
        path: PathBuf,
        /// Extensions the parser accepts
        expected: Vec<&'static str>,
    },

    /// Syntax error in source file
    #[error("syntax error in {path}: {message}")]
    SyntaxError {
        /// Offending path
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Parsed value does not have SCD shape
    #[error("invalid document {path}: {source}")]
    InvalidDocument {
        /// Offending path
        path: PathBuf,
        /// Shape error
        #[source]
        source: DocumentError,
    },

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Offending path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the configured size limit
    #[error("file too large: {path} is {size} bytes (max: {max})")]
    TooLarge {
        /// Offending path
        path: PathBuf,
        /// Actual size
        size: usize,
        /// Configured limit
        max: usize,
    },
}

impl ParseError {
    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SyntaxError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors during SCD serialization (egress)
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// Document could not be rendered to YAML
    #[error("format error for {path}: {source}")]
    FormatError {
        /// Destination path
        path: PathBuf,
        /// Rendering error
        #[source]
        source: DocumentError,
    },

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        /// Destination path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl SerializeError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Combined store error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Ingress failure
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Egress failure
    #[error("serialize error: {0}")]
    Serialize(#[from] SerializeError),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
