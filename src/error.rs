//! Error types shared by the loaders, converters and codecs.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error represents every failure outside the comparator.
///
/// The comparator itself is total and never returns one of these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file not found - {}", path.display())]
    NotFound { path: PathBuf },

    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write to '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error parsing YAML {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported mapping key {key}: only scalar keys are allowed")]
    UnsupportedKey { key: String },

    #[error("duplicate mapping key '{key}' after converting keys to text")]
    DuplicateKey { key: String },

    #[error("cannot represent {value} at {path} in JSON")]
    NonFiniteNumber { path: String, value: String },

    #[error("error serializing JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error serializing YAML: {0}")]
    YamlEmit(#[source] serde_yaml::Error),

    #[error("error writing XML: {message}")]
    Xml { message: String },

    #[error("invalid base64 on line {line}: {source}")]
    Base64 {
        line: usize,
        #[source]
        source: base64::DecodeError,
    },

    #[error("decoded content from {origin} is not valid UTF-8")]
    Utf8 { origin: String },

    #[error("split size must be at least 1")]
    InvalidSplit,
}

impl Error {
    /// Classifies an I/O error raised while reading `path`.
    pub fn read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Error::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Wraps an I/O error raised while writing `path`.
    pub fn write(path: &Path, source: io::Error) -> Self {
        Error::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wraps a YAML syntax error for the named input.
    pub fn parse(origin: impl Into<String>, source: serde_yaml::Error) -> Self {
        Error::Parse {
            origin: origin.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
