//! Conversion failures and the host-facing wrapper around them.
//!
//! Nodes work in [`ConvertResult`]; at the host boundary the error is folded
//! into a [`NodeError`] sentence. Everything serializes, so the C ABI can hand
//! back the structured cause next to the message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;
use serde::Serialize;

/// A request the converters refuse before touching any pixels.
#[derive(Error, Debug, Serialize)]
pub enum ValidationError {
    #[error("Path error: {0}")]
    Path(#[from] PathError),
    /// Bad option value: dimension, size list, quality
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Problems with the source file a node was pointed at.
#[derive(Error, Debug, Serialize)]
pub enum PathError {
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),
    /// e.g. a directory
    #[error("Not a file: {0}")]
    NotFile(PathBuf),
    #[error("IO error: {0}")]
    IO(String),
}

/// Every failure a conversion can end in.
#[derive(Error, Debug, Serialize)]
pub enum ConvertError {
    /// Node input validation failed
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Rasterization, decoding or encoding failed inside a library
    #[error("Processing error: {0}")]
    Processing(String),

    /// Reading the source or writing an output failed
    #[error("IO error: {0}")]
    IO(String),

    /// Requested output or icon format is not one we write
    #[error("Format error: {0}")]
    Format(String),

    /// Host interface misuse (unknown node, malformed inputs payload)
    #[error("Host error: {0}")]
    Host(String),
}

/// Result of a conversion step.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Failure reported to the host at the node boundary.
///
/// `message` is the sentence shown to the user; `source` keeps the
/// structured cause.
#[derive(Error, Debug, Serialize)]
#[error("{message}")]
pub struct NodeError {
    pub message: String,
    pub source: ConvertError,
}

impl NodeError {
    /// Wraps `source` as "`<action>` failed: `<cause>`".
    pub fn new(action: impl AsRef<str>, source: ConvertError) -> Self {
        Self {
            message: format!("{} failed: {}", action.as_ref(), source.cause()),
            source,
        }
    }
}

impl ConvertError {
    pub fn processing<T: Into<String>>(msg: T) -> Self {
        Self::Processing(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::IO(msg.into())
    }

    pub fn format<T: Into<String>>(msg: T) -> Self {
        Self::Format(msg.into())
    }

    pub fn host<T: Into<String>>(msg: T) -> Self {
        Self::Host(msg.into())
    }

    pub fn settings<T: Into<String>>(msg: T) -> Self {
        Self::Validation(ValidationError::settings(msg))
    }

    /// The innermost message, without the variant prefix.
    ///
    /// Used when wrapping the error into a host-facing failure sentence.
    pub fn cause(&self) -> String {
        match self {
            Self::Validation(ValidationError::Path(e)) => e.to_string(),
            Self::Validation(ValidationError::Settings(msg)) => msg.clone(),
            Self::Processing(msg) | Self::IO(msg) | Self::Format(msg) | Self::Host(msg) => {
                msg.clone()
            }
        }
    }
}

impl ValidationError {
    pub fn path_not_found(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFound(path.into()))
    }

    pub fn not_a_file(path: impl Into<PathBuf>) -> Self {
        Self::Path(PathError::NotFile(path.into()))
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

impl From<io::Error> for PathError {
    fn from(err: io::Error) -> Self {
        Self::IO(err.to_string())
    }
}

impl From<PathError> for ConvertError {
    fn from(err: PathError) -> Self {
        Self::Validation(ValidationError::Path(err))
    }
}

// Decoder I/O and unsupported-codec errors keep their own variants.
impl From<image::ImageError> for ConvertError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Self::IO(e.to_string()),
            image::ImageError::Unsupported(e) => Self::Format(e.to_string()),
            other => Self::Processing(other.to_string()),
        }
    }
}

impl From<resvg::usvg::Error> for ConvertError {
    fn from(err: resvg::usvg::Error) -> Self {
        Self::Processing(format!("Failed to parse SVG: {err}"))
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::Host(format!("Invalid JSON: {err}"))
    }
}
