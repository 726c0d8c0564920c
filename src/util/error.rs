//! Error types for asset loading and animation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for scene asset operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Invalid magic bytes at start of a bitmap
    #[error("Unsupported image format: expected 'BM' signature, found {found:02X?}")]
    UnsupportedFormat { found: Vec<u8> },

    /// Header fields disagree with each other or with the file length
    #[error("Corrupt file: {0}")]
    CorruptFile(String),

    /// Invalid record in a mesh text file
    #[error("Malformed mesh at line {line}: {message}")]
    MalformedMesh { line: usize, message: String },

    /// Keyframe data that cannot be interpolated
    #[error("Invalid track at sample {index}: {message}")]
    InvalidTrack { index: usize, message: String },

    /// Zero-area face where a normal had to be derived
    #[error("Degenerate face at line {line}: zero-area face, normal left as zero vector")]
    DegenerateFace { line: usize },

    /// Animation cycle length of zero
    #[error("Animation cycle length must be greater than zero")]
    InvalidCycle,

    /// Error raised while loading a specific file
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// Memory mapping failed
    #[error("Memory mapping failed: {0}")]
    MmapFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Mesh text is not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Configuration could not be parsed or written
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a corrupt file error.
    pub fn corrupt(msg: impl Into<String>) -> Self {
        Self::CorruptFile(msg.into())
    }

    /// Create a malformed mesh error for the given 1-based line.
    pub fn malformed(line: usize, msg: impl Into<String>) -> Self {
        Self::MalformedMesh {
            line,
            message: msg.into(),
        }
    }

    /// Create an invalid track error for the given sample index.
    pub fn invalid_track(index: usize, msg: impl Into<String>) -> Self {
        Self::InvalidTrack {
            index,
            message: msg.into(),
        }
    }

    /// Attach the path of the file being loaded.
    ///
    /// Errors that already carry a path are returned unchanged.
    pub fn in_file(self, path: impl AsRef<Path>) -> Self {
        match self {
            Self::InFile { .. } | Self::FileNotFound(_) => self,
            other => Self::InFile {
                path: path.as_ref().to_path_buf(),
                source: Box::new(other),
            },
        }
    }

    /// The underlying error with any file context stripped.
    pub fn root(&self) -> &Error {
        match self {
            Self::InFile { source, .. } => source.root(),
            other => other,
        }
    }

    /// The path of the file this error was raised for, if known.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::InFile { path, .. } | Self::FileNotFound(path) => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for scene asset operations.
pub type Result<T> = std::result::Result<T, Error>;
