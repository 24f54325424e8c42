use std::io;
use std::path::PathBuf;

/// Broad category of a failure, used by the CLI to pick how it reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing arguments, caught before any file is read.
    Usage,
    /// The file could not be opened or read, or is too big to buffer.
    Io,
}

#[derive(thiserror::Error, Debug)]
pub enum SliceError {
    #[error("File not found or invalid: no file given")]
    MissingFile,
    #[error("File not found or invalid: {}", .0.display())]
    InvalidFile(PathBuf),
    #[error("--start must be >= 0 and --size must be > 0.")]
    InvalidRange,
    #[error("requested read size ({requested} bytes) exceeds limit ({limit} bytes)")]
    ReadLimit { requested: u64, limit: u64 },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SliceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SliceError::MissingFile | SliceError::InvalidFile(_) | SliceError::InvalidRange => {
                ErrorKind::Usage
            }
            SliceError::ReadLimit { .. } | SliceError::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        SliceError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SliceError>;
