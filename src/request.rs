use crate::error::{Result, SliceError};
use std::path::PathBuf;

/// A validated extraction request.
/// Built once from the command line and passed by reference to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    /// Byte offset to start reading at (0-based).
    pub start: u64,
    /// Maximum number of bytes to read. Always > 0.
    pub size: u64,
    /// File to read from.
    pub path: PathBuf,
    /// Drop partial lines at both ends of the slice.
    pub trim_lines: bool,
}

impl SliceRequest {
    /// Validates raw CLI values.
    ///
    /// The file is checked first, then the range, so a missing file wins over
    /// a bad offset when both are wrong.
    pub fn new(
        start: Option<i64>,
        size: Option<i64>,
        path: Option<PathBuf>,
        trim_lines: bool,
    ) -> Result<Self> {
        let path = match path {
            Some(p) if p.is_file() => p,
            Some(p) => return Err(SliceError::InvalidFile(p)),
            None => return Err(SliceError::MissingFile),
        };

        let (start, size) = match (start, size) {
            (Some(start), Some(size)) if start >= 0 && size > 0 => (start as u64, size as u64),
            _ => return Err(SliceError::InvalidRange),
        };

        Ok(SliceRequest {
            start,
            size,
            path,
            trim_lines,
        })
    }
}
