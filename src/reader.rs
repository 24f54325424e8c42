use crate::error::{Result, SliceError};
use log::debug;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Largest single read we are willing to buffer. this is 1 GiB
pub const MAX_READ_SIZE: u64 = 1 << 30;

/// Seeks to `start` and reads up to `size` bytes.
/// Hitting EOF is not an error, it just gives a shorter (possibly empty) buffer.
pub fn read_range<R: Read + Seek>(reader: &mut R, start: u64, size: u64) -> io::Result<Vec<u8>> {
    read_range_with_capacity(reader, start, size, 0)
}

fn read_range_with_capacity<R: Read + Seek>(
    reader: &mut R,
    start: u64,
    size: u64,
    capacity: usize,
) -> io::Result<Vec<u8>> {
    // seeking past the end is fine, the read below then returns 0 bytes
    reader.seek(SeekFrom::Start(start))?;

    let mut buffer = Vec::with_capacity(capacity);
    reader.take(size).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Reads `size` bytes from `path` starting at byte `start`.
///
/// The file handle lives only for the duration of this call.
pub fn read_slice(path: &Path, start: u64, size: u64) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|e| SliceError::io(path, e))?;

    // the path may have been swapped out since validation
    let metadata = file.metadata().map_err(|e| SliceError::io(path, e))?;
    if !metadata.is_file() {
        return Err(SliceError::InvalidFile(path.to_path_buf()));
    }

    let file_len = metadata.len();
    let to_read = size.min(file_len.saturating_sub(start));
    debug!(
        "File is {} bytes, expecting to read {} bytes from offset {:#x}",
        file_len, to_read, start
    );

    // some filesystems refuse to seek that far, and there is nothing to read anyway
    if to_read == 0 {
        return Ok(Vec::new());
    }

    if to_read > MAX_READ_SIZE {
        return Err(SliceError::ReadLimit {
            requested: to_read,
            limit: MAX_READ_SIZE,
        });
    }

    read_range_with_capacity(&mut file, start, size.min(MAX_READ_SIZE), to_read as usize)
        .map_err(|e| SliceError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};

    fn temp_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_range_in_memory() {
        let mut cursor = Cursor::new(b"Line 1\nLine 2\nLine 3\n".to_vec());
        assert_eq!(read_range(&mut cursor, 7, 7).unwrap(), b"Line 2\n");
        assert_eq!(read_range(&mut cursor, 0, 4).unwrap(), b"Line");
        // past EOF
        assert_eq!(read_range(&mut cursor, 100, 4).unwrap(), b"");
    }

    #[test]
    fn test_read_slice_start_at_zero() {
        let file = temp_file(b"abcdefghij");
        assert_eq!(read_slice(file.path(), 0, 5).unwrap(), b"abcde");
    }

    #[test]
    fn test_read_slice_hits_eof() {
        let file = temp_file(b"1234567890");
        assert_eq!(read_slice(file.path(), 8, 4).unwrap(), b"90");
    }

    #[test]
    fn test_read_slice_oversized() {
        let file = temp_file(b"abcdefghij");
        assert_eq!(read_slice(file.path(), 0, 100).unwrap(), b"abcdefghij");
    }

    #[test]
    fn test_read_slice_start_at_or_past_end() {
        let file = temp_file(b"abcdefghij");
        assert!(read_slice(file.path(), 10, 3).unwrap().is_empty());
        assert!(read_slice(file.path(), 5000, 3).unwrap().is_empty());
    }

    #[test]
    fn test_read_slice_far_past_end() {
        // the kernel rejects a seek this far out, so we must not seek at all
        let file = temp_file(b"abcd");
        assert!(read_slice(file.path(), 1 << 44, 5).unwrap().is_empty());
        assert!(read_slice(file.path(), i64::MAX as u64, 5).unwrap().is_empty());
    }

    #[test]
    fn test_read_slice_over_limit() {
        // sparse, so this costs no disk space
        let file = tempfile::NamedTempFile::new().unwrap();
        file.as_file().set_len(MAX_READ_SIZE + 10).unwrap();

        match read_slice(file.path(), 0, u64::MAX) {
            Err(SliceError::ReadLimit { requested, limit }) => {
                assert_eq!(requested, MAX_READ_SIZE + 10);
                assert_eq!(limit, MAX_READ_SIZE);
            }
            other => panic!("expected read limit error, got {:?}", other.map(|d| d.len())),
        }

        // a window inside the same file is fine
        assert_eq!(read_slice(file.path(), MAX_READ_SIZE, 4).unwrap(), vec![0u8; 4]);
    }

    #[test]
    fn test_size_above_limit_is_fine_for_small_files() {
        let file = temp_file(b"abc");
        assert_eq!(read_slice(file.path(), 0, u64::MAX).unwrap(), b"abc");
    }

    #[test]
    fn test_read_slice_missing_file() {
        let err = read_slice(Path::new("definitely/not/here.bin"), 0, 10).unwrap_err();
        match err {
            SliceError::Io { source, .. } => assert_eq!(source.kind(), io::ErrorKind::NotFound),
            other => panic!("expected io error, got {:?}", other),
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_read_slice_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            read_slice(dir.path(), 0, 10),
            Err(SliceError::InvalidFile(_))
        ));
    }
}
