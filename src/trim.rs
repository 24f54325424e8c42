//! Removal of partial lines at the edges of a byte slice.
//!
//! A line is a run of bytes ending in `\n` (the terminator belongs to the
//! line). The last line of a buffer may have no terminator, in which case it
//! was cut off by the size limit or by EOF.
//!
//! When the slice did not start at the first byte of the file, its first line
//! is always dropped, even if `start` happens to sit exactly on a line
//! boundary. We never look at the byte before `start`, so we can't tell.

use memchr::{memchr, memrchr};
use std::ops::Range;

/// The part of `data` that survives trimming, as a range of indices.
pub fn retained_range(data: &[u8], start: u64) -> Range<usize> {
    let mut begin = 0;
    let mut end = data.len();

    // leading partial line
    if start > 0 && !data.is_empty() {
        begin = memchr(b'\n', data).map_or(end, |i| i + 1);
    }

    // trailing partial line
    let kept = &data[begin..end];
    if !kept.is_empty() && kept[kept.len() - 1] != b'\n' {
        end = memrchr(b'\n', kept).map_or(begin, |i| begin + i + 1);
    }

    begin..end
}

/// Drops the leading and trailing partial lines of a slice read from `start`.
/// The buffer is reused.
pub fn trim_partial_lines_in_place(data: &mut Vec<u8>, start: u64) {
    let range = retained_range(data, start);
    data.truncate(range.end);
    data.drain(..range.start);
}
