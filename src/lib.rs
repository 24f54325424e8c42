pub mod error;
pub mod reader;
pub mod request;
pub mod trim;
pub mod utils;

pub use error::{ErrorKind, SliceError};
pub use request::SliceRequest;

use log::debug;

/// Reads the requested byte range and, if asked to, trims partial lines.
/// The returned bytes are meant to be written out as they are.
pub fn extract(request: &SliceRequest) -> error::Result<Vec<u8>> {
    debug!("Requested start: {}", request.start);
    debug!("Requested size: {}", request.size);

    let mut data = reader::read_slice(&request.path, request.start, request.size)?;
    debug!("Actual bytes read: {}", data.len());

    if request.trim_lines {
        trim::trim_partial_lines_in_place(&mut data, request.start);
        debug!("After trimming: output length = {}", data.len());
    }

    Ok(data)
}
