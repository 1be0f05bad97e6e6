//! Raw program-image loader.
//!
//! A program image is the pre-assembled byte content of the text region,
//! immediately followed by whatever data the program carries. The loader
//! places the whole image at the entry point, so file offset 0 corresponds
//! to address `entry_pc` and execution starts on the first word.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::SimError;
use crate::mem::Memory;

/// Reads the image at `path` and copies it into memory at `base`.
///
/// Returns the image size in bytes.
///
/// # Errors
///
/// - [`SimError::Image`] if the file cannot be read or is empty.
/// - [`SimError::ImageBounds`] if the image does not fit in memory.
pub fn load_image<P: AsRef<Path>>(mem: &mut Memory, path: P, base: u32) -> Result<usize, SimError> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| SimError::Image {
        path: path.display().to_string(),
        source,
    })?;

    if data.is_empty() {
        return Err(SimError::Image {
            path: path.display().to_string(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "empty program image"),
        });
    }

    mem.load_at(base, &data)?;
    debug!(bytes = data.len(), base = format_args!("{base:#010x}"), "image loaded");
    Ok(data.len())
}
