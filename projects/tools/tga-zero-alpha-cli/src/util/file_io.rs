use crate::error::ScanError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::fs;
use std::path::Path;
use tga_zero_alpha::tga::constants::TGA_HEADER_SIZE;
use tga_zero_alpha::{scan_tga, TgaError, TgaScan};

/// Scans a TGA file on disk for pixels with color but no alpha.
///
/// The file is memory-mapped read-only and scanned in place, so the pixel data is
/// never copied. The handle and mapping are released before returning.
///
/// # Arguments
///
/// * `path` - Path to the TGA file. The extension is not checked here.
///
/// # Returns
///
/// The [`TgaScan`] of the file, or a [`ScanError`] if the file could not be read or is
/// truncated.
pub fn scan_file(path: &Path) -> Result<TgaScan, ScanError> {
    if !fs::metadata(path)?.is_file() {
        return Err(ScanError::NotAFile);
    }

    let handle = ReadOnlyFileHandle::open(path)?;
    let size = mapping_len(handle.size()? as u64)?;

    // Nothing to map; also avoids creating a zero length mapping.
    if size < TGA_HEADER_SIZE {
        return Err(TgaError::HeaderTruncated { actual: size }.into());
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(scan_tga(mapping.as_slice())?)
}

/// Converts a file size into a mapping length for this target.
fn mapping_len(size: u64) -> Result<usize, ScanError> {
    usize::try_from(size).map_err(|_| ScanError::FileTooLarge(size))
}
