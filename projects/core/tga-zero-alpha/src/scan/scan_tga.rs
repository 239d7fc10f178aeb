use super::count_color_without_alpha;
use crate::error::{TgaError, TgaResult};
use crate::tga::{TgaHeader, TgaRejection};

/// The outcome of scanning a single TGA file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TgaScan {
    /// The file is a valid TGA, but not in a layout we scan.
    Unsupported(TgaRejection),
    /// The pixel data was scanned.
    Scanned {
        header: TgaHeader,
        /// Pixels with color but no alpha.
        matching_pixels: u64,
    },
}

impl TgaScan {
    /// Number of pixels with color but no alpha; zero for unsupported files.
    #[inline]
    pub fn matching_pixels(&self) -> u64 {
        match self {
            TgaScan::Unsupported(_) => 0,
            TgaScan::Scanned {
                matching_pixels, ..
            } => *matching_pixels,
        }
    }
}

/// Scans a TGA file held in memory for pixels with color but no alpha.
///
/// The pixel data is expected right after the header and the image ID field, and is
/// exactly `4 * width * height` bytes long. Anything after it (e.g. a TGA 2.0 footer)
/// is ignored.
///
/// # Return
///
/// [`TgaScan::Unsupported`] if the header describes an image we do not scan, otherwise
/// [`TgaScan::Scanned`] with the count.
///
/// # Errors
///
/// - [`TgaError::HeaderTruncated`] if the data is shorter than the header.
/// - [`TgaError::PixelDataTruncated`] if the data ends before the last pixel. No partial
///   count is produced.
pub fn scan_tga(data: &[u8]) -> TgaResult<TgaScan> {
    let header = TgaHeader::parse(data)?;
    if let Err(rejection) = header.check_supported() {
        return Ok(TgaScan::Unsupported(rejection));
    }

    let pixels = data.get(header.pixel_data_offset()..).unwrap_or(&[]);
    let required = header.pixel_data_length();
    let available = pixels.len() as u64;
    if available < required {
        return Err(TgaError::PixelDataTruncated {
            required,
            actual: available,
        });
    }

    // `required <= pixels.len()`, so this fits in usize.
    let pixels = &pixels[..required as usize];
    Ok(TgaScan::Scanned {
        header,
        matching_pixels: count_color_without_alpha(pixels),
    })
}
