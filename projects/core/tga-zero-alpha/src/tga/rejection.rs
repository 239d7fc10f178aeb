use super::{constants::*, TgaHeader};
use thiserror::Error;

/// Reason a well formed TGA file is not scanned.
///
/// Only uncompressed, 32-bit BGRA images with no color map, the default origin and an
/// 8-bit alpha channel are scanned. Anything else is skipped without being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TgaRejection {
    #[error("image has a color map")]
    HasColorMap,

    #[error("image type {0} is not uncompressed true-color")]
    NotUncompressedTrueColor(u8),

    #[error("image origin ({x}, {y}) is not the default")]
    NonDefaultOrigin { x: u16, y: u16 },

    #[error("{0} bits per pixel, expected 32")]
    UnsupportedBitsPerPixel(u8),

    #[error("alpha channel depth is {0} bits, expected 8")]
    UnsupportedAlphaDepth(u8),
}

impl TgaHeader {
    /// Checks whether this image can be scanned for pixels with color but no alpha.
    ///
    /// # Return
    ///
    /// `Ok(())` if every condition holds, otherwise the first failing condition,
    /// checked in this order: color map, image type, origin, bit depth, alpha depth.
    pub fn check_supported(&self) -> Result<(), TgaRejection> {
        if self.color_map_type != 0
            || self.color_map_start != 0
            || self.color_map_length != 0
            || self.color_map_depth != 0
        {
            return Err(TgaRejection::HasColorMap);
        }

        if self.image_type != IMAGE_TYPE_UNCOMPRESSED_TRUE_COLOR {
            return Err(TgaRejection::NotUncompressedTrueColor(self.image_type));
        }

        if self.origin_x != 0 || self.origin_y != 0 {
            return Err(TgaRejection::NonDefaultOrigin {
                x: self.origin_x,
                y: self.origin_y,
            });
        }

        if self.bits_per_pixel != BITS_PER_PIXEL_BGRA8888 {
            return Err(TgaRejection::UnsupportedBitsPerPixel(self.bits_per_pixel));
        }

        if self.alpha_depth() != ALPHA_DEPTH_8 {
            return Err(TgaRejection::UnsupportedAlphaDepth(self.alpha_depth()));
        }

        Ok(())
    }
}
