use super::constants::*;
use crate::error::{TgaError, TgaResult};

/// The fixed 18 byte header found at the start of every TGA file.
///
/// All multi-byte fields are stored little-endian on disk; the field order below
/// matches the on-disk layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TgaHeader {
    /// Length of the image ID field that follows the header.
    pub id_length: u8,
    /// 0 if the file has no color map (palette).
    pub color_map_type: u8,
    /// Image type; 2 is uncompressed true-color.
    pub image_type: u8,
    /// Index of the first color map entry.
    pub color_map_start: u16,
    /// Number of color map entries.
    pub color_map_length: u16,
    /// Bits per color map entry.
    pub color_map_depth: u8,
    pub origin_x: u16,
    pub origin_y: u16,
    pub width: u16,
    pub height: u16,
    pub bits_per_pixel: u8,
    /// Image descriptor. Bits 0-3 hold the alpha channel depth, bits 4-5 the screen origin.
    pub image_descriptor: u8,
}

impl TgaHeader {
    /// Decodes the header from the start of a TGA file.
    ///
    /// # Errors
    ///
    /// [`TgaError::HeaderTruncated`] if `data` is shorter than [`TGA_HEADER_SIZE`].
    pub fn parse(data: &[u8]) -> TgaResult<Self> {
        if data.len() < TGA_HEADER_SIZE {
            return Err(TgaError::HeaderTruncated { actual: data.len() });
        }

        Ok(Self {
            id_length: data[ID_LENGTH_OFFSET],
            color_map_type: data[COLOR_MAP_TYPE_OFFSET],
            image_type: data[IMAGE_TYPE_OFFSET],
            color_map_start: read_u16_le(data, COLOR_MAP_START_OFFSET),
            color_map_length: read_u16_le(data, COLOR_MAP_LENGTH_OFFSET),
            color_map_depth: data[COLOR_MAP_DEPTH_OFFSET],
            origin_x: read_u16_le(data, ORIGIN_X_OFFSET),
            origin_y: read_u16_le(data, ORIGIN_Y_OFFSET),
            width: read_u16_le(data, WIDTH_OFFSET),
            height: read_u16_le(data, HEIGHT_OFFSET),
            bits_per_pixel: data[BITS_PER_PIXEL_OFFSET],
            image_descriptor: data[IMAGE_DESCRIPTOR_OFFSET],
        })
    }

    /// Alpha channel depth in bits, taken from the low 4 bits of the image descriptor.
    #[inline]
    pub fn alpha_depth(&self) -> u8 {
        self.image_descriptor & ALPHA_DEPTH_MASK
    }

    /// Offset of the first pixel, past the header and the image ID field.
    ///
    /// Only valid for images without a color map; color-mapped images are never scanned.
    #[inline]
    pub fn pixel_data_offset(&self) -> usize {
        TGA_HEADER_SIZE + self.id_length as usize
    }

    /// Number of pixel bytes in a 32-bit image of this size.
    #[inline]
    pub fn pixel_data_length(&self) -> u64 {
        self.width as u64 * self.height as u64 * BYTES_PER_PIXEL as u64
    }
}

/// Assembles a little-endian u16 as `low | (high << 8)`.
///
/// Caller guarantees `offset + 1` is in bounds.
#[inline(always)]
fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    data[offset] as u16 | ((data[offset + 1] as u16) << 8)
}
