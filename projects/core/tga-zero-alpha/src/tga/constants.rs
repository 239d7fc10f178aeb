//! TGA header constants and definitions
#![allow(dead_code)]

/// Size of the fixed TGA header, in bytes.
pub const TGA_HEADER_SIZE: usize = 18;

// Header field offsets
pub(crate) const ID_LENGTH_OFFSET: usize = 0x00;
pub(crate) const COLOR_MAP_TYPE_OFFSET: usize = 0x01;
pub(crate) const IMAGE_TYPE_OFFSET: usize = 0x02;
pub(crate) const COLOR_MAP_START_OFFSET: usize = 0x03;
pub(crate) const COLOR_MAP_LENGTH_OFFSET: usize = 0x05;
pub(crate) const COLOR_MAP_DEPTH_OFFSET: usize = 0x07;
pub(crate) const ORIGIN_X_OFFSET: usize = 0x08;
pub(crate) const ORIGIN_Y_OFFSET: usize = 0x0A;
pub(crate) const WIDTH_OFFSET: usize = 0x0C;
pub(crate) const HEIGHT_OFFSET: usize = 0x0E;
pub(crate) const BITS_PER_PIXEL_OFFSET: usize = 0x10;
pub(crate) const IMAGE_DESCRIPTOR_OFFSET: usize = 0x11;

/// Image type for uncompressed true-color data.
pub const IMAGE_TYPE_UNCOMPRESSED_TRUE_COLOR: u8 = 2;

/// The only pixel depth we scan; stored as B, G, R, A.
pub const BITS_PER_PIXEL_BGRA8888: u8 = 32;

/// Bytes per BGRA8888 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Low 4 bits of the image descriptor: alpha channel depth.
pub const ALPHA_DEPTH_MASK: u8 = 0x0F;

/// Alpha depth required for a genuine 8-bit alpha channel.
pub const ALPHA_DEPTH_8: u8 = 8;
