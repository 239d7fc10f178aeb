//! Common test imports and utilities for TGA tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::tga::{constants::*, TgaHeader};

/// Header of a scannable image: uncompressed 32-bit BGRA, no color map, default origin,
/// 8-bit alpha.
pub fn bgra8888_header(width: u16, height: u16) -> TgaHeader {
    TgaHeader {
        image_type: IMAGE_TYPE_UNCOMPRESSED_TRUE_COLOR,
        width,
        height,
        bits_per_pixel: BITS_PER_PIXEL_BGRA8888,
        image_descriptor: ALPHA_DEPTH_8,
        ..TgaHeader::default()
    }
}

/// Serializes a header in on-disk order, little-endian.
pub fn header_bytes(header: &TgaHeader) -> Vec<u8> {
    let mut data = Vec::with_capacity(TGA_HEADER_SIZE);
    data.push(header.id_length);
    data.push(header.color_map_type);
    data.push(header.image_type);
    data.extend_from_slice(&header.color_map_start.to_le_bytes());
    data.extend_from_slice(&header.color_map_length.to_le_bytes());
    data.push(header.color_map_depth);
    data.extend_from_slice(&header.origin_x.to_le_bytes());
    data.extend_from_slice(&header.origin_y.to_le_bytes());
    data.extend_from_slice(&header.width.to_le_bytes());
    data.extend_from_slice(&header.height.to_le_bytes());
    data.push(header.bits_per_pixel);
    data.push(header.image_descriptor);
    data
}

/// Builds a complete file: header, `id_length` bytes of image ID, then the given BGRA pixels.
pub fn create_tga(header: &TgaHeader, pixels: &[[u8; 4]]) -> Vec<u8> {
    let mut data = header_bytes(header);
    data.extend(core::iter::repeat_n(0xAA, header.id_length as usize));
    for pixel in pixels {
        data.extend_from_slice(pixel);
    }
    data
}

/// Reference count of pixels with color but no alpha, one pixel at a time.
pub fn reference_count(pixels: &[[u8; 4]]) -> u64 {
    let mut count = 0;
    for &[b, g, r, a] in pixels {
        if b != 0 && g != 0 && r != 0 && a == 0 {
            count += 1;
        }
    }
    count
}
