//! Detection of 'color without alpha' pixels in 32-bit TGA images.
//!
//! A pixel whose blue, green and red channels are all non-zero while its alpha channel is
//! exactly zero carries color information that is invisible once the image is composited.
//! This crate decodes the fixed 18 byte TGA header, decides whether the image is in the one
//! layout we can scan (uncompressed, 32-bit BGRA, no color map, default origin, 8-bit alpha),
//! and counts such pixels.
//!
//! All functions here operate on byte slices; opening, mapping and reporting files is left to
//! the caller.
//!
//! # Example
//!
//! ```
//! use tga_zero_alpha::{scan_tga, TgaScan};
//!
//! let mut file = vec![0u8; 18];
//! file[2] = 2; // uncompressed true-color
//! file[12] = 2; // width
//! file[14] = 1; // height
//! file[16] = 32; // bits per pixel
//! file[17] = 8; // 8-bit alpha
//! file.extend_from_slice(&[10, 20, 30, 0, 0, 0, 0, 0]);
//!
//! match scan_tga(&file).unwrap() {
//!     TgaScan::Scanned { matching_pixels, .. } => assert_eq!(matching_pixels, 1),
//!     TgaScan::Unsupported(reason) => panic!("rejected: {reason}"),
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod scan;
pub mod tga;

#[cfg(test)]
pub(crate) mod test_prelude;

pub use error::{TgaError, TgaResult};
pub use scan::*;
pub use tga::{TgaHeader, TgaRejection};
