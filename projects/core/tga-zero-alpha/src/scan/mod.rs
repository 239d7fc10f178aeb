/// A single BGRA8888 pixel.
pub mod bgra8888;

/// Count pixels with color but no alpha in raw BGRA8888 data.
pub mod count_pixels;

/// Scan a whole TGA file held in memory.
pub mod scan_tga;

pub use bgra8888::*;
pub use count_pixels::*;
pub use scan_tga::*;
