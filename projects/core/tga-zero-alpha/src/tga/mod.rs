/// Offsets, sizes and accepted values of the TGA header.
pub mod constants;

/// Decode the fixed TGA header.
pub mod header;

/// Decide whether a decoded header describes an image we can scan.
pub mod rejection;

pub use header::*;
pub use rejection::*;
