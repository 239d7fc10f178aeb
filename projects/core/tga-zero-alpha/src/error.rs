//! Error types for TGA header decoding and pixel scanning.

use thiserror::Error;

/// Result type for TGA operations
pub type TgaResult<T> = Result<T, TgaError>;

/// Errors raised while reading a TGA file from memory.
///
/// These cover structurally broken files only. A well formed file in a layout we
/// do not scan is not an error; see [`crate::TgaRejection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TgaError {
    /// The file is shorter than the fixed TGA header
    #[error("TGA header truncated: required at least 18 bytes, got {actual} bytes")]
    HeaderTruncated { actual: usize },

    /// Fewer pixel bytes follow the header than its dimensions promise
    #[error("TGA pixel data truncated: required {required} bytes, got {actual} bytes")]
    PixelDataTruncated { required: u64, actual: u64 },
}
