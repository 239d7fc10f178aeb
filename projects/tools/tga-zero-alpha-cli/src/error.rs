use std::io;
use tga_zero_alpha::TgaError;
use thiserror::Error;

/// Errors that can occur while resolving or scanning a single path.
///
/// None of these abort a run; they are logged and the next path is processed.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A glob pattern could not be parsed
    #[error("Invalid glob pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),

    #[error("Not a regular file")]
    NotAFile,

    /// File size does not fit in the address space
    #[error("File too large to map: {0} bytes")]
    FileTooLarge(u64),

    #[error(transparent)]
    Tga(#[from] TgaError),
}
