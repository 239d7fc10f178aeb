use crate::error::ScanError;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tga_zero_alpha::TgaScan;

/// What happened to a single path.
#[derive(Debug)]
pub enum FileOutcome {
    /// Not a `.tga` path; never opened.
    NotTga,
    /// Opened and its header decoded.
    Scanned(TgaScan),
    /// Could not be read, or is truncated.
    Failed(ScanError),
}

/// Writes the report line for a single file, if it has any matching pixels.
pub fn write_report_line<W: Write>(out: &mut W, path: &Path, count: u64) -> io::Result<()> {
    if count > 0 {
        writeln!(
            out,
            "TGA file {} has {count} pixels with color but no alpha",
            path.display()
        )?;
    }
    Ok(())
}

/// Reports every outcome in order.
///
/// Files with matching pixels get one line on `out`; everything else is only logged.
///
/// # Errors
///
/// Only if writing to `out` fails.
pub fn report_outcomes<W: Write>(
    out: &mut W,
    outcomes: &[(PathBuf, FileOutcome)],
) -> io::Result<()> {
    for (path, outcome) in outcomes {
        match outcome {
            FileOutcome::NotTga => log::debug!("{}: not a TGA file, skipped", path.display()),
            FileOutcome::Scanned(TgaScan::Unsupported(reason)) => {
                log::debug!("{}: skipped, {reason}", path.display())
            }
            FileOutcome::Scanned(TgaScan::Scanned {
                matching_pixels, ..
            }) => write_report_line(out, path, *matching_pixels)?,
            FileOutcome::Failed(e) => log::warn!("{}: {e}", path.display()),
        }
    }
    Ok(())
}
