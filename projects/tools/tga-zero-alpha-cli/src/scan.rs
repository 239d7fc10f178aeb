use crate::util::{has_tga_extension, report_outcomes, resolve_patterns, scan_file, FileOutcome};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[cfg(feature = "multithreaded")]
use rayon::prelude::*;

/// Scans a single path. Paths without a `.tga` extension are not opened.
pub fn scan_path(path: &Path) -> FileOutcome {
    if !has_tga_extension(path) {
        return FileOutcome::NotTga;
    }

    match scan_file(path) {
        Ok(scan) => FileOutcome::Scanned(scan),
        Err(e) => FileOutcome::Failed(e),
    }
}

/// Scans every path, keeping the outcomes in the same order as `paths`.
pub fn scan_paths(paths: Vec<PathBuf>) -> Vec<(PathBuf, FileOutcome)> {
    #[cfg(feature = "multithreaded")]
    let iter = paths.into_par_iter();
    #[cfg(not(feature = "multithreaded"))]
    let iter = paths.into_iter();

    iter.map(|path| {
        let outcome = scan_path(&path);
        (path, outcome)
    })
    .collect()
}

/// Expands `patterns`, scans every TGA file found and writes the report to `out`.
///
/// Problems with individual patterns or files are logged and do not stop the run.
///
/// # Errors
///
/// Only if writing to `out` fails.
pub fn run<S: AsRef<str>, W: Write>(patterns: &[S], out: &mut W) -> io::Result<()> {
    let start = Instant::now();

    let paths = resolve_patterns(patterns);
    log::info!("Found {} paths to check", paths.len());

    let outcomes = scan_paths(paths);
    report_outcomes(out, &outcomes)?;

    log::info!("Scan completed in {:.2?}", start.elapsed());
    Ok(())
}
