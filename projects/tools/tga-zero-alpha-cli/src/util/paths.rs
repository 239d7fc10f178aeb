use crate::error::ScanError;
use glob::{glob_with, MatchOptions};
use std::borrow::Cow;
use std::path::{is_separator, Component, Path, PathBuf};

/// Wildcards stay within one path component and do not match hidden entries.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Expands glob patterns into the paths they match.
///
/// Patterns are expanded in the order given, and the matches of each pattern are yielded
/// in the sorted order produced by [`glob`]. Duplicates across patterns are kept. A
/// recursive `**` component matches any number of directories; a trailing `**` also
/// matches every file below them. A leading `./` in a pattern is kept on its matches.
///
/// Invalid patterns and unreadable directories are logged and skipped; a pattern that
/// matches nothing contributes nothing.
///
/// # Arguments
///
/// * `patterns` - The glob patterns to expand.
///
/// # Returns
///
/// All matching paths, files and directories alike.
pub fn resolve_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if let Err(e) = expand_pattern(pattern, &mut paths) {
            log::warn!("Skipping pattern '{pattern}': {e}");
        }
    }
    paths
}

fn expand_pattern(pattern: &str, paths: &mut Vec<PathBuf>) -> Result<(), ScanError> {
    let keep_current_dir = Path::new(pattern).starts_with(".");
    for entry in glob_with(&expand_trailing_double_star(pattern), MATCH_OPTIONS)? {
        match entry {
            Ok(path) if keep_current_dir => paths.push(with_current_dir_prefix(path)),
            Ok(path) => paths.push(path),
            // Skip problematic entries, e.g. those without access.
            Err(e) => log::warn!("Skipping {}: {}", e.path().display(), e.error()),
        }
    }
    Ok(())
}

/// A trailing `**` only yields directories in [`glob`]; `<base>/**/*` yields
/// everything beneath `<base>`.
fn expand_trailing_double_star(pattern: &str) -> Cow<'_, str> {
    match pattern.strip_suffix("**") {
        Some(base) if base.is_empty() || base.ends_with(is_separator) => {
            Cow::Owned(format!("{pattern}/*"))
        }
        _ => Cow::Borrowed(pattern),
    }
}

/// [`glob`] drops a leading `./` from its matches; puts it back.
fn with_current_dir_prefix(path: PathBuf) -> PathBuf {
    match path.components().next() {
        Some(Component::Normal(_)) => Path::new(".").join(path),
        _ => path,
    }
}

/// Extracts the file extension of a path, lowercased.
pub fn extract_lowercase_extension(path: &Path) -> Option<String> {
    path.extension()?.to_str().map(|s| s.to_lowercase())
}

/// True if the path ends in `.tga`, in any case.
#[inline]
pub fn has_tga_extension(path: &Path) -> bool {
    extract_lowercase_extension(path).as_deref() == Some("tga")
}
