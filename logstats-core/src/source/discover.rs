use crate::source::constants::{LOG_FILE_EXTENSIONS, WILDCARDS};
use crate::source::error::SourceError;
use glob::glob;
use std::path::{Path, PathBuf};

/// Finds the log files named by `pattern`.
///
/// Fails if nothing matches or if any match is not a `.log`/`.txt` file.
pub fn find_log_files(pattern: &str) -> Result<Vec<PathBuf>, SourceError> {
    let files = discover(pattern)?;

    if files.is_empty() {
        return Err(SourceError::NoMatchingFiles {
            pattern: pattern.to_string(),
        });
    }

    if let Some(path) = files.iter().find(|path| !has_log_extension(path)) {
        return Err(SourceError::UnsupportedExtension { path: path.clone() });
    }

    Ok(files)
}

/// Discovers files matching an exact path or a glob pattern.
///
/// Without wildcards, `pattern` must name an existing regular file. With wildcards, the
/// directory part is the search root and the file name part is matched at any depth
/// below it, so `logs/*.log` also finds `logs/2024/01/access.log`.
///
/// Directories never match. The result is sorted.
///
/// # Errors
///
/// Returns `SourceError::Glob` if the pattern is malformed.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, SourceError> {
    if !pattern.contains(WILDCARDS) {
        let path = Path::new(pattern);
        return Ok(if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            Vec::new()
        });
    }

    let (root, file_pattern) = split_pattern(pattern);
    let pattern = &resolve_glob(root, file_pattern);

    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| SourceError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|path| path.is_file())
        .collect();

    paths.sort();
    paths.dedup();
    Ok(paths)
}

/// Builds the recursive glob for a file name pattern below `root`.
pub fn resolve_glob(root: &Path, file_pattern: &str) -> String {
    root.join("**")
        .join(file_pattern)
        .to_string_lossy()
        .into_owned()
}

fn split_pattern(pattern: &str) -> (&Path, &str) {
    match pattern.rfind('/') {
        Some(0) => (Path::new("/"), &pattern[1..]),
        Some(i) => (Path::new(&pattern[..i]), &pattern[i + 1..]),
        None => (Path::new("."), pattern),
    }
}

fn has_log_extension(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    LOG_FILE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
