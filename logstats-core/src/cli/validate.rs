use crate::cli::{AnalyzeArgs, ArgumentError};
use std::fs;
use std::path::Path;

/// Checks the arguments before any source is touched. The first failing check wins.
pub fn validate(args: &AnalyzeArgs) -> Result<(), ArgumentError> {
    let output = args.output.as_path();

    if output.exists() {
        return Err(ArgumentError::OutputExists(output.to_path_buf()));
    }

    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let metadata = match fs::metadata(parent) {
        Ok(metadata) if metadata.is_dir() => metadata,
        _ => return Err(ArgumentError::MissingOutputDirectory(parent.to_path_buf())),
    };

    if metadata.permissions().readonly() || !is_writable(parent) {
        return Err(ArgumentError::ReadOnlyOutputDirectory(
            parent.to_path_buf(),
        ));
    }

    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from >= to {
            return Err(ArgumentError::InvalidDateRange { from, to });
        }
    }

    let expected = args.format.extension();
    if !output.to_string_lossy().ends_with(expected) {
        return Err(ArgumentError::ExtensionMismatch {
            output: output.to_path_buf(),
            expected,
        });
    }

    Ok(())
}

/// Whether the current user may create files in `dir`, as decided by `access(2)`.
#[cfg(unix)]
pub(crate) fn is_writable(dir: &Path) -> bool {
    nix::unistd::access(dir, nix::unistd::AccessFlags::W_OK).is_ok()
}

#[cfg(not(unix))]
pub(crate) fn is_writable(_dir: &Path) -> bool {
    true
}
