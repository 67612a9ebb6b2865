//! Per-file conversion pipeline and directory listing.
//!
//! The top-level entry point is [`process_path`]; directory mode uses
//! [`list_dir`] to expand a directory into individual inputs.

use crate::script::{DelayRange, translate};
use anyhow::{Context as _, Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output file name for `input`: the base name with every `.` replaced by `-`,
/// plus the `.scpt` extension.
///
/// Purely a function of the base name, so distinct inputs sharing a base name
/// map to the same output and silently overwrite each other.
///
/// # Example
///
/// ```
/// use keyscript::output_name;
/// use std::path::Path;
///
/// let name = output_name(Path::new("notes.v1.txt")).unwrap();
/// assert_eq!(name, "notes-v1-txt.scpt");
/// ```
pub fn output_name(input: &Path) -> Result<String> {
    let base = input
        .file_name()
        .ok_or_else(|| anyhow!("no file name in path: {}", input.display()))?;
    Ok(format!("{}.scpt", base.to_string_lossy().replace('.', "-")))
}

/// Convert one file: read it, translate it, and write the script into the
/// current working directory under its derived name.
///
/// Prints a one-line confirmation on success.
///
/// # Errors
///
/// Returns an error if the input cannot be read (missing, unreadable, or not
/// valid UTF-8) or if the output file cannot be written.
pub fn process_path(path: &Path, delays: &DelayRange) -> Result<()> {
    let document = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;
    debug!(chars = document.chars().count(), "translating {}", path.display());

    let script = translate(&document, delays);
    let file_name = output_name(path)?;
    fs::write(&file_name, script)
        .with_context(|| format!("Failed to write output file: {file_name}"))?;

    println!("{} successfully converted to {}", path.display(), file_name);
    Ok(())
}

/// List the non-hidden entries of `dir`, sorted by path.
///
/// Entries whose names start with `.` are skipped.
///
/// # Errors
///
/// Returns an error if the directory cannot be read; listing errors abort the
/// whole run rather than a single item.
pub fn list_dir(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name_replaces_every_dot() {
        assert_eq!(
            output_name(Path::new("notes.v1.txt")).unwrap(),
            "notes-v1-txt.scpt"
        );
    }

    #[test]
    fn test_output_name_uses_base_name_only() {
        assert_eq!(
            output_name(Path::new("/some/dir/demo.txt")).unwrap(),
            "demo-txt.scpt"
        );
    }

    #[test]
    fn test_output_name_without_dots() {
        assert_eq!(output_name(Path::new("Makefile")).unwrap(), "Makefile.scpt");
    }

    #[test]
    fn test_output_name_rejects_bare_parent() {
        assert!(output_name(Path::new("..")).is_err());
    }

    #[test]
    fn test_process_path_missing_file() {
        let delays = DelayRange::new(0, 3).unwrap();
        let err = process_path(Path::new("/nonexistent/input.txt"), &delays)
            .err()
            .unwrap()
            .to_string();
        assert!(err.contains("Failed to read input file"), "got: {err}");
    }

    #[test]
    fn test_list_dir_skips_hidden_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.txt", ".hidden"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let paths = list_dir(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_list_dir_missing_directory() {
        assert!(list_dir(Path::new("/nonexistent/dir")).is_err());
    }
}
