use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

/// Result of discovering source files.
pub struct ScanResult {
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively discover source files under `root`.
///
/// A file is kept when its extension is in `extensions` and no component of its
/// path contains an ignore marker (plain substring match, e.g. `node_modules`
/// or `.build`). Unreadable entries are skipped and counted, never fatal.
pub fn scan_files(
    root: &Path,
    extensions: &[String],
    ignore_markers: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let path_str = path.to_string_lossy();
        if ignore_markers.iter().any(|m| path_str.contains(m.as_str())) {
            continue;
        }

        let has_source_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.iter().any(|e| e == ext));
        if has_source_extension {
            files.push(path.to_path_buf());
        }
    }

    // Deterministic processing and report order.
    files.sort();

    ScanResult {
        files,
        skipped_count,
    }
}
