//! Expands CLI path arguments into the list of IDL files to parse.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File extension searched for inside directories.
pub const IDL_EXTENSION: &str = "thrift";

/// Files named directly are kept whatever their extension. Directories are
/// walked recursively for `*.thrift` files, sorted per directory so output
/// order is deterministic.
pub fn collect_idl_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for root in paths {
        if !root.is_dir() {
            files.push(root.clone());
            continue;
        }

        let mut found = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry?;
            if entry.file_type().is_file() && is_idl_file(entry.path()) {
                found.push(entry.path().to_path_buf());
            }
        }
        found.sort();
        log::debug!("found {} IDL files under {}", found.len(), root.display());
        files.extend(found);
    }
    Ok(files)
}

fn is_idl_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == IDL_EXTENSION)
}
