//! ARFF file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all ARFF files in a directory.
///
/// The scan is non-recursive; the extension match is case-insensitive.
/// Returns files sorted by filename.
pub fn list_arff_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let is_arff = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("arff"))
            .unwrap_or(false);

        if is_arff {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        for name in &["iris.arff", "Weather.ARFF", "notes.txt", "vote.arff"] {
            let path = dir.path().join(name);
            std::fs::write(&path, "@relation r\n@data\n").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.arff")).unwrap();

        dir
    }

    #[test]
    fn lists_arff_files_sorted_by_name() {
        let dir = create_test_dir();
        let files = list_arff_files(dir.path()).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|path| path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Weather.ARFF", "iris.arff", "vote.arff"]);
    }

    #[test]
    fn missing_directory_is_a_typed_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent");
        let error = list_arff_files(&missing).unwrap_err();
        assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
    }
}
