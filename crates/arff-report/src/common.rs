//! Shared output-path helpers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Create the output directory if needed and return it.
pub fn ensure_output_dir(dir: &Path) -> Result<&Path> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Output path for a dataset: `<dir>/<name>.<ext>`.
pub fn output_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_name_and_extension() {
        let path = output_path(Path::new("/out"), "iris", "parquet");
        assert_eq!(path, PathBuf::from("/out/iris.parquet"));
    }
}
