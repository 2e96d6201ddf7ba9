//! Configuration directory discovery

use super::sort_natural;
use crate::config::Target;
use crate::error::{MatrixError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every file named `marker` below `root`, in natural order
pub fn find_markers(root: &Path, marker: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(MatrixError::invalid(format!(
            "configuration root '{}' is not a directory",
            root.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| MatrixError::Discovery {
            root: root.to_path_buf(),
            message: e.to_string(),
        })?;
        if entry.file_type().is_file() && entry.file_name() == marker {
            paths.push(entry.into_path());
        }
    }

    sort_natural(&mut paths);
    Ok(paths)
}

/// Configuration directories ready for `target`, in natural order
pub fn discover(root: &Path, target: Target) -> Result<Vec<PathBuf>> {
    let markers = find_markers(root, target.marker())?;
    tracing::debug!(
        "Found {} '{}' markers under {}",
        markers.len(),
        target.marker(),
        root.display()
    );

    Ok(markers
        .into_iter()
        .filter_map(|marker| marker.parent().map(Path::to_path_buf))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: PathBuf) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_discover_build_in_natural_order() {
        let dir = TempDir::new().unwrap();
        for name in ["cfg10", "cfg2", "cfg1"] {
            touch(dir.path().join(name).join("parameters.h"));
        }
        // no marker, must be ignored
        fs::create_dir_all(dir.path().join("cfg3")).unwrap();

        let dirs = discover(dir.path(), Target::Build).unwrap();
        let names: Vec<_> = dirs
            .iter()
            .map(|d| d.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["cfg1", "cfg2", "cfg10"]);
    }

    #[test]
    fn test_discover_run_uses_artifact_marker() {
        let dir = TempDir::new().unwrap();
        touch(dir.path().join("a1").join("parameters.h"));
        touch(dir.path().join("a2").join("parameters.h"));
        touch(dir.path().join("a2").join("benchmark"));

        let dirs = discover(dir.path(), Target::Run).unwrap();
        assert_eq!(dirs, vec![dir.path().join("a2")]);
    }

    #[test]
    fn test_discover_nested() {
        let dir = TempDir::new().unwrap();
        touch(dir.path().join("x").join("y").join("parameters.h"));
        let dirs = discover(dir.path(), Target::Build).unwrap();
        assert_eq!(dirs, vec![dir.path().join("x").join("y")]);
    }

    #[test]
    fn test_missing_root_is_invalid() {
        let dir = TempDir::new().unwrap();
        let err = discover(&dir.path().join("nope"), Target::Build).unwrap_err();
        assert!(err.is_selection_error());
    }
}
