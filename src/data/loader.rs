//! Shared RON file helpers used by every data registry.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::DataLoadError;

/// Root directory of all authored data files.
pub const DATA_ROOT: &str = "assets/data";

/// Read and parse a single RON file.
pub fn read_ron_file<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// List all `.ron` files in a directory in [`file_order_key`] order.
///
/// Sorting keeps level numbering stable across platforms.
pub fn ron_files_in(dir: &Path) -> Result<Vec<PathBuf>, DataLoadError> {
    if !dir.exists() {
        return Err(DataLoadError::FileNotFound(dir.display().to_string()));
    }

    let entries = fs::read_dir(dir).map_err(|e| DataLoadError::ReadError {
        path: dir.display().to_string(),
        details: e.to_string(),
    })?;

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "ron"))
        .collect();
    files.sort_by_cached_key(|path| file_order_key(path));
    Ok(files)
}

/// Sort key that compares trailing numbers numerically, so `level2`
/// comes before `level10`. Ids without a number sort first.
pub fn file_order_key(path: &Path) -> (String, Option<u64>, String) {
    let id = data_id(path);
    let prefix = id.trim_end_matches(|c: char| c.is_ascii_digit());
    let number = id[prefix.len()..].parse().ok();
    (prefix.to_string(), number, id)
}

/// Registry key for a data file: the file stem without any `.kind` suffix
/// (`basic.brick.ron` and `basic.ron` both become `basic`).
pub fn data_id(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    stem.split('.').next().unwrap_or(stem).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_id_strips_kind_suffix() {
        assert_eq!(data_id(Path::new("assets/data/bricks/basic.brick.ron")), "basic");
        assert_eq!(data_id(Path::new("assets/data/levels/level2.ron")), "level2");
    }

    #[test]
    fn numbered_files_sort_numerically() {
        let mut files: Vec<PathBuf> = ["level10.ron", "level2.ron", "intro.ron", "level1.ron", "level.ron"]
            .iter()
            .map(|name| Path::new("assets/data/levels").join(name))
            .collect();
        files.sort_by_cached_key(|path| file_order_key(path));
        let ids: Vec<String> = files.iter().map(|path| data_id(path)).collect();
        assert_eq!(ids, ["intro", "level", "level1", "level2", "level10"]);
    }

    #[test]
    fn missing_file_is_reported() {
        let result: Result<u32, _> = read_ron_file(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound(_))));
    }
}
