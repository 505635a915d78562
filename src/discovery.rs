//! Input discovery for CRC tables
//!
//! Inputs may name files, directories (scanned recursively for `*.csv`) or
//! glob patterns.

use crate::error::{CrcError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Check if a path has a `.csv` extension (any case)
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// All CSV files below `dir`, sorted by path
pub fn discover_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_file() && is_csv_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    debug!("Found {} CSV files in {}", files.len(), dir.display());
    Ok(files)
}

fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern).map_err(|source| CrcError::GlobPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path.map_err(|e| CrcError::Io(e.into_error()))?;
        if path.is_file() {
            files.push(path);
        } else if path.is_dir() {
            files.extend(discover_csv_files(&path)?);
        }
    }

    debug!("Pattern '{}' matched {} files", pattern, files.len());
    Ok(files)
}

/// Resolve CLI inputs into an ordered, de-duplicated list of files.
///
/// Files are kept in the order given; each directory or pattern expands in
/// sorted order at its position.
pub fn resolve_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        let path = Path::new(input);

        let found = if path.is_file() {
            vec![path.to_path_buf()]
        } else if path.is_dir() {
            discover_csv_files(path)?
        } else if is_glob_pattern(input) {
            expand_glob(input)?
        } else {
            return Err(CrcError::InputNotFound {
                path: path.to_path_buf(),
            });
        };

        for file in found {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    if files.is_empty() {
        return Err(CrcError::configuration("No CSV files found in inputs"));
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "Compound\n").unwrap();
    }

    #[test]
    fn test_is_csv_file() {
        assert!(is_csv_file(Path::new("table.csv")));
        assert!(is_csv_file(Path::new("TABLE.CSV")));
        assert!(!is_csv_file(Path::new("table.json")));
        assert!(!is_csv_file(Path::new("csv")));
    }

    #[test]
    fn test_directory_scan_is_recursive_and_sorted() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("b.csv"));
        touch(&dir.path().join("a.csv"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("activity").join("c.csv"));

        let files = discover_csv_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            names,
            vec![
                PathBuf::from("a.csv"),
                PathBuf::from("activity").join("c.csv"),
                PathBuf::from("b.csv"),
            ]
        );
    }

    #[test]
    fn test_resolve_mixed_inputs_deduplicates() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        touch(&a);
        touch(&b);

        let pattern = format!("{}/*.csv", dir.path().display());
        let inputs = vec![
            b.display().to_string(),
            pattern,
            dir.path().display().to_string(),
        ];

        let files = resolve_inputs(&inputs).unwrap();
        assert_eq!(files, vec![b, a]);
    }

    #[test]
    fn test_resolve_missing_input() {
        let err = resolve_inputs(&["/nonexistent/table.csv"]).unwrap_err();
        assert!(matches!(err, CrcError::InputNotFound { .. }));
    }

    #[test]
    fn test_resolve_empty_directory() {
        let dir = TempDir::new().unwrap();
        let err = resolve_inputs(&[dir.path().display().to_string()]).unwrap_err();
        assert!(matches!(err, CrcError::Configuration { .. }));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let err = resolve_inputs(&["tables/[.csv"]).unwrap_err();
        assert!(matches!(err, CrcError::GlobPattern { .. }));
    }
}
