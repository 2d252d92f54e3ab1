use super::DirStore;
use crate::error::{Result, TankobonError};
use glob::Pattern;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Default, Clone)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        Self
    }
}

impl DirStore for FsStore {
    fn list_subdirs(&self, path: &Path, pattern: &Pattern) -> Result<Vec<String>> {
        if !path.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(path).map_err(TankobonError::Io)? {
            let entry = entry.map_err(TankobonError::Io)?;
            if !entry.path().is_dir() {
                continue;
            }
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("Ignoring non UTF-8 directory name {:?}", raw);
                    continue;
                }
            };
            if pattern.matches(&name) {
                names.push(name);
            }
        }
        names.sort();
        Ok(names)
    }

    fn move_dir(&mut self, from: &Path, to: &Path) -> Result<()> {
        fs::rename(from, to).map_err(TankobonError::Io)
    }

    fn same_entry(&self, a: &Path, b: &Path) -> Result<bool> {
        let (meta_a, meta_b) = match (fs::metadata(a), fs::metadata(b)) {
            (Ok(meta_a), Ok(meta_b)) => (meta_a, meta_b),
            _ => return Ok(false),
        };
        Ok(same_file(a, &meta_a, b, &meta_b))
    }
}

#[cfg(unix)]
fn same_file(_a: &Path, meta_a: &fs::Metadata, _b: &Path, meta_b: &fs::Metadata) -> bool {
    use std::os::unix::fs::MetadataExt;
    meta_a.dev() == meta_b.dev() && meta_a.ino() == meta_b.ino()
}

#[cfg(not(unix))]
fn same_file(a: &Path, _meta_a: &fs::Metadata, b: &Path, _meta_b: &fs::Metadata) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn any() -> Pattern {
        Pattern::new("*").unwrap()
    }

    #[test]
    fn test_lists_sorted_directories_only() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();

        let names = FsStore::new().list_subdirs(dir.path(), &any()).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_pattern_filters_names() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Vol 1")).unwrap();
        fs::create_dir(dir.path().join("extras")).unwrap();

        let pattern = Pattern::new("Vol*").unwrap();
        let names = FsStore::new().list_subdirs(dir.path(), &pattern).unwrap();
        assert_eq!(names, vec!["Vol 1"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"Vol \xff"))).unwrap();
        fs::create_dir(dir.path().join("Vol 2")).unwrap();

        let names = FsStore::new().list_subdirs(dir.path(), &any()).unwrap();
        assert_eq!(names, vec!["Vol 2"]);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let dir = TempDir::new().unwrap();
        let names = FsStore::new()
            .list_subdirs(&dir.path().join("nope"), &any())
            .unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_move_and_same_entry() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("old");
        let to = dir.path().join("new");
        fs::create_dir(&from).unwrap();

        let mut store = FsStore::new();
        assert!(store.same_entry(&from, &from).unwrap());
        assert!(!store.same_entry(&from, &to).unwrap());

        store.move_dir(&from, &to).unwrap();
        assert!(!from.exists());
        assert!(to.is_dir());
    }
}
