use super::DirStore;
use crate::error::{Result, TankobonError};
use glob::Pattern;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A directory tree held as a set of paths.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    dirs: BTreeSet<PathBuf>,
    moves: Vec<(PathBuf, PathBuf)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all its ancestors.
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) {
        let mut current = Some(path.as_ref());
        while let Some(dir) = current {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            current = dir.parent();
        }
    }

    pub fn with_dirs<P: AsRef<Path>>(mut self, paths: &[P]) -> Self {
        for path in paths {
            self.add_dir(path);
        }
        self
    }

    pub fn exists<P: AsRef<Path>>(&self, path: P) -> bool {
        self.dirs.contains(path.as_ref())
    }

    /// Moves performed so far, in order.
    pub fn moves(&self) -> &[(PathBuf, PathBuf)] {
        &self.moves
    }
}

impl DirStore for InMemoryStore {
    fn list_subdirs(&self, path: &Path, pattern: &Pattern) -> Result<Vec<String>> {
        // BTreeSet iteration keeps the names sorted.
        Ok(self
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name().and_then(|n| n.to_str()))
            .filter(|name| pattern.matches(name))
            .map(str::to_string)
            .collect())
    }

    fn move_dir(&mut self, from: &Path, to: &Path) -> Result<()> {
        if !self.dirs.contains(from) {
            return Err(TankobonError::Store(format!(
                "no such directory: {}",
                from.display()
            )));
        }
        if self.dirs.iter().any(|d| d.parent() == Some(to)) {
            return Err(TankobonError::Store(format!(
                "target is not empty: {}",
                to.display()
            )));
        }
        self.dirs.remove(to);

        let moved: Vec<PathBuf> = self
            .dirs
            .iter()
            .filter(|d| d.starts_with(from))
            .cloned()
            .collect();
        for old in moved {
            self.dirs.remove(&old);
            match old.strip_prefix(from) {
                Ok(rest) if !rest.as_os_str().is_empty() => self.dirs.insert(to.join(rest)),
                _ => self.dirs.insert(to.to_path_buf()),
            };
        }
        self.moves.push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }

    fn same_entry(&self, a: &Path, b: &Path) -> Result<bool> {
        Ok(a == b && self.dirs.contains(a))
    }
}
