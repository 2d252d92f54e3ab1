//! # Storage Layer
//!
//! The rename engine never touches the filesystem directly. Everything it needs from
//! the outside world goes through the [`DirStore`] trait:
//!
//! - listing the subdirectories of a directory that match a glob pattern
//! - moving a directory to a new path
//! - telling whether two paths are the same entry (already correctly named)
//!
//! ## Implementations
//!
//! - [`fs::FsStore`]: the real filesystem
//! - [`memory::InMemoryStore`]: a set of directory paths, for fast isolated tests
//!
//! Only directories are modelled; files inside the tree are ignored.

use crate::error::Result;
use glob::Pattern;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface to the directory tree being organized.
pub trait DirStore {
    /// Names of the subdirectories of `path` matching `pattern`, sorted.
    ///
    /// A missing directory lists as empty.
    fn list_subdirs(&self, path: &Path, pattern: &Pattern) -> Result<Vec<String>>;

    /// Move the directory `from` to `to`, replacing `to` if the platform allows it.
    fn move_dir(&mut self, from: &Path, to: &Path) -> Result<()>;

    /// True when both paths exist and refer to the same directory.
    fn same_entry(&self, a: &Path, b: &Path) -> Result<bool>;
}
