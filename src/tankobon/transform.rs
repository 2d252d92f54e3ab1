//! # Rename plans
//!
//! A [`Transform`] mirrors the directory tree: each entry pairs the current name with
//! the new one. Entries without a new name (the series root) keep their name.
//!
//! Plans are applied children first, so every rename happens while its parent still
//! has the old name. Paths are always built from old names.

use crate::error::Result;
use crate::store::DirStore;
use std::path::{Path, PathBuf};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

const INDENT: &str = "    ";
const ARROW: &str = " ==> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    old: String,
    new: Option<String>,
    children: Vec<Transform>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// Old and new name are the same directory
    Unchanged,
    /// Dry run: would be renamed
    Planned,
    Moved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: PathBuf,
    pub to: PathBuf,
    pub status: MoveStatus,
}

impl MoveRecord {
    /// Shell form of the rename.
    pub fn command(&self) -> String {
        format!("mv '{}' '{}';", self.from.display(), self.to.display())
    }
}

impl Transform {
    pub fn new(old: impl Into<String>, new: Option<String>) -> Self {
        Self {
            old: old.into(),
            new,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<Transform>) -> Self {
        self.children = children;
        self
    }

    pub fn old(&self) -> &str {
        &self.old
    }

    pub fn new_name(&self) -> Option<&str> {
        self.new.as_deref()
    }

    pub fn children(&self) -> &[Transform] {
        &self.children
    }

    /// Rows of old and new names, indented by depth, in pre-order.
    pub fn columns(&self) -> Vec<(String, String)> {
        let mut rows = Vec::new();
        self.collect_columns(0, &mut rows);
        rows
    }

    fn collect_columns(&self, depth: usize, rows: &mut Vec<(String, String)>) {
        let indent = INDENT.repeat(depth);
        let new = self.new.as_deref().unwrap_or(&self.old);
        rows.push((format!("{}{}", indent, self.old), format!("{}{}", indent, new)));
        for child in &self.children {
            child.collect_columns(depth + 1, rows);
        }
    }

    /// The plan as aligned `old ==> new` lines.
    pub fn report(&self) -> Vec<String> {
        let rows = self.columns();
        let width = rows.iter().map(|(old, _)| old.width()).max().unwrap_or(0);
        rows.into_iter()
            .map(|(old, new)| {
                let pad = " ".repeat(width - old.width());
                format!("{}{}{}{}", old, pad, ARROW, new)
            })
            .collect()
    }

    /// Rename every entry under `base`, deepest first.
    ///
    /// With `dry_run` nothing is touched and the renames are returned as planned.
    pub fn execute<S: DirStore>(
        &self,
        base: &Path,
        dry_run: bool,
        store: &mut S,
    ) -> Result<Vec<MoveRecord>> {
        let mut records = Vec::new();
        self.execute_into(base, dry_run, store, &mut records)?;
        Ok(records)
    }

    fn execute_into<S: DirStore>(
        &self,
        base: &Path,
        dry_run: bool,
        store: &mut S,
        records: &mut Vec<MoveRecord>,
    ) -> Result<()> {
        let old = base.join(&self.old);
        for child in &self.children {
            child.execute_into(&old, dry_run, store, records)?;
        }

        let Some(new_name) = &self.new else {
            return Ok(());
        };
        let new = base.join(new_name);
        let status = if store.same_entry(&old, &new)? {
            debug!("Same folders: '{}' '{}'", old.display(), new.display());
            MoveStatus::Unchanged
        } else if dry_run {
            debug!("Planned: '{}' '{}'", old.display(), new.display());
            MoveStatus::Planned
        } else {
            debug!("mv '{}' '{}'", old.display(), new.display());
            store.move_dir(&old, &new)?;
            MoveStatus::Moved
        };
        records.push(MoveRecord {
            from: old,
            to: new,
            status,
        });
        Ok(())
    }
}
