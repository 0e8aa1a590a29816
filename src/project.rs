//! One-shot scan of a project root.
//!
//! Later checks ask the snapshot whether an entry exists instead of
//! touching the filesystem again.

use crate::error::{LintError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Broken symlinks, sockets and the like.
    Other,
}

impl EntryKind {
    pub fn describe(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "directory",
            EntryKind::Other => "special file",
        }
    }
}

#[derive(Debug, Clone)]
/// Entries found directly under the project root.
pub struct ProjectSnapshot {
    pub root: PathBuf,
    pub entries: BTreeMap<String, EntryKind>,
}

impl ProjectSnapshot {
    /// Scan `root`. Fails if it does not exist, is not a directory, or
    /// cannot be listed.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.exists() {
            return Err(LintError::ProjectNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(LintError::NotADirectory(root.to_path_buf()));
        }
        let mut entries = BTreeMap::new();
        for entry in fs::read_dir(root).map_err(|e| LintError::io(root, e))? {
            let entry = entry.map_err(|e| LintError::io(root, e))?;
            let path = entry.path();
            // metadata() follows symlinks, so a linked data/ counts as a directory
            let kind = match fs::metadata(&path) {
                Ok(m) if m.is_dir() => EntryKind::Dir,
                Ok(m) if m.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };
            entries.insert(entry.file_name().to_string_lossy().into_owned(), kind);
        }
        log::debug!("scanned {}: {} entries", root.display(), entries.len());
        Ok(ProjectSnapshot {
            root: root.to_path_buf(),
            entries,
        })
    }

    pub fn kind(&self, name: &str) -> Option<EntryKind> {
        self.entries.get(name).copied()
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.kind(name) == Some(EntryKind::File)
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
