//! File System Types
//!
//! Core types for the virtual file system.

use indexmap::IndexMap;
use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory '{path}'")]
    NotFound { path: String },

    #[error("ENOTDIR: not a directory '{path}'")]
    NotDirectory { path: String },
}

/// Kind of a directory child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn is_directory(&self) -> bool {
        matches!(self, EntryKind::Directory)
    }

    /// Permission string shown by `ls -l`.
    pub fn permissions(&self) -> &'static str {
        match self {
            EntryKind::Directory => "drwxr-xr-x",
            EntryKind::File => "-rw-r--r--",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EntryKind::Directory => "📁",
            EntryKind::File => "📄",
        }
    }
}

/// A child entry of a directory. The size is display-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub kind: EntryKind,
    pub size: String,
}

impl DirEntry {
    pub fn file(size: impl Into<String>) -> Self {
        Self { kind: EntryKind::File, size: size.into() }
    }

    pub fn directory(size: impl Into<String>) -> Self {
        Self { kind: EntryKind::Directory, size: size.into() }
    }
}

/// A directory and its children, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    pub children: IndexMap<String, DirEntry>,
}

impl DirectoryNode {
    pub fn child(&self, name: &str) -> Option<&DirEntry> {
        self.children.get(name)
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub kind: EntryKind,
    pub size: String,
}
