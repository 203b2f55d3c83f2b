//! Virtual File System Implementation
//!
//! An immutable map from absolute directory path to directory node. Leaf
//! files only exist as children of their directory; every directory child
//! is expected to have its own entry keyed by its absolute path.

use indexmap::IndexMap;

use super::types::*;

/// Immutable in-memory directory tree.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    home: String,
    dirs: IndexMap<String, DirectoryNode>,
}

impl VirtualFs {
    /// Start a tree whose home is `home`. Trailing slashes are dropped from
    /// every path handed to the builder.
    pub fn builder(home: impl Into<String>) -> VirtualFsBuilder {
        VirtualFsBuilder {
            home: normalize(&home.into()),
            dirs: IndexMap::new(),
        }
    }

    /// The path `cd` and `cd ~` return to.
    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn contains_dir(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    /// Look up a directory by absolute path.
    pub fn resolve(&self, path: &str) -> Result<&DirectoryNode, FsError> {
        self.dirs.get(path).ok_or_else(|| FsError::NotFound { path: path.to_string() })
    }

    /// Children of a directory in insertion order.
    pub fn list_children(&self, path: &str) -> Result<Vec<ListedEntry>, FsError> {
        let node = self.resolve(path)?;
        Ok(node
            .children
            .iter()
            .map(|(name, entry)| ListedEntry {
                name: name.clone(),
                kind: entry.kind,
                size: entry.size.clone(),
            })
            .collect())
    }

    /// Compute the directory `cd <target>` lands in from `current`.
    ///
    /// Rules, first match wins:
    /// - empty or `~`: home
    /// - `..`: drop the last segment, never going shallower than home
    /// - `/abs`: must be a known directory
    /// - `name`: must be a directory child of `current` with its own node
    pub fn change_directory(&self, current: &str, target: &str) -> Result<String, FsError> {
        if target.is_empty() || target == "~" {
            return Ok(self.home.clone());
        }

        if target == ".." {
            let mut parts: Vec<&str> = current.split('/').filter(|p| !p.is_empty()).collect();
            if parts.len() > self.floor_depth() {
                parts.pop();
                return Ok(format!("/{}", parts.join("/")));
            }
            return Ok(current.to_string());
        }

        if target.starts_with('/') {
            let path = normalize(target);
            if self.dirs.contains_key(&path) {
                return Ok(path);
            }
            if self.is_file(target) {
                return Err(FsError::NotDirectory { path: target.to_string() });
            }
            return Err(FsError::NotFound { path: target.to_string() });
        }

        let not_found = || FsError::NotFound { path: target.to_string() };
        let node = self.dirs.get(current).ok_or_else(not_found)?;
        match node.child(target) {
            Some(entry) if entry.kind.is_directory() => {
                let joined = join(current, target);
                if self.dirs.contains_key(&joined) {
                    Ok(joined)
                } else {
                    Err(not_found())
                }
            }
            Some(_) => Err(FsError::NotDirectory { path: target.to_string() }),
            None => Err(not_found()),
        }
    }

    /// Directory children that have no node of their own.
    pub fn dangling_directories(&self) -> Vec<String> {
        let mut dangling = Vec::new();
        for (path, node) in &self.dirs {
            for (name, entry) in &node.children {
                let child = join(path, name);
                if entry.kind.is_directory() && !self.dirs.contains_key(&child) {
                    dangling.push(child);
                }
            }
        }
        dangling
    }

    fn floor_depth(&self) -> usize {
        self.home.split('/').filter(|p| !p.is_empty()).count()
    }

    fn is_file(&self, path: &str) -> bool {
        let Some((parent, name)) = path.rsplit_once('/') else {
            return false;
        };
        let parent = if parent.is_empty() { "/" } else { parent };
        self.dirs
            .get(parent)
            .and_then(|node| node.child(name))
            .map_or(false, |entry| !entry.kind.is_directory())
    }
}

/// Builder collecting directory nodes before freezing the tree.
pub struct VirtualFsBuilder {
    home: String,
    dirs: IndexMap<String, DirectoryNode>,
}

impl VirtualFsBuilder {
    /// Add (or replace) the directory at `path` with the given children.
    pub fn dir<I, S>(mut self, path: impl Into<String>, children: I) -> Self
    where
        I: IntoIterator<Item = (S, DirEntry)>,
        S: Into<String>,
    {
        let node = DirectoryNode {
            children: children.into_iter().map(|(n, e)| (n.into(), e)).collect(),
        };
        self.dirs.insert(normalize(&path.into()), node);
        self
    }

    pub fn build(self) -> VirtualFs {
        let fs = VirtualFs { home: self.home, dirs: self.dirs };
        for path in fs.dangling_directories() {
            log::warn!("directory entry {} has no node; cd into it will fail", path);
        }
        fs
    }
}

/// Child path of `dir`, without doubling the separator under `/`.
pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Drop trailing slashes, keeping a bare `/`.
pub fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
