//! Content Store
//!
//! Flat filename -> text mapping read by `cat`. Lookup ignores the directory
//! a file is listed under, so two files with the same name share content.

use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::errors::ShellError;

/// What reading a file yields.
#[derive(Debug, Clone)]
pub enum ContentEntry {
    /// Same text every time.
    Static(String),
    /// One entry picked at random on every read.
    Pool(Vec<String>),
}

#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    entries: IndexMap<String, ContentEntry>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file. A later insert under the same name replaces the earlier one.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(name.into(), ContentEntry::Static(text.into()));
    }

    pub fn insert_pool<I, S>(&mut self, name: impl Into<String>, pool: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pool = pool.into_iter().map(Into::into).collect();
        self.entries.insert(name.into(), ContentEntry::Pool(pool));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Read a file by bare name.
    pub fn read<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Result<String, ShellError> {
        let not_found = || ShellError::FileNotFound {
            command: "cat".to_string(),
            name: name.to_string(),
        };
        match self.entries.get(name).ok_or_else(not_found)? {
            ContentEntry::Static(text) => Ok(text.clone()),
            ContentEntry::Pool(pool) => pool.choose(rng).cloned().ok_or_else(not_found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_read_static() {
        let mut store = ContentStore::new();
        store.insert("a.txt", "hello");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(store.read("a.txt", &mut rng).unwrap(), "hello");
    }

    #[test]
    fn test_read_missing() {
        let store = ContentStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        let err = store.read("nope", &mut rng).unwrap_err();
        assert_eq!(err.to_string(), "cat: nope: No such file or directory");
    }

    #[test]
    fn test_pool_reads_vary() {
        let mut store = ContentStore::new();
        store.insert_pool("s.txt", ["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(7);
        let seen: std::collections::HashSet<String> =
            (0..64).map(|_| store.read("s.txt", &mut rng).unwrap()).collect();
        assert!(seen.len() > 1);
        assert!(seen.iter().all(|s| ["a", "b", "c", "d"].contains(&s.as_str())));
    }

    #[test]
    fn test_later_insert_wins() {
        let mut store = ContentStore::new();
        store.insert("dup.txt", "first");
        store.insert("dup.txt", "second");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(store.read("dup.txt", &mut rng).unwrap(), "second");
        assert_eq!(store.names().count(), 1);
    }
}
