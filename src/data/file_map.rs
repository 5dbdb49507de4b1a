//! Insertion-ordered file map.
//!
//! Iteration order decides which page a collection entry lands on, so the
//! order is part of the map's contract rather than an accident of hashing.

use rustc_hash::FxHashMap;

use super::entry::FileEntry;

/// The pipeline's in-memory output files, keyed by path.
///
/// Iterates in insertion order. Replacing the entry of an existing key keeps
/// the key at its original position.
#[derive(Debug, Clone, Default)]
pub struct FileMap {
    entries: Vec<(String, FileEntry)>,
    index: FxHashMap<String, usize>,
}

impl FileMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.index.get(path).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut FileEntry> {
        self.index.get(path).map(|&i| &mut self.entries[i].1)
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, path: impl Into<String>, entry: FileEntry) -> Option<FileEntry> {
        let path = path.into();
        if let Some(&i) = self.index.get(&path) {
            return Some(std::mem::replace(&mut self.entries[i].1, entry));
        }
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, entry));
        None
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileEntry)> {
        self.entries.iter().map(|(path, entry)| (path.as_str(), entry))
    }
}

impl IntoIterator for FileMap {
    type Item = (String, FileEntry);
    type IntoIter = std::vec::IntoIter<(String, FileEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, FileEntry)> for FileMap {
    fn from_iter<I: IntoIterator<Item = (K, FileEntry)>>(iter: I) -> Self {
        let mut files = Self::new();
        for (path, entry) in iter {
            files.insert(path, entry);
        }
        files
    }
}

impl<K: Into<String>> Extend<(K, FileEntry)> for FileMap {
    fn extend<I: IntoIterator<Item = (K, FileEntry)>>(&mut self, iter: I) {
        for (path, entry) in iter {
            self.insert(path, entry);
        }
    }
}
