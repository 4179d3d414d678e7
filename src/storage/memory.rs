//! In-memory store.

use std::io;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::storage::FileStore;

/// Files kept in a concurrent map. Every entry is a regular file.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: DashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, replacing any previous contents.
    pub fn insert(&self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.files.insert(name.into(), contents.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileStore for MemoryStore {
    fn is_file(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        self.files
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{} not found", name)))
    }

    fn create(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        match self.files.entry(name.to_string()) {
            Entry::Occupied(_) => Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", name),
            )),
            Entry::Vacant(slot) => {
                slot.insert(contents.to_vec());
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_is_exclusive() {
        let store = MemoryStore::new();
        store.create("x", b"1").unwrap();
        assert_eq!(
            store.create("x", b"2").unwrap_err().kind(),
            io::ErrorKind::AlreadyExists
        );
        assert_eq!(store.read("x").unwrap(), b"1");
    }

    #[test]
    fn missing_file_reads_as_not_found() {
        let store = MemoryStore::new();
        assert_eq!(store.read("nope").unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
