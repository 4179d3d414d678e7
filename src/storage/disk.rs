//! Serving-directory store.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::storage::FileStore;

/// Resolves file names against a fixed root directory.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl FileStore for DiskStore {
    fn is_file(&self, name: &str) -> bool {
        self.resolve(name).is_file()
    }

    fn exists(&self, name: &str) -> bool {
        self.resolve(name).exists()
    }

    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(name))
    }

    fn create(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        let path = self.resolve(name);
        // create_new is O_EXCL: of two racing creators exactly one succeeds
        let mut file = OpenOptions::new().write(true).create_new(true).open(&path)?;
        file.write_all(contents)?;
        tracing::debug!(path = %path.display(), bytes = contents.len(), "File created");
        Ok(())
    }
}
