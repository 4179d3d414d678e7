//! File storage behind the file routes.
//!
//! # Data Flow
//! ```text
//! handlers/files.rs
//!     → FileStore (is_file / exists / read / create)
//!     → disk.rs   (serving directory on the local filesystem)
//!     → memory.rs (in-process map, for tests and embedding)
//! ```
//!
//! # Design Decisions
//! - Handlers never touch the filesystem directly
//! - `create` refuses to overwrite: it fails with `AlreadyExists`
//! - Writes are not atomic; a crash mid-write can leave a partial file

pub mod disk;
pub mod memory;

use std::io;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// A flat namespace of files addressed by name.
pub trait FileStore: Send + Sync + std::fmt::Debug {
    /// True if `name` resolves to an existing regular file.
    fn is_file(&self, name: &str) -> bool;

    /// True if anything (file or directory) exists under `name`.
    fn exists(&self, name: &str) -> bool;

    /// Read the whole file into memory.
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Create a new file holding `contents`.
    ///
    /// Fails with [`io::ErrorKind::AlreadyExists`] if the name is taken.
    fn create(&self, name: &str, contents: &[u8]) -> io::Result<()>;
}
