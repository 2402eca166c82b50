//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with mock implementations.

use std::io;
use std::path::Path;

use tracing::warn;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write string content to file, creating or truncating it.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Names of the entries in a directory, in the order the OS reports them.
    ///
    /// Entries whose name is not valid UTF-8 are skipped.
    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        std::fs::write(path, content)
    }

    fn read_dir_names(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            match entry?.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => warn!("skipping non UTF-8 entry {:?} in {}", raw, path.display()),
            }
        }
        Ok(names)
    }
}
