//! Driven (output) ports - implemented by infrastructure.

use std::path::{Path, PathBuf};

use crate::error::DocsResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `reeldocs_adapters::LocalFilesystem` (production)
/// - `reeldocs_adapters::MemoryFilesystem` (testing)
///
/// Every method maps I/O failures to [`crate::error::DocsError::Filesystem`].
/// Existence probes never fail; an unreadable path reports `false`.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole UTF-8 file.
    fn read_to_string(&self, path: &Path) -> DocsResult<String>;

    /// Write content to a file, replacing it entirely.
    fn write_file(&self, path: &Path, content: &str) -> DocsResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> DocsResult<()>;

    /// Copy a file, overwriting the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> DocsResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> DocsResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> DocsResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Every file under `root` (recursively) whose name ends with `suffix`.
    fn find_files(&self, root: &Path, suffix: &str) -> DocsResult<Vec<PathBuf>>;
}
