//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use reeldocs_core::{
    application::ports::Filesystem,
    error::{DocsError, DocsResult},
};

/// In-memory filesystem for testing.
///
/// Directories must be created before files are written into them, like on
/// a real disk.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Create parent directories and write a file in one step (testing
    /// helper for seeding fixtures).
    pub fn seed(&self, path: &Path, content: &str) -> DocsResult<()> {
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }
        self.write_file(path, content)
    }

    fn read(&self, path: &Path) -> DocsResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| lock_poisoned(path))
    }

    fn write(&self, path: &Path) -> DocsResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| lock_poisoned(path))
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => self.directories.contains(parent),
            _ => true,
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> DocsResult<String> {
        self.read(path)?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> DocsResult<()> {
        let mut inner = self.write(path)?;

        if !inner.parent_exists(path) {
            return Err(DocsError::Filesystem {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            });
        }
        if inner.directories.contains(path) {
            return Err(DocsError::Filesystem {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            });
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> DocsResult<()> {
        let mut inner = self.write(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(DocsError::Filesystem {
                    path: current,
                    reason: "Not a directory".into(),
                });
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> DocsResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    fn remove_file(&self, path: &Path) -> DocsResult<()> {
        self.write(path)?
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn remove_dir_all(&self, path: &Path) -> DocsResult<()> {
        let mut inner = self.write(path)?;

        if !inner.directories.contains(path) {
            return Err(not_found(path));
        }
        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn find_files(&self, root: &Path, suffix: &str) -> DocsResult<Vec<PathBuf>> {
        let inner = self.read(root)?;
        let found = inner
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .filter(|p| {
                p.file_name()
                    .is_some_and(|name| name.to_string_lossy().ends_with(suffix))
            })
            .cloned()
            .collect();
        Ok(found)
    }
}

fn not_found(path: &Path) -> DocsError {
    DocsError::Filesystem {
        path: path.to_path_buf(),
        reason: "No such file or directory".into(),
    }
}

fn lock_poisoned(path: &Path) -> DocsError {
    DocsError::Filesystem {
        path: path.to_path_buf(),
        reason: "In-memory filesystem lock poisoned".into(),
    }
}
