//! In-memory [`FileSystem`] for driving the full pipeline in tests.

use crate::errors::BindgenError;
use crate::io::traits::FileSystem;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory file system.
///
/// Clones share storage, so a test can hand one clone to the generator and
/// inspect the written artifacts through another.
///
/// ```rust,ignore
/// let fs = MemoryFileSystem::new()
///     .with_file("hierarchy.txt", "{'CCNode': {'subclass': 'NSObject'}}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: Arc<RwLock<BTreeMap<PathBuf, String>>>,
    dirs: Arc<RwLock<BTreeSet<PathBuf>>>,
    read_only: bool,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path.into(), content.into());
        self
    }

    /// Make every write fail, to exercise output error handling.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .read()
            .expect("Lock poisoned")
            .get(path.as_ref())
            .cloned()
    }

    /// All file paths, sorted.
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files
            .read()
            .expect("Lock poisoned")
            .keys()
            .cloned()
            .collect()
    }

    fn denied(path: &Path) -> BindgenError {
        BindgenError::io(
            "Failed to write file",
            path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only file system"),
        )
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, BindgenError> {
        self.file(path).ok_or_else(|| {
            BindgenError::io(
                "Failed to read file",
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
            )
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), BindgenError> {
        if self.read_only {
            return Err(Self::denied(path));
        }
        self.files
            .write()
            .expect("Lock poisoned")
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), BindgenError> {
        if self.read_only {
            return Err(Self::denied(path));
        }
        self.dirs
            .write()
            .expect("Lock poisoned")
            .insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.read().expect("Lock poisoned").contains_key(path)
            || self.dirs.read().expect("Lock poisoned").contains(path)
    }
}
