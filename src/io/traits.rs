//! I/O trait definitions for binding generation.
//!
//! Parsing, classification and emission are pure; only the driver reads the
//! input files and writes the generated artifacts. It does so through
//! [`FileSystem`] so the whole pipeline can run against an in-memory
//! implementation in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use jsbindgen::io::traits::FileSystem;
//!
//! fn load_hierarchy<F: FileSystem>(fs: &F, path: &Path) -> Result<Hierarchy> {
//!     let text = fs.read_to_string(path)?;
//!     parse_hierarchy(&text)
//! }
//! ```

use crate::errors::BindgenError;
use std::path::Path;

/// File system operations trait.
pub trait FileSystem {
    /// Read a file's contents as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns `BindgenError::Io` if the file doesn't exist, can't be read,
    /// or isn't valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String, BindgenError>;

    /// Write content to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns `BindgenError::Io` if the file can't be created or written.
    fn write(&self, path: &Path, content: &str) -> Result<(), BindgenError>;

    /// Create a directory and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), BindgenError>;

    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}
