//! Production implementation of [`FileSystem`](crate::io::traits::FileSystem).
//!
//! ```rust,ignore
//! use jsbindgen::io::real::RealFileSystem;
//! use jsbindgen::io::traits::FileSystem;
//!
//! let fs = RealFileSystem::new();
//! let content = fs.read_to_string(Path::new("cocos2d-mac.bridgesupport"))?;
//! ```

use crate::errors::BindgenError;
use crate::io::traits::FileSystem;
use std::fs;
use std::path::Path;

/// Delegates directly to `std::fs`.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, BindgenError> {
        fs::read_to_string(path).map_err(|e| BindgenError::io("Failed to read file", path, e))
    }

    fn write(&self, path: &Path, content: &str) -> Result<(), BindgenError> {
        fs::write(path, content).map_err(|e| BindgenError::io("Failed to write file", path, e))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), BindgenError> {
        fs::create_dir_all(path)
            .map_err(|e| BindgenError::io("Failed to create directory", path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
