//! Test support: an in-memory [`FileSystem`](crate::io::FileSystem) and
//! sample input documents.
//!
//! ```rust,ignore
//! use jsbindgen::testkit::{fixtures, MemoryFileSystem};
//!
//! let fs = MemoryFileSystem::new()
//!     .with_file("cocos2d.bridgesupport", fixtures::BRIDGESUPPORT)
//!     .with_file("hierarchy.txt", fixtures::HIERARCHY);
//! ```

pub mod fixtures;
pub mod memory_fs;

pub use memory_fs::MemoryFileSystem;
