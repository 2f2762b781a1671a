//! Input file parsers. Both work on in-memory text; reading the files is
//! the caller's job.

pub mod bridgesupport;
pub mod hierarchy;
pub mod literal;

pub use bridgesupport::parse_bridgesupport;
pub use hierarchy::parse_hierarchy;
