//! Typed records for the two inputs: the class hierarchy and the
//! BridgeSupport method metadata. Both are immutable once loaded.

pub mod hierarchy;
pub mod metadata;
pub mod selector;

pub use hierarchy::{Hierarchy, HierarchyEntry};
pub use metadata::{ClassMetadata, Metadata, MethodSignature, TypeRef};
pub use selector::Selector;
