// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod observability;
pub mod parsers;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    ClassMetadata, Hierarchy, HierarchyEntry, Metadata, MethodSignature, Selector, TypeRef,
};

pub use crate::errors::{BindgenError, ErrorCode};

pub use crate::analysis::{
    classify_class, resolve_binding_set, ClassPlan, Rejection, RootExclusion, ValueCategory,
};

pub use crate::codegen::{generate_class, Banner, ClassBindings, GeneratedArtifact, Naming};

pub use crate::commands::{run_generate, GenerateConfig, GenerationReport};

pub use crate::parsers::{parse_bridgesupport, parse_hierarchy};
