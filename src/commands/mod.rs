pub mod generate;
pub mod init;
pub mod summary;

pub use generate::{run_generate, ClassReport, GenerateConfig, GenerationReport};
