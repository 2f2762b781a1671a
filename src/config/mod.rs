//! Generator configuration.
//!
//! Values come from `.jsbindgen.toml` (found by walking up from the working
//! directory, or named with `--config`), then command-line flags override
//! them.

mod core;
mod loader;

pub use self::core::BindgenConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
