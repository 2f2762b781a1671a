use crate::config::CONFIG_FILE_NAME;
use crate::io::FileSystem;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# jsbindgen configuration

# Generated files are named <bindings_prefix><Class>.<extension>
bindings_prefix = "js_bindings_"
header_extension = "h"
implementation_extension = "mm"

# Generated proxy classes are named <proxy_prefix><Class>
proxy_prefix = "JSPROXY_"

# Root class whose proxy is written by hand
base_class = "NSObject"

# Ancestors with these prefixes are never generated
excluded_prefixes = ["NS"]

# Relative paths are resolved from the directory holding this file
output_dir = "."
"#;

/// Write a commented default `.jsbindgen.toml` into `dir`.
pub fn init_config<F: FileSystem>(fs: &F, dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if fs.exists(&config_path) && !force {
        anyhow::bail!(
            "Configuration file {} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs.write(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}
