use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::BindgenConfig;
use crate::errors::BindgenError;

pub const CONFIG_FILE_NAME: &str = ".jsbindgen.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<BindgenConfig, String> {
    let config = toml::from_str::<BindgenConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config.validate()?;
    Ok(config)
}

/// Make a relative `output_dir` relative to the directory holding the
/// config file, so a config found in an ancestor directory still points at
/// the same place.
pub(crate) fn anchor_to_config_dir(mut config: BindgenConfig, config_path: &Path) -> BindgenConfig {
    if config.output_dir.is_relative() {
        if let Some(dir) = config_path.parent() {
            config.output_dir = dir.join(&config.output_dir);
        }
    }
    config
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<BindgenConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(anchor_to_config_dir(config, config_path))
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search the working directory and its ancestors for a config file.
pub fn load_config() -> BindgenConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return BindgenConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            BindgenConfig::default()
        })
}

/// Load an explicitly named config file. Unlike discovery, any problem is fatal.
pub fn load_config_from(path: &Path) -> Result<BindgenConfig, BindgenError> {
    let contents = read_config_file(path)
        .map_err(|e| BindgenError::io("Failed to read config file", path, e))?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| BindgenError::config(format!("{} ({})", e, path.display())))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(anchor_to_config_dir(config, path))
}
