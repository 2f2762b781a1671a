use crate::analysis::RootExclusion;
use crate::codegen::Naming;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure, read from `.jsbindgen.toml`.
///
/// ```toml
/// bindings_prefix = "js_bindings_"
/// proxy_prefix = "JSPROXY_"
/// excluded_prefixes = ["NS"]
/// output_dir = "bindings"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BindgenConfig {
    /// Prefix of generated file names
    pub bindings_prefix: String,

    /// Prefix of generated proxy class names
    pub proxy_prefix: String,

    /// Class whose proxy is hand-written and wraps every native object
    pub base_class: String,

    /// Classes starting with any of these prefixes already have bindings
    pub excluded_prefixes: Vec<String>,

    /// Where generated files are written
    pub output_dir: PathBuf,

    pub header_extension: String,

    pub implementation_extension: String,
}

impl Default for BindgenConfig {
    fn default() -> Self {
        Self {
            bindings_prefix: "js_bindings_".to_string(),
            proxy_prefix: "JSPROXY_".to_string(),
            base_class: "NSObject".to_string(),
            excluded_prefixes: vec!["NS".to_string()],
            output_dir: PathBuf::from("."),
            header_extension: "h".to_string(),
            implementation_extension: "mm".to_string(),
        }
    }
}

impl BindgenConfig {
    /// Reject values that would produce unusable identifiers or file names.
    pub fn validate(&self) -> Result<(), String> {
        if !is_identifier_fragment(&self.proxy_prefix) || self.proxy_prefix.is_empty() {
            return Err(format!(
                "proxy_prefix '{}' must be a non-empty C identifier prefix",
                self.proxy_prefix
            ));
        }
        if !is_identifier_fragment(&self.base_class) || self.base_class.is_empty() {
            return Err(format!("base_class '{}' is not a class name", self.base_class));
        }
        for (key, ext) in [
            ("header_extension", &self.header_extension),
            ("implementation_extension", &self.implementation_extension),
        ] {
            if ext.is_empty() || ext.contains(['.', '/', '\\']) {
                return Err(format!("{} '{}' must be a bare extension", key, ext));
            }
        }
        if self.bindings_prefix.contains(['/', '\\']) {
            return Err(format!(
                "bindings_prefix '{}' must not contain path separators",
                self.bindings_prefix
            ));
        }
        Ok(())
    }

    pub fn naming(&self) -> Naming {
        Naming::new(
            self.bindings_prefix.clone(),
            self.proxy_prefix.clone(),
            self.base_class.clone(),
        )
        .with_extensions(
            self.header_extension.clone(),
            self.implementation_extension.clone(),
        )
    }

    pub fn root_exclusion(&self) -> RootExclusion {
        RootExclusion::new(self.excluded_prefixes.clone())
    }
}

fn is_identifier_fragment(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
