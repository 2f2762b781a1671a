//! Text generation for one bound class.
//!
//! Nothing in this module touches the filesystem. [`generate_class`] returns
//! both artifacts as in-memory text and the driver decides where they go.

pub mod header;
pub mod implementation;
pub mod trampoline;

pub use header::emit_header;
pub use implementation::emit_implementation;

use crate::analysis::ClassPlan;
use crate::errors::Result;
use std::fmt::{self, Write};
use std::path::PathBuf;

/// Name derivation for generated files and symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Naming {
    bindings_prefix: String,
    proxy_prefix: String,
    base_class: String,
    header_extension: String,
    implementation_extension: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            bindings_prefix: "js_bindings_".to_string(),
            proxy_prefix: "JSPROXY_".to_string(),
            base_class: "NSObject".to_string(),
            header_extension: "h".to_string(),
            implementation_extension: "mm".to_string(),
        }
    }
}

impl Naming {
    pub fn new(
        bindings_prefix: impl Into<String>,
        proxy_prefix: impl Into<String>,
        base_class: impl Into<String>,
    ) -> Self {
        Self {
            bindings_prefix: bindings_prefix.into(),
            proxy_prefix: proxy_prefix.into(),
            base_class: base_class.into(),
            ..Self::default()
        }
    }

    pub fn with_extensions(mut self, header: impl Into<String>, implementation: impl Into<String>) -> Self {
        self.header_extension = header.into();
        self.implementation_extension = implementation.into();
        self
    }

    /// `CCNode` -> `JSPROXY_CCNode`
    pub fn proxy(&self, class_name: &str) -> String {
        format!("{}{}", self.proxy_prefix, class_name)
    }

    /// Root proxy every trampoline casts the private slot to.
    pub fn base_class(&self) -> &str {
        &self.base_class
    }

    pub fn header_file(&self, class_name: &str) -> String {
        format!("{}{}.{}", self.bindings_prefix, class_name, self.header_extension)
    }

    pub fn implementation_file(&self, class_name: &str) -> String {
        format!(
            "{}{}.{}",
            self.bindings_prefix, class_name, self.implementation_extension
        )
    }
}

/// The "do not edit" comment at the top of every generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    generator: String,
    date: String,
}

impl Banner {
    pub fn new(generator: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            date: date.into(),
        }
    }

    /// Banner stamped with today's local date.
    pub fn today(generator: impl Into<String>) -> Self {
        let date = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
        Self::new(generator, date)
    }

    pub fn write_to(&self, out: &mut String) -> fmt::Result {
        writeln!(out, "/*")?;
        writeln!(out, "* AUTOGENERATED FILE. DO NOT EDIT IT")?;
        writeln!(out, "* Generated by {} on {}", self.generator, self.date)?;
        writeln!(out, "*/")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Header,
    Implementation,
}

/// One generated file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// File name relative to the output directory.
    pub path: PathBuf,
    pub class_name: String,
    pub kind: ArtifactKind,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct ClassBindings {
    pub header: GeneratedArtifact,
    pub implementation: GeneratedArtifact,
    pub plan: ClassPlan,
}

impl ClassBindings {
    pub fn artifacts(&self) -> [&GeneratedArtifact; 2] {
        [&self.header, &self.implementation]
    }
}

/// Build both artifacts for a classified class.
pub fn generate_class(
    plan: ClassPlan,
    parent_name: &str,
    naming: &Naming,
    banner: &Banner,
) -> Result<ClassBindings> {
    let class_name = plan.class_name.clone();

    let mut header = String::new();
    emit_header(&mut header, &class_name, parent_name, naming, banner)?;

    let mut implementation = String::new();
    emit_implementation(&mut implementation, &plan, parent_name, naming, banner)?;

    Ok(ClassBindings {
        header: GeneratedArtifact {
            path: PathBuf::from(naming.header_file(&class_name)),
            class_name: class_name.clone(),
            kind: ArtifactKind::Header,
            content: header,
        },
        implementation: GeneratedArtifact {
            path: PathBuf::from(naming.implementation_file(&class_name)),
            class_name,
            kind: ArtifactKind::Implementation,
            content: implementation,
        },
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_naming() {
        let naming = Naming::default();
        assert_eq!(naming.proxy("CCNode"), "JSPROXY_CCNode");
        assert_eq!(naming.header_file("CCNode"), "js_bindings_CCNode.h");
        assert_eq!(naming.implementation_file("CCNode"), "js_bindings_CCNode.mm");
    }

    #[test]
    fn test_custom_naming() {
        let naming = Naming::new("gen_", "PX_", "Root").with_extensions("hpp", "m");
        assert_eq!(naming.proxy("Node"), "PX_Node");
        assert_eq!(naming.base_class(), "Root");
        assert_eq!(naming.header_file("Node"), "gen_Node.hpp");
        assert_eq!(naming.implementation_file("Node"), "gen_Node.m");
    }

    #[test]
    fn test_banner_date_format() {
        let banner = Banner::today("jsbindgen");
        let mut out = String::new();
        banner.write_to(&mut out).unwrap();
        let line = out.lines().nth(2).unwrap();
        let date = line.rsplit(' ').next().unwrap();
        assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_generate_class_paths() {
        let plan = ClassPlan {
            class_name: "CCLayer".into(),
            accepted: vec![],
            rejected: vec![],
        };
        let bindings =
            generate_class(plan, "CCNode", &Naming::default(), &Banner::new("t", "d")).unwrap();
        assert_eq!(bindings.header.path, PathBuf::from("js_bindings_CCLayer.h"));
        assert_eq!(bindings.implementation.kind, ArtifactKind::Implementation);
        assert!(bindings.implementation.content.contains("JS_FS_END"));
    }
}
