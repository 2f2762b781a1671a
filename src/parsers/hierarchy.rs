//! Hierarchy file loader.
//!
//! The file is a dict literal keyed by class name:
//!
//! ```text
//! {'CCNode': {'subclass': 'NSObject', 'protocols': []},
//!  'NSObject': {'subclass': None, 'protocols': ['NSObject']}}
//! ```

use super::literal::{parse_literal, Literal};
use crate::core::{Hierarchy, HierarchyEntry};
use crate::errors::{BindgenError, Result};

pub fn parse_hierarchy(input: &str) -> Result<Hierarchy> {
    let Literal::Dict(items) = parse_literal(input)? else {
        return Err(BindgenError::structure(
            "hierarchy file must contain a dict of class records",
        ));
    };

    let mut hierarchy = Hierarchy::new();
    for (key, record) in items {
        let class = key.as_str().ok_or_else(|| {
            BindgenError::structure(format!("class name must be a string, found {}", key.kind()))
        })?;
        if hierarchy.contains(class) {
            return Err(BindgenError::structure(format!(
                "class '{}' appears more than once",
                class
            )));
        }
        hierarchy.insert(parse_record(class, record)?);
    }
    Ok(hierarchy)
}

fn parse_record(class: &str, record: Literal) -> Result<HierarchyEntry> {
    let Literal::Dict(fields) = record else {
        return Err(BindgenError::structure(format!(
            "record for '{}' must be a dict, found {}",
            class,
            record.kind()
        )));
    };

    let mut superclass = None;
    let mut protocols = Vec::new();

    for (key, value) in fields {
        match key.as_str() {
            Some("subclass") => {
                superclass = match value {
                    Literal::None => None,
                    Literal::Str(s) => Some(s),
                    other => {
                        return Err(BindgenError::structure(format!(
                            "'subclass' of '{}' must be a string or None, found {}",
                            class,
                            other.kind()
                        )))
                    }
                }
            }
            Some("protocols") => protocols = parse_protocols(class, value)?,
            _ => {}
        }
    }

    Ok(HierarchyEntry::new(class, superclass.as_deref()).with_protocols(protocols))
}

fn parse_protocols(class: &str, value: Literal) -> Result<Vec<String>> {
    let invalid = || {
        BindgenError::structure(format!(
            "'protocols' of '{}' must be a list of strings",
            class
        ))
    };

    match value {
        Literal::None => Ok(Vec::new()),
        Literal::List(items) => items
            .into_iter()
            .map(|item| match item {
                Literal::Str(s) => Ok(s),
                _ => Err(invalid()),
            })
            .collect(),
        _ => Err(invalid()),
    }
}
