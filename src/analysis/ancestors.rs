//! Binding-set resolution.
//!
//! A subclass proxy is registered as a subclass of its parent's proxy, so
//! every ancestor of a requested class needs bindings too.

use crate::core::Hierarchy;
use crate::errors::{BindgenError, Result};
use std::collections::{BTreeSet, HashSet};

/// Walk superclass links from `class`, returning `class` followed by each
/// ancestor in order.
///
/// The walk stops at a class absent from the hierarchy or at a root. The
/// starting class is always part of the chain, known or not.
pub fn ancestors_of(hierarchy: &Hierarchy, class: &str) -> Result<Vec<String>> {
    let mut chain = vec![class.to_string()];
    let mut visited: HashSet<&str> = HashSet::from([class]);
    let mut current = class;

    while let Some(parent) = hierarchy.superclass_of(current) {
        if !visited.insert(parent) {
            chain.push(parent.to_string());
            return Err(BindgenError::CycleDetected { chain });
        }
        chain.push(parent.to_string());
        current = parent;
    }

    Ok(chain)
}

/// Union of the ancestor chains of every requested class.
pub fn resolve_binding_set<S: AsRef<str>>(
    hierarchy: &Hierarchy,
    requested: &[S],
) -> Result<BTreeSet<String>> {
    let mut set = BTreeSet::new();
    for class in requested {
        set.extend(ancestors_of(hierarchy, class.as_ref())?);
    }
    Ok(set)
}

/// Classes that already have hand-written bindings, matched by name prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootExclusion {
    prefixes: Vec<String>,
}

impl Default for RootExclusion {
    fn default() -> Self {
        Self {
            prefixes: vec!["NS".to_string()],
        }
    }
}

impl RootExclusion {
    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn is_excluded(&self, class: &str) -> bool {
        self.prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && class.starts_with(prefix.as_str()))
    }

    /// Remove excluded classes from `set`, returning the removed names.
    pub fn apply(&self, set: &mut BTreeSet<String>) -> Vec<String> {
        let removed: Vec<String> = set
            .iter()
            .filter(|class| self.is_excluded(class))
            .cloned()
            .collect();
        for class in &removed {
            set.remove(class);
        }
        removed
    }
}
