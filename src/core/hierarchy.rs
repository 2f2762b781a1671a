use std::collections::HashMap;

/// One class's position in the inheritance graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyEntry {
    pub name: String,
    /// `None` at a hierarchy root.
    pub superclass: Option<String>,
    /// Adopted protocols. Informational only; nothing is generated from them.
    pub protocols: Vec<String>,
}

impl HierarchyEntry {
    pub fn new(name: impl Into<String>, superclass: Option<&str>) -> Self {
        Self {
            name: name.into(),
            superclass: superclass.filter(|s| !s.is_empty()).map(str::to_string),
            protocols: Vec::new(),
        }
    }

    pub fn with_protocols(mut self, protocols: Vec<String>) -> Self {
        self.protocols = protocols;
        self
    }
}

/// Class name to hierarchy entry. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    entries: HashMap<String, HierarchyEntry>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: HierarchyEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    pub fn get(&self, class: &str) -> Option<&HierarchyEntry> {
        self.entries.get(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.entries.contains_key(class)
    }

    /// Superclass of `class`, or `None` when the class is unknown or a root.
    pub fn superclass_of(&self, class: &str) -> Option<&str> {
        self.get(class).and_then(|e| e.superclass.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<HierarchyEntry> for Hierarchy {
    fn from_iter<I: IntoIterator<Item = HierarchyEntry>>(iter: I) -> Self {
        let mut hierarchy = Hierarchy::new();
        for entry in iter {
            hierarchy.insert(entry);
        }
        hierarchy
    }
}
