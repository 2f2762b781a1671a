use super::selector::Selector;
use crate::errors::{BindgenError, Result};
use std::collections::HashMap;

/// One argument or return type occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Objective-C type encoding (`f`, `i`, `@`, ...).
    pub type_code: String,
    /// Type as written in the header (`float`, `NSString*`, ...).
    pub declared_type: String,
}

impl TypeRef {
    pub fn new(type_code: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            type_code: type_code.into(),
            declared_type: declared_type.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    selector: Selector,
    args: Vec<TypeRef>,
    retval: Option<TypeRef>,
}

impl MethodSignature {
    /// Build a signature, checking the selector's arity against `args`.
    pub fn new(
        class: &str,
        selector: Selector,
        args: Vec<TypeRef>,
        retval: Option<TypeRef>,
    ) -> Result<Self> {
        if selector.arity() != args.len() {
            return Err(BindgenError::SelectorMismatch {
                class: class.to_string(),
                selector: selector.to_string(),
                expected: selector.arity(),
                found: args.len(),
            });
        }

        Ok(Self {
            selector,
            args,
            retval,
        })
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn args(&self) -> &[TypeRef] {
        &self.args
    }

    pub fn retval(&self) -> Option<&TypeRef> {
        self.retval.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMetadata {
    pub name: String,
    pub methods: Vec<MethodSignature>,
}

/// Class name to method list, as read from the BridgeSupport file.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    classes: HashMap<String, ClassMetadata>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class. Class names are unique keys; a repeated name is an error.
    pub fn insert(&mut self, class: ClassMetadata) -> Result<()> {
        if self.classes.contains_key(&class.name) {
            return Err(BindgenError::structure(format!(
                "class '{}' is described more than once",
                class.name
            )));
        }
        self.classes.insert(class.name.clone(), class);
        Ok(())
    }

    pub fn get(&self, class: &str) -> Option<&ClassMetadata> {
        self.classes.get(class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
