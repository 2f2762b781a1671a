//! Maps Objective-C method signatures onto SpiderMonkey value categories.
//!
//! Each argument and the return value are looked up first by type encoding,
//! then by declared type. A method with any type missing from both tables
//! can't be marshaled and is rejected; rejection only skips that method.

use crate::core::{ClassMetadata, MethodSignature, Selector, TypeRef};
use crate::observability::set_current_selector;
use std::fmt;

/// Script-side value category of one marshaled type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueCategory {
    /// IEEE double (`float`, `double`)
    Double,
    /// ECMA int32
    Int32,
    /// ECMA uint32
    Uint32,
    /// 16-bit character, marshaled as a number
    Char,
    Boolean,
    /// `NSString*` via an intermediate `JSString*`
    String,
    /// `JSObject*`
    ObjectRef,
    /// No value (`void`). Only meaningful for return types.
    Void,
}

impl ValueCategory {
    /// Lookup by Objective-C type encoding.
    pub fn from_type_code(code: &str) -> Option<Self> {
        match code {
            "f" | "d" => Some(Self::Double),
            "i" => Some(Self::Int32),
            "I" => Some(Self::Uint32),
            "c" | "C" => Some(Self::Char),
            "B" => Some(Self::Boolean),
            "v" => Some(Self::Void),
            _ => None,
        }
    }

    /// Fallback lookup by declared type name.
    pub fn from_declared_type(declared: &str) -> Option<Self> {
        match declared {
            "NSString*" => Some(Self::String),
            _ => None,
        }
    }

    fn resolve(ty: &TypeRef) -> Option<Self> {
        Self::from_type_code(&ty.type_code).or_else(|| Self::from_declared_type(&ty.declared_type))
    }
}

/// A resolved argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundArg {
    pub category: ValueCategory,
    pub declared_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnKind {
    /// `void`, or an `init` method returning the object under construction.
    Nothing,
    Value {
        category: ValueCategory,
        declared_type: String,
    },
}

/// A method whose every type has a marshaling rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindableMethod {
    pub selector: Selector,
    pub args: Vec<BoundArg>,
    pub ret: ReturnKind,
}

impl BindableMethod {
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// Why a method was left out of the bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UnsupportedArgument {
        selector: Selector,
        index: usize,
        ty: TypeRef,
    },
    UnsupportedReturn {
        selector: Selector,
        ty: TypeRef,
    },
}

impl Rejection {
    pub fn selector(&self) -> &Selector {
        match self {
            Self::UnsupportedArgument { selector, .. } | Self::UnsupportedReturn { selector, .. } => {
                selector
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedArgument {
                selector,
                index,
                ty,
            } => write!(
                f,
                "{}: argument {} has unsupported type {} ('{}')",
                selector, index, ty.declared_type, ty.type_code
            ),
            Self::UnsupportedReturn { selector, ty } => write!(
                f,
                "{}: unsupported return type {} ('{}')",
                selector, ty.declared_type, ty.type_code
            ),
        }
    }
}

pub fn classify(method: &MethodSignature) -> Result<BindableMethod, Rejection> {
    let selector = method.selector();

    let args = method
        .args()
        .iter()
        .enumerate()
        .map(|(index, ty)| match ValueCategory::resolve(ty) {
            Some(category) if category != ValueCategory::Void => Ok(BoundArg {
                category,
                declared_type: ty.declared_type.clone(),
            }),
            _ => Err(Rejection::UnsupportedArgument {
                selector: selector.clone(),
                index,
                ty: ty.clone(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let ret = match method.retval() {
        None => ReturnKind::Nothing,
        Some(ty) if selector.is_initializer() && ty.declared_type == "id" => ReturnKind::Nothing,
        Some(ty) => match ValueCategory::resolve(ty) {
            Some(ValueCategory::Void) => ReturnKind::Nothing,
            Some(category) => ReturnKind::Value {
                category,
                declared_type: ty.declared_type.clone(),
            },
            None => {
                return Err(Rejection::UnsupportedReturn {
                    selector: selector.clone(),
                    ty: ty.clone(),
                })
            }
        },
    };

    Ok(BindableMethod {
        selector: selector.clone(),
        args,
        ret,
    })
}

/// Per-class outcome of classification, in metadata order.
#[derive(Debug, Clone)]
pub struct ClassPlan {
    pub class_name: String,
    pub accepted: Vec<BindableMethod>,
    pub rejected: Vec<Rejection>,
}

pub fn classify_class(class: &ClassMetadata) -> ClassPlan {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for method in &class.methods {
        let _selector = set_current_selector(method.selector().as_str());
        match classify(method) {
            Ok(bindable) => accepted.push(bindable),
            Err(rejection) => rejected.push(rejection),
        }
    }

    ClassPlan {
        class_name: class.name.clone(),
        accepted,
        rejected,
    }
}
