//! Decides what gets bound: which classes (ancestor resolution) and which
//! of their methods (signature classification).

pub mod ancestors;
pub mod classify;

pub use ancestors::{ancestors_of, resolve_binding_set, RootExclusion};
pub use classify::{
    classify, classify_class, BindableMethod, BoundArg, ClassPlan, Rejection, ReturnKind,
    ValueCategory,
};
