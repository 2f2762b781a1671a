//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline phase is running and which class is being
//! generated, so a panic can say where it happened. Guards restore the
//! previous context on drop.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

static CLASSES_DONE: AtomicUsize = AtomicUsize::new(0);
static CLASSES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<GenerationContext> = const { RefCell::new(GenerationContext::new()) };
}

/// Snapshot of what the generator was doing.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub phase: Option<GenerationPhase>,
    /// Class whose bindings are being produced
    pub current_class: Option<String>,
    /// Selector being classified or emitted
    pub current_selector: Option<String>,
}

impl GenerationContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_class: None,
            current_selector: None,
        }
    }
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationPhase {
    LoadingConfig,
    LoadingHierarchy,
    LoadingMetadata,
    ResolvingAncestors,
    Classifying,
    Emitting,
    Writing,
}

impl std::fmt::Display for GenerationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadingConfig => write!(f, "loading_config"),
            Self::LoadingHierarchy => write!(f, "loading_hierarchy"),
            Self::LoadingMetadata => write!(f, "loading_metadata"),
            Self::ResolvingAncestors => write!(f, "resolving_ancestors"),
            Self::Classifying => write!(f, "classifying"),
            Self::Emitting => write!(f, "emitting"),
            Self::Writing => write!(f, "writing"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: GenerationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(f: impl FnOnce(&mut GenerationContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        f(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_phase(phase: GenerationPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_class(class: impl Into<String>) -> ContextGuard {
    let class = class.into();
    update(|ctx| ctx.current_class = Some(class))
}

#[must_use]
pub fn set_current_selector(selector: impl Into<String>) -> ContextGuard {
    let selector = selector.into();
    update(|ctx| ctx.current_selector = Some(selector))
}

pub fn set_progress(done: usize, total: usize) {
    CLASSES_DONE.store(done, Ordering::Relaxed);
    CLASSES_TOTAL.store(total, Ordering::Relaxed);
}

pub fn increment_done() {
    CLASSES_DONE.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> GenerationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// (classes done, classes total)
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        CLASSES_DONE.load(Ordering::Relaxed),
        CLASSES_TOTAL.load(Ordering::Relaxed),
    )
}

pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = GenerationContext::new();
    });
}
