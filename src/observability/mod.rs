//! Crash-report support.
//!
//! Install the panic hook at startup, then mark progress while generating:
//!
//! ```ignore
//! use jsbindgen::observability::{install_panic_hook, set_current_class, set_phase, GenerationPhase};
//!
//! install_panic_hook();
//! let _phase = set_phase(GenerationPhase::Emitting);
//! for class in classes {
//!     let _class = set_current_class(&class);
//!     // a panic here reports the phase and class
//! }
//! ```

pub mod context;
pub mod panic_hook;

pub use context::{
    get_current_context, get_progress, increment_done, reset_context, set_current_class,
    set_current_selector, set_phase, set_progress, ContextGuard, GenerationContext,
    GenerationPhase,
};
pub use panic_hook::install_panic_hook;
