//! Custom panic hook for structured crash reports.
//!
//! A crash report names the pipeline phase, the class and selector being
//! processed, and how many classes were already written, so the offending
//! metadata entry can be found.

use super::context::{get_current_context, get_progress, GenerationContext};
use std::panic::PanicHookInfo;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook. Call early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();
    let (done, total) = get_progress();

    eprintln!();
    eprintln!("{}", RULE);
    eprintln!("JSBINDGEN CRASH REPORT");
    eprintln!("{}", RULE);
    eprintln!("  Version:  {}", VERSION);
    eprintln!("  Platform: {}", std::env::consts::OS);
    eprintln!("  Panic:    {}", extract_panic_message(info));
    if let Some(location) = info.location() {
        eprintln!(
            "  Location: {}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        );
    }
    for line in context_lines(&context, done, total) {
        eprintln!("  {}", line);
    }
    if let Some(metadata) = Span::current().metadata() {
        eprintln!("  Span:     {}", metadata.name());
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("  Run with RUST_BACKTRACE=1 for stack trace");
    }
    eprintln!("{}", RULE);
}

fn context_lines(context: &GenerationContext, done: usize, total: usize) -> Vec<String> {
    let mut lines = vec![match &context.phase {
        Some(phase) => format!("Phase:    {}", phase),
        None => "Phase:    (not set - crash occurred before generation started)".to_string(),
    }];
    if let Some(class) = &context.current_class {
        lines.push(format!("Class:    {}", class));
    }
    if let Some(selector) = &context.current_selector {
        lines.push(format!("Selector: {}", selector));
    }
    if total > 0 {
        lines.push(format!("Progress: {} / {} classes", done, total));
    }
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
