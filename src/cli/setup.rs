//! Runtime setup for the command-line binary.

use tracing_subscriber::EnvFilter;

/// Log filter for a given `-v` count, unless `--quiet` wins.
pub fn default_filter(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. `RUST_LOG`, when set, overrides the
/// verbosity flags. `log` records from dependencies are forwarded too.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity, quiet)));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = result {
        // Already configured - this is fine, just ignore
        eprintln!("Note: logging already configured: {}", e);
    }
}
