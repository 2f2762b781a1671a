use anyhow::{Context, Result};
use jsbindgen::cli::{self, setup};
use jsbindgen::codegen::Banner;
use jsbindgen::commands::{init, run_generate, summary};
use jsbindgen::config;
use jsbindgen::io::RealFileSystem;
use jsbindgen::observability::{install_panic_hook, set_phase, GenerationPhase};
use std::path::Path;

fn main() -> Result<()> {
    install_panic_hook();

    let cli = cli::parse_args();
    setup::init_logging(cli.verbosity, cli.quiet);

    let fs = RealFileSystem::new();

    if cli.init_config {
        let path = init::init_config(&fs, Path::new("."), cli.force)?;
        println!("Created {} configuration file", path.display());
        return Ok(());
    }

    let config = {
        let _phase = set_phase(GenerationPhase::LoadingConfig);
        match &cli.config {
            Some(path) => config::load_config_from(path)
                .context("Failed to load configuration")?,
            None => config::load_config(),
        }
    };

    let generate = cli.generate_config(&config, Banner::today(cli::program_name()));
    let report = run_generate(&fs, &generate)?;

    if !cli.quiet {
        summary::print_summary(&report).context("Failed to print summary")?;
    }

    Ok(())
}
