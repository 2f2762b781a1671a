//! Command-line interface.

pub mod setup;

use crate::codegen::Banner;
use crate::commands::GenerateConfig;
use crate::config::BindgenConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsbindgen")]
#[command(about = "Generate SpiderMonkey proxy bindings for Objective-C classes", long_about = None)]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// BridgeSupport XML describing the classes' method signatures
    #[arg(short = 'b', long, required_unless_present = "init_config")]
    pub bridgesupport: Option<PathBuf>,

    /// Class hierarchy file (a Python dict literal)
    #[arg(short = 'j', long, required_unless_present = "init_config")]
    pub hierarchy: Option<PathBuf>,

    /// Classes to bind; their ancestors are bound too
    #[arg(value_name = "CLASS", required_unless_present = "init_config")]
    pub classes: Vec<String>,

    /// Directory for generated files (overrides `output_dir` in the config)
    #[arg(short = 'o', long)]
    pub output_dir: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .jsbindgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generate everything but write nothing
    #[arg(long)]
    pub dry_run: bool,

    /// Increase verbosity level (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Only print errors; takes precedence over -v
    #[arg(short, long)]
    pub quiet: bool,

    /// Write a default .jsbindgen.toml into the current directory and exit
    #[arg(long, conflicts_with_all = ["bridgesupport", "hierarchy", "classes"])]
    pub init_config: bool,

    /// Overwrite an existing config file with --init-config
    #[arg(long, requires = "init_config")]
    pub force: bool,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

impl Cli {
    /// Merge the parsed flags over `config`. Flags win.
    pub fn generate_config(&self, config: &BindgenConfig, banner: Banner) -> GenerateConfig {
        GenerateConfig {
            bridgesupport: self.bridgesupport.clone().unwrap_or_default(),
            hierarchy: self.hierarchy.clone().unwrap_or_default(),
            classes: self.classes.clone(),
            output_dir: self
                .output_dir
                .clone()
                .unwrap_or_else(|| config.output_dir.clone()),
            naming: config.naming(),
            exclusion: config.root_exclusion(),
            banner,
            dry_run: self.dry_run,
        }
    }
}

/// Name the generator records in each banner: the invoked program's file name.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(PathBuf::from)
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "jsbindgen".to_string())
}
