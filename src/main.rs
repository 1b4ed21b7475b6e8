//! radar-merge CLI
//!
//! Entry point for the `radar-merge` command-line tool. With no flags it
//! reads `radar.json` and `notes.json` from the working directory and prints
//! the merged document.

use clap::Parser;
use radar_merge::pipeline;
use radar_merge::{CliOverrides, EffectiveConfig};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "radar-merge")]
#[command(about = "Fill a radar dataset with default records from a notes dataset", version)]
struct Cli {
    /// Radar document (default: radar.json)
    #[arg(long)]
    radar: Option<PathBuf>,

    /// Notes document (default: notes.json)
    #[arg(long)]
    notes: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Spaces per indentation level in the output (default: 4)
    #[arg(long)]
    indent: Option<usize>,

    /// Print the effective configuration as JSON instead of merging
    #[arg(long)]
    print_config: bool,

    /// Log debug details to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let overrides = CliOverrides {
        radar: cli.radar,
        notes: cli.notes,
        indent: cli.indent,
    };

    let config = match EffectiveConfig::build(cli.config.as_deref(), overrides.to_value()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if cli.print_config {
        run_print_config(&config);
    } else {
        run_merge(&config);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("radar_merge=debug,radar_fill=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_print_config(config: &EffectiveConfig) {
    match config.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_merge(config: &EffectiveConfig) {
    let settings = match config.settings() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = pipeline::run(&settings, &mut out) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
