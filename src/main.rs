//! TaskCalc - file-based aggregate calculator
//!
//! A CLI tool that reads whitespace-separated numbers from a text file
//! and computes a single aggregate statistic (sum, avg, min, max).
//!
//! Exit codes:
//!   0 - Success
//!   1 - Runtime error (missing file, bad token, empty input, etc.)
//!   2 - Malformed command-line arguments (reported by clap)

mod calc;
mod cli;
mod config;
mod error;
mod format;
mod reader;

use anyhow::{Context, Result};
use cli::Args;
use config::Config;
use tracing::{debug, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        if let Err(e) = handle_init_config() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    // Initialize logging
    init_logging(&args);

    debug!("Arguments: {:?}", args);

    // Run the pipeline
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Handle --init-config: generate a default .taskcalc.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".taskcalc.toml");

    if path.exists() {
        anyhow::bail!(".taskcalc.toml already exists. Remove it first or edit it manually.");
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .taskcalc.toml")?;

    println!("Created .taskcalc.toml with default settings.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
///
/// Logs go to stderr; stdout is reserved for the verbose diagnostics
/// and the final result line.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete read → aggregate → format pipeline.
fn run(args: Args) -> Result<()> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let file = args.file.clone().context("file path is required")?;
    let operation = args.operation.context("operation is required")?;

    for line in run_pipeline(&file, operation, &config)? {
        println!("{}", line);
    }

    Ok(())
}

/// Run the read → aggregate → format pipeline for one input file.
///
/// Returns the lines to print on stdout: verbose diagnostics first (when
/// enabled), the `<label>: <formatted>` result line last.
fn run_pipeline(
    file: &std::path::Path,
    operation: calc::Operation,
    config: &Config,
) -> Result<Vec<String>, error::CalcError> {
    // Step 1: Read and parse the input file
    let numbers = reader::read_numbers(file)?;

    let mut lines = Vec::new();
    if config.general.verbose {
        lines.push(format!("Read {} numbers: {:?}", numbers.len(), numbers));
        lines.push(format!("Applying operation: {}", operation));
    }

    // Step 2: Apply the aggregate operation
    let result = calc::calculate(&numbers, operation)?;
    debug!("Raw result: {}", result);

    // Step 3: Format the result line
    let formatted = format::format_result(result, config.format.precision);
    lines.push(format!("{}: {}", operation.label(), formatted));

    Ok(lines)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            debug!("Loaded default config from .taskcalc.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
