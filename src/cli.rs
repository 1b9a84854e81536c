//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::calc::Operation;
use clap::Parser;
use std::path::PathBuf;

/// TaskCalc - file-based aggregate calculator
///
/// Reads whitespace-separated numbers from a text file and computes
/// a single aggregate statistic over them.
///
/// Examples:
///   taskcalc numbers.txt sum
///   taskcalc numbers.txt avg --verbose
///   taskcalc numbers.txt max --precision 3
///   taskcalc --init-config
#[derive(Parser, Debug, Clone)]
#[command(name = "TaskCalc", version, about, long_about = None)]
pub struct Args {
    /// Path to a UTF-8 text file with whitespace-separated numbers
    ///
    /// Numbers may be separated by spaces, tabs, or newlines in any
    /// mixture. Not required when using --init-config.
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    pub file: Option<PathBuf>,

    /// Aggregate operation to apply
    #[arg(
        value_enum,
        value_name = "OPERATION",
        required_unless_present = "init_config"
    )]
    pub operation: Option<Operation>,

    /// Print the parsed numbers and the operation before the result
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only in log output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Digits after the decimal point for non-integer results
    ///
    /// Overrides the config file setting. Defaults to 2.
    #[arg(long, value_name = "DIGITS")]
    pub precision: Option<usize>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .taskcalc.toml in the current directory
    #[arg(short, long, value_name = "FILE", env = "TASKCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Generate a default .taskcalc.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if let Some(precision) = self.precision {
            if precision > 17 {
                return Err("Precision must be at most 17 digits".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args() -> Args {
        Args {
            file: Some(PathBuf::from("numbers.txt")),
            operation: Some(Operation::Sum),
            verbose: false,
            quiet: false,
            precision: None,
            config: None,
            init_config: false,
        }
    }

    #[test]
    fn test_validation_ok() {
        let args = make_args();
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_validation_conflicting_options() {
        let mut args = make_args();
        args.verbose = true;
        args.quiet = true;
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_validation_precision_bound() {
        let mut args = make_args();
        args.precision = Some(18);
        assert!(args.validate().is_err());

        args.precision = Some(17);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_log_level() {
        let mut args = make_args();
        assert_eq!(args.log_level(), tracing::Level::INFO);

        args.verbose = true;
        assert_eq!(args.log_level(), tracing::Level::DEBUG);

        args.verbose = false;
        args.quiet = true;
        assert_eq!(args.log_level(), tracing::Level::ERROR);
    }

    #[test]
    fn test_parse_positional_arguments() {
        let args = Args::try_parse_from(["taskcalc", "numbers.txt", "avg", "-v"]).unwrap();
        assert_eq!(args.file, Some(PathBuf::from("numbers.txt")));
        assert_eq!(args.operation, Some(Operation::Avg));
        assert!(args.verbose);
    }

    #[test]
    fn test_parse_rejects_unknown_operation() {
        let result = Args::try_parse_from(["taskcalc", "numbers.txt", "median"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_init_config_without_positionals() {
        let args = Args::try_parse_from(["taskcalc", "--init-config"]).unwrap();
        assert!(args.init_config);
        assert_eq!(args.file, None);
    }
}
