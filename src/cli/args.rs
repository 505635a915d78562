//! Command-line argument definitions for the CRC electrolyte parser
//!
//! Defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use crate::constants::DB_FILE;
use crate::error::{CrcError, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the CRC electrolyte table parser
///
/// Converts CRC-handbook electrolyte tables (molar conductivity,
/// conductivity at weight percent, mean activity coefficients) from CSV
/// exports into a normalized JSON dataset.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "crc-electrolytes",
    version,
    about = "Convert CRC handbook electrolyte tables from CSV to a normalized JSON dataset",
    long_about = "Parses CRC Handbook electrolyte tables exported as CSV. Each salt formula is \
                  decomposed into cation and anion with oxidation states, every recognized \
                  property column becomes one (solution, solute_data, solution_data) entry, \
                  and values are normalized to S/m, mol/L, mol/kg and K."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse CRC tables into a JSON dataset
    Parse(ParseArgs),
    /// Decompose salt formulas into ions
    Salt(SaltArgs),
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// CSV files, directories or glob patterns to parse
    ///
    /// Directories are scanned recursively for *.csv files.
    #[arg(value_name = "INPUT", required = true, num_args = 1..)]
    pub inputs: Vec<String>,

    /// Output JSON file or directory
    ///
    /// A directory receives crc.json. If not specified, the dataset is
    /// written to stdout
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output JSON file (default: stdout)"
    )]
    pub output: Option<PathBuf>,

    /// Path to configuration file (JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Merge entries describing the same solution
    #[arg(long = "condense", help = "Merge entries describing the same solution")]
    pub condense: bool,

    /// Record row errors and continue instead of aborting
    #[arg(
        long = "lenient",
        help = "Skip rows that fail to parse instead of aborting"
    )]
    pub lenient: bool,

    /// Write compact instead of pretty-printed JSON
    #[arg(long = "compact", help = "Write compact JSON")]
    pub compact: bool,

    /// Additional compound name fragments whose failing rows are skipped
    #[arg(
        long = "skip",
        value_name = "PATTERN",
        help = "Skip rows whose unparseable compound contains PATTERN (repeatable)"
    )]
    pub skip: Vec<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the salt command
#[derive(Debug, Clone, Parser)]
pub struct SaltArgs {
    /// Formulas to decompose, optionally with an n/d coefficient prefix
    #[arg(value_name = "FORMULA", required = true, num_args = 1..)]
    pub formulas: Vec<String>,

    /// Print results as JSON
    #[arg(long = "json", help = "Print results as JSON")]
    pub json: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl ParseArgs {
    /// Validate the parse command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(CrcError::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Output file; a directory receives the default database file name
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|output| {
            if output.is_dir() {
                output.join(DB_FILE)
            } else {
                output.clone()
            }
        })
    }

    /// Build the parser configuration: config file (or defaults), then flags
    pub fn to_config(&self) -> Result<ParserConfig> {
        let mut config = match &self.config_file {
            Some(path) => ParserConfig::from_file(path)?,
            None => ParserConfig::default(),
        };

        if self.condense {
            config = config.with_condense(true);
        }
        if self.lenient {
            config = config.with_lenient();
        }
        if self.compact {
            config = config.with_compact_output();
        }
        if !self.skip.is_empty() {
            let mut patterns = config.skip_compounds.clone();
            patterns.extend(self.skip.iter().cloned());
            config = config.with_skip_compounds(patterns);
        }

        config.validate()?;
        Ok(config)
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            verbosity_level(self.verbose)
        }
    }

    /// Progress bars go to stderr and are hidden in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl SaltArgs {
    pub fn get_log_level(&self) -> &'static str {
        verbosity_level(self.verbose)
    }
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
