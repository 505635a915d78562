//! Command implementations for the CRC electrolyte parser CLI
//!
//! Each command lives in its own module:
//! - `parse`: table parsing with JSON output
//! - `salt`: formula decomposition

pub mod parse;
pub mod salt;
pub mod shared;

use crate::cli::args::{Args, Commands};
use anyhow::Result;

/// Dispatch to the subcommand handler
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Parse(parse_args) => parse::run_parse(parse_args).map(|_| ()),
        Commands::Salt(salt_args) => salt::run_salt(salt_args).map(|_| ()),
    }
}
