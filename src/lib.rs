//! CRC Electrolytes Library
//!
//! A Rust library for converting electrolyte property tables exported from
//! the CRC Handbook of Chemistry and Physics into a normalized JSON dataset.
//!
//! This library provides tools for:
//! - Decomposing salt formulas into cation and anion with oxidation states
//! - Classifying table columns by the property their header encodes
//! - Normalizing conductivities, concentrations and temperatures
//! - Emitting `(solution, solute_data, solution_data)` entries per reading
//! - Merging entries that describe the same solution
//! - Reading and writing the JSON database

pub mod classifier;
pub mod condense;
pub mod config;
pub mod constants;
pub mod database;
pub mod discovery;
pub mod emitter;
pub mod error;
pub mod formula;
pub mod models;
pub mod oxidation;
pub mod parser;
pub mod units;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use config::ParserConfig;
pub use error::{CrcError, Result, SkipReason};
pub use formula::{formula_to_salt, parse_compound};
pub use models::{ColumnKind, ColumnReading, Dataset, Entry, Ion, Salt, SolutionSpec};
pub use parser::{CrcParser, ParseResult, ParseStats};
pub use units::{Quantity, Unit};
