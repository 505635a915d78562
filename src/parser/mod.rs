//! CSV parser for CRC electrolyte tables
//!
//! Reads a CRC-handbook CSV export (header row with HTML markup, one
//! compound per row) and produces dataset entries with parsing statistics.
//!
//! ## Architecture
//!
//! - [`parser`] - File/reader handling and row orchestration
//! - [`column_mapping`] - One-time header classification per file
//! - [`record_parser`] - Conversion of a single row into entries
//! - [`field_parsers`] - Field lookup and numeric parsing helpers
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use crc_electrolytes::config::ParserConfig;
//! use crc_electrolytes::parser::CrcParser;
//!
//! # fn example() -> crc_electrolytes::Result<()> {
//! let parser = CrcParser::new(ParserConfig::default());
//! let result = parser.parse_file(std::path::Path::new("conductivity.csv"))?;
//!
//! println!("Emitted {} entries from {} rows",
//!          result.stats.entries_emitted,
//!          result.stats.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use column_mapping::ColumnMapping;
pub use parser::CrcParser;
pub use stats::{ParseResult, ParseStats};
