//! Core CRC table parser implementation
//!
//! Handles file reading, header mapping and row iteration, and decides per
//! row error whether to skip, record or abort.

use indicatif::ProgressBar;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_row;
use super::stats::{ParseResult, ParseStats};
use crate::condense::condense;
use crate::config::ParserConfig;
use crate::error::{CrcError, Result, skip_reason};

/// Parser for CRC-handbook CSV tables
///
/// - Rows whose compound matches a configured skip pattern are skipped
/// - Other row errors abort the file in strict mode, or are recorded in
///   [`ParseStats::errors`] in lenient mode
#[derive(Debug, Clone, Default)]
pub struct CrcParser {
    config: ParserConfig,
}

impl CrcParser {
    /// Create a new parser with the given configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a CRC table file
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing CRC table: {}", file_path.display());

        if !file_path.exists() {
            return Err(CrcError::InputNotFound {
                path: file_path.to_path_buf(),
            });
        }

        let file = File::open(file_path)?;
        self.parse_reader(file, &file_path.display().to_string())
    }

    /// Parse every file in order into one dataset
    pub fn parse_files(
        &self,
        files: &[PathBuf],
        progress_bar: Option<&ProgressBar>,
    ) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut entries = Vec::new();

        for file in files {
            if let Some(pb) = progress_bar {
                pb.set_message(
                    file.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default(),
                );
            }

            let result = self.parse_file(file)?;
            entries.extend(result.entries);
            stats.merge(result.stats);

            if let Some(pb) = progress_bar {
                pb.inc(1);
            }
        }

        if self.config.condense {
            entries = condense(entries);
        }

        Ok(ParseResult { entries, stats })
    }

    /// Parse a CRC table from any reader; `source_name` labels errors and logs
    pub fn parse_reader<R: Read>(&self, reader: R, source_name: &str) -> Result<ParseResult> {
        let mut stats = ParseStats::new();
        let mut entries = Vec::new();

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| CrcError::csv(source_name, e))?
            .clone();

        let column_mapping = ColumnMapping::analyze(&headers, &self.config)?;
        let (total_cols, property_cols) = column_mapping.stats();
        debug!(
            "Column mapping for {}: {} total, {} property columns, formula in '{}'",
            source_name, total_cols, property_cols, column_mapping.formula_column
        );

        for (column, e) in &column_mapping.rejected_columns {
            stats
                .errors
                .push(format!("{} column '{}': {}", source_name, column, e));
        }

        if property_cols == 0 {
            warn!("No property columns recognized in {}", source_name);
        }

        for result in csv_reader.records() {
            stats.total_rows += 1;
            let row = stats.total_rows;

            let outcome = result
                .map_err(|e| CrcError::csv(source_name, e))
                .and_then(|record| parse_row(&record, &column_mapping, &self.config));

            match outcome {
                Ok(row_entries) => {
                    stats.rows_parsed += 1;
                    stats.entries_emitted += row_entries.len();
                    entries.extend(row_entries);
                }
                Err(e) => {
                    if let Some(reason) = skip_reason(&e, &self.config.skip_compounds) {
                        warn!("Skipped row {} of {}: {}", row, source_name, reason);
                        stats.record_skip(&reason);
                    } else if self.config.strict {
                        error!("Row {} of {} failed: {}", row, source_name, e);
                        return Err(e);
                    } else {
                        debug!("Skipped row {} of {}: {}", row, source_name, e);
                        stats.record_error(format!("{} row {}: {}", source_name, row, e));
                    }
                }
            }
        }

        if self.config.condense {
            entries = condense(entries);
        }

        stats.files_parsed = 1;
        info!(
            "Parsed {} entries from {} rows of {} ({} skipped)",
            entries.len(),
            stats.total_rows,
            source_name,
            stats.rows_skipped
        );

        Ok(ParseResult { entries, stats })
    }
}
