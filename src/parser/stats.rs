//! Parsing statistics and result structures for CRC table processing

use crate::error::SkipReason;
use crate::models::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parsing result with entries and statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Entries in row order, then column order
    pub entries: Dataset,

    /// Parsing statistics
    pub stats: ParseStats,
}

/// Parsing statistics for one or more tables
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Number of files parsed
    pub files_parsed: usize,

    /// Total number of data rows encountered
    pub total_rows: usize,

    /// Rows converted without error
    pub rows_parsed: usize,

    /// Rows left out, whether deliberately skipped or failed
    pub rows_skipped: usize,

    /// Deliberately skipped rows, counted by reason
    pub skipped_by_reason: BTreeMap<String, usize>,

    /// Entries emitted by parsed rows
    pub entries_emitted: usize,

    /// Row and column errors recorded in lenient mode
    pub errors: Vec<String>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a row skipped for a known reason
    pub fn record_skip(&mut self, reason: &SkipReason) {
        self.rows_skipped += 1;
        *self.skipped_by_reason.entry(reason.to_string()).or_default() += 1;
    }

    /// Record a row that failed to parse
    pub fn record_error(&mut self, message: String) {
        self.rows_skipped += 1;
        self.errors.push(message);
    }

    /// Rows deliberately skipped for a known reason
    pub fn rows_deliberately_skipped(&self) -> usize {
        self.skipped_by_reason.values().sum()
    }

    /// Fold another file's statistics into these
    pub fn merge(&mut self, other: ParseStats) {
        self.files_parsed += other.files_parsed;
        self.total_rows += other.total_rows;
        self.rows_parsed += other.rows_parsed;
        self.rows_skipped += other.rows_skipped;
        for (reason, count) in other.skipped_by_reason {
            *self.skipped_by_reason.entry(reason).or_default() += count;
        }
        self.entries_emitted += other.entries_emitted;
        self.errors.extend(other.errors);
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.rows_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// True when every row was either parsed or deliberately skipped
    pub fn is_successful(&self) -> bool {
        self.errors.is_empty()
    }
}
