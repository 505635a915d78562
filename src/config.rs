//! Configuration management and validation.
//!
//! Provides the parser configuration: which columns carry the formula and
//! concentration, the conditions assumed by each table, which compounds to
//! skip, and how the output dataset is shaped.

use crate::constants::{
    CONDUCTIVITY_CONCENTRATION_COLUMN, DEFAULT_SKIP_COMPOUNDS, DEFAULT_TEMPERATURE,
    FORMULA_COLUMNS, WEIGHT_PERCENT_TEMPERATURE,
};
use crate::error::{CrcError, Result};
use crate::units::{Dimension, Quantity};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for CRC table parsing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Formula column names, first present column wins
    pub formula_columns: Vec<String>,

    /// Concentration column for temperature-dependent conductivity tables
    pub concentration_column: String,

    /// Temperature for tables that do not state one
    pub default_temperature: Quantity,

    /// Temperature of the weight-percent conductivity table
    pub weight_percent_temperature: Quantity,

    /// Compound name fragments whose rows are skipped instead of failing
    pub skip_compounds: Vec<String>,

    /// Abort a file on the first row error (otherwise record and continue)
    pub strict: bool,

    /// Merge entries describing the same solution
    pub condense: bool,

    /// Pretty-print the JSON output
    pub pretty: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            formula_columns: FORMULA_COLUMNS.iter().map(|c| c.to_string()).collect(),
            concentration_column: CONDUCTIVITY_CONCENTRATION_COLUMN.to_string(),
            default_temperature: DEFAULT_TEMPERATURE,
            weight_percent_temperature: WEIGHT_PERCENT_TEMPERATURE,
            skip_compounds: DEFAULT_SKIP_COMPOUNDS.iter().map(|c| c.to_string()).collect(),
            strict: true,
            condense: false,
            pretty: true,
        }
    }
}

impl ParserConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CrcError::configuration(format!(
                "Config file does not exist: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: ParserConfig = serde_json::from_str(&content)?;
        config.validate()?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.formula_columns.iter().all(|c| c.trim().is_empty()) {
            return Err(CrcError::configuration(
                "At least one formula column must be configured",
            ));
        }

        if self.concentration_column.trim().is_empty() {
            return Err(CrcError::configuration(
                "Concentration column name cannot be empty",
            ));
        }

        for (name, temperature) in [
            ("default_temperature", &self.default_temperature),
            ("weight_percent_temperature", &self.weight_percent_temperature),
        ] {
            if temperature.unit.dimension() != Dimension::Temperature {
                return Err(CrcError::configuration(format!(
                    "{} must be a temperature, got '{}'",
                    name, temperature
                )));
            }
        }

        if self.skip_compounds.iter().any(|c| c.trim().is_empty()) {
            return Err(CrcError::configuration(
                "Skip compound patterns cannot be empty",
            ));
        }

        Ok(())
    }

    /// Merge entries describing the same solution
    pub fn with_condense(mut self, condense: bool) -> Self {
        self.condense = condense;
        self
    }

    /// Record row errors and continue instead of aborting the file
    pub fn with_lenient(mut self) -> Self {
        self.strict = false;
        self
    }

    /// Write compact JSON
    pub fn with_compact_output(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Replace the skipped compound patterns
    pub fn with_skip_compounds(mut self, patterns: Vec<String>) -> Self {
        self.skip_compounds = patterns;
        self
    }

    /// Set the temperature assumed when a table does not state one
    pub fn with_default_temperature(mut self, temperature: Quantity) -> Self {
        self.default_temperature = temperature;
        self
    }
}
