//! Column mapping for CRC table headers
//!
//! Headers are classified once per file; rows are then processed by index.

use crate::classifier::classify;
use crate::config::ParserConfig;
use crate::error::{CrcError, Result};
use crate::models::ColumnKind;
use csv::StringRecord;
use std::collections::HashMap;
use tracing::warn;

/// Column mapping for one CRC table
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Name and index of the formula column
    pub formula_column: String,
    pub formula_index: usize,

    /// Index of the row concentration column, if the table has one
    pub concentration_index: Option<usize>,

    /// Property columns in header order
    pub property_columns: Vec<(usize, String, ColumnKind)>,

    /// Headers that looked like property columns but failed to classify,
    /// dropped in lenient mode
    pub rejected_columns: Vec<(String, String)>,
}

impl ColumnMapping {
    /// Classify every header and locate the formula and concentration columns
    ///
    /// A header that fails to classify aborts in strict mode; otherwise the
    /// column is dropped and listed in `rejected_columns`.
    pub fn analyze(headers: &StringRecord, config: &ParserConfig) -> Result<Self> {
        let mut name_to_index = HashMap::new();
        let mut property_columns = Vec::new();
        let mut rejected_columns = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = header.trim().to_string();
            match classify(&column_name) {
                Ok(Some(kind)) => property_columns.push((index, column_name.clone(), kind)),
                Ok(None) => {}
                Err(e) if config.strict => return Err(e),
                Err(e) => {
                    warn!("Dropping column '{}': {}", column_name, e);
                    rejected_columns.push((column_name.clone(), e.to_string()));
                }
            }
            name_to_index.entry(column_name).or_insert(index);
        }

        let (formula_column, formula_index) = config
            .formula_columns
            .iter()
            .find_map(|name| name_to_index.get(name).map(|&index| (name.clone(), index)))
            .ok_or_else(|| CrcError::missing_column(config.formula_columns.join(" | ")))?;

        let concentration_index = name_to_index.get(&config.concentration_column).copied();

        Ok(ColumnMapping {
            name_to_index,
            formula_column,
            formula_index,
            concentration_index,
            property_columns,
            rejected_columns,
        })
    }

    /// Whether any column needs the row concentration
    pub fn needs_concentration(&self) -> bool {
        self.property_columns.iter().any(|(_, _, kind)| {
            matches!(kind, ColumnKind::TemperatureDependentMolarConductivity { .. })
        })
    }

    /// Total columns and property columns
    pub fn stats(&self) -> (usize, usize) {
        (self.name_to_index.len(), self.property_columns.len())
    }
}
