//! Error handling for CRC table parsing.
//!
//! Provides error types with context for formula decomposition, oxidation
//! state resolution, unit conversion, and CSV/JSON I/O failures.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error in {source_name}: {source}")]
    Csv {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unable to parse formula '{formula}': {reason}")]
    FormulaParse { formula: String, reason: String },

    #[error("Unable to determine oxidation states for formula '{formula}': {reason}")]
    OxidationState { formula: String, reason: String },

    #[error("Invalid value '{value}' in column '{column}': {reason}")]
    InvalidValue {
        column: String,
        value: String,
        reason: String,
    },

    #[error("Required column '{column}' not found")]
    MissingColumn { column: String },

    #[error("Unknown unit '{unit}'")]
    UnknownUnit { unit: String },

    #[error("Cannot convert {from} to {to}")]
    UnitConversion { from: String, to: String },

    #[error("Input not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Directory traversal failed: {0}")]
    DirectoryTraversal(#[from] walkdir::Error),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, CrcError>;

impl CrcError {
    /// Create a formula parse error
    pub fn formula_parse(formula: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FormulaParse {
            formula: formula.into(),
            reason: reason.into(),
        }
    }

    /// Create an oxidation state error
    pub fn oxidation_state(formula: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OxidationState {
            formula: formula.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid value error for a CSV field
    pub fn invalid_value(
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a CSV error attributed to an input source
    pub fn csv(source_name: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            source_name: source_name.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Formula the error refers to, for formula and oxidation state failures
    pub fn formula(&self) -> Option<&str> {
        match self {
            Self::FormulaParse { formula, .. } | Self::OxidationState { formula, .. } => {
                Some(formula)
            }
            _ => None,
        }
    }
}

/// Why a row was deliberately left out of the dataset.
///
/// Rows are only skipped for reasons the caller has opted into; every other
/// failure is a [`CrcError`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The compound matches a configured unsupported-compound pattern
    /// (organic anions such as picrate that the ion table cannot express).
    UnsupportedCompound { pattern: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnsupportedCompound { pattern } => {
                write!(f, "unsupported compound ({})", pattern)
            }
        }
    }
}

/// Classify a row error as a skip if it concerns one of `patterns`.
///
/// Only formula and oxidation state failures qualify; the match is a
/// case-insensitive substring test on the offending formula.
pub fn skip_reason(error: &CrcError, patterns: &[String]) -> Option<SkipReason> {
    let formula = error.formula()?.to_lowercase();
    patterns
        .iter()
        .find(|pattern| formula.contains(&pattern.to_lowercase()))
        .map(|pattern| SkipReason::UnsupportedCompound {
            pattern: pattern.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_reason_matches_formula_errors_only() {
        let patterns = vec!["picrate".to_string()];

        let err = CrcError::oxidation_state("K picrate", "neither ion is known");
        assert_eq!(
            skip_reason(&err, &patterns),
            Some(SkipReason::UnsupportedCompound {
                pattern: "picrate".to_string()
            })
        );

        let err = CrcError::formula_parse("Picrate", "no cation");
        assert!(skip_reason(&err, &patterns).is_some());

        let err = CrcError::invalid_value("picrate", "x", "not a number");
        assert_eq!(skip_reason(&err, &patterns), None);

        let err = CrcError::oxidation_state("CH3COONa", "neither ion is known");
        assert_eq!(skip_reason(&err, &patterns), None);
    }

    #[test]
    fn test_error_messages_carry_context() {
        let err = CrcError::missing_column("<i>c</i>/M");
        assert_eq!(err.to_string(), "Required column '<i>c</i>/M' not found");

        let err = CrcError::formula_parse("", "empty formula");
        assert!(err.to_string().contains("empty formula"));
        assert_eq!(err.formula(), Some(""));
    }
}
