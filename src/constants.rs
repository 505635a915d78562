//! Application constants for the CRC table parser
//!
//! Column names, default conditions, property names and the ion oxidation
//! state table used throughout the crate.

use crate::units::{Quantity, Unit};

// =============================================================================
// CSV Column Names
// =============================================================================

/// Formula column names, in order of preference
pub const FORMULA_COLUMNS: &[&str] = &["Mol. form.", "Compound"];

/// Concentration column of the temperature-dependent conductivity tables
pub const CONDUCTIVITY_CONCENTRATION_COLUMN: &str = "<i>c</i>/M";

// =============================================================================
// Default Conditions
// =============================================================================

/// Temperature assumed when a table does not state one (25 °C)
pub const DEFAULT_TEMPERATURE: Quantity = Quantity::new(298.15, Unit::Kelvin);

/// Temperature of the weight-percent conductivity table
pub const WEIGHT_PERCENT_TEMPERATURE: Quantity = Quantity::new(20.0, Unit::DegreeCelsius);

/// Compounds the ion table cannot express; rows naming them are skipped
pub const DEFAULT_SKIP_COMPOUNDS: &[&str] = &["picrate"];

// =============================================================================
// Property Names
// =============================================================================

pub mod properties {
    /// Electrical conductivity of the solution (S/m)
    pub const CONDUCTIVITY: &str = "conductivity";

    /// Mean ionic activity coefficient (dimensionless)
    pub const MEAN_ACTIVITY_COEFFICIENT: &str = "mean_activity_coefficient";
}

// =============================================================================
// Output
// =============================================================================

/// Default database file name
pub const DB_FILE: &str = "crc.json";

/// Log target filter used when RUST_LOG is not set
pub const LOG_TARGET: &str = "crc_electrolytes";

// =============================================================================
// Ion Table
// =============================================================================

/// Oxidation states of the ions the formula parser can resolve directly.
///
/// Anything absent is inferred from its counter-ion by charge balance.
pub const ION_OXIDATION_STATES: &[(&str, i32)] = &[
    // Halides and monovalent oxyanions
    ("F", -1),
    ("Cl", -1),
    ("Br", -1),
    ("I", -1),
    ("NO3", -1),
    ("NO2", -1),
    ("ClO4", -1),
    ("ClO3", -1),
    ("ClO2", -1),
    ("ClO", -1),
    ("HCO3", -1),
    ("OH", -1),
    // Polyvalent oxyanions
    ("CO3", -2),
    ("SO4", -2),
    ("PO4", -3),
    // Alkali metals, proton and ammonium
    ("H", 1),
    ("Li", 1),
    ("Na", 1),
    ("K", 1),
    ("Rb", 1),
    ("Cs", 1),
    ("Fr", 1),
    ("NH4", 1),
    // Alkaline earth metals
    ("Be", 2),
    ("Mg", 2),
    ("Ca", 2),
    ("Sr", 2),
    ("Ba", 2),
    ("Ra", 2),
];
