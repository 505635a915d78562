//! Core data structures for CRC table processing.
//!
//! Defines ions and salts produced by the formula parser, the per-column
//! readings produced by the row classifier, and the entry triples that make
//! up an output dataset.

use crate::units::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An ion as written in a formula, with its oxidation state once resolved
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ion {
    pub symbol: String,
    pub subscript: u32,
    pub oxidation_state: Option<i32>,
}

impl Ion {
    pub fn new(symbol: impl Into<String>, subscript: u32) -> Self {
        Self {
            symbol: symbol.into(),
            subscript,
            oxidation_state: None,
        }
    }

    pub fn with_oxidation_state(mut self, oxidation_state: i32) -> Self {
        self.oxidation_state = Some(oxidation_state);
        self
    }
}

/// A binary salt with both oxidation states resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salt {
    pub cation: Ion,
    pub anion: Ion,
    pub z_cation: i32,
    pub z_anion: i32,
}

impl Salt {
    /// Ion name as used for solute keys, e.g. `Na[+1]`
    pub fn cation_name(&self) -> String {
        format!("{}[{:+}]", self.cation.symbol, self.z_cation)
    }

    pub fn anion_name(&self) -> String {
        format!("{}[{:+}]", self.anion.symbol, self.z_anion)
    }

    /// Cations per formula unit, reconstructed from the charges
    pub fn nu_cation(&self) -> u32 {
        lcm(self.z_cation.unsigned_abs(), self.z_anion.unsigned_abs()) / self.z_cation.unsigned_abs()
    }

    /// Anions per formula unit, reconstructed from the charges
    pub fn nu_anion(&self) -> u32 {
        lcm(self.z_cation.unsigned_abs(), self.z_anion.unsigned_abs()) / self.z_anion.unsigned_abs()
    }

    /// Net charge of the formula as written
    pub fn net_charge(&self) -> i64 {
        i64::from(self.z_cation) * i64::from(self.cation.subscript)
            + i64::from(self.z_anion) * i64::from(self.anion.subscript)
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} x{} + {} x{}",
            self.cation_name(),
            self.nu_cation(),
            self.anion_name(),
            self.nu_anion()
        )
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: u32, b: u32) -> u32 {
    a / gcd(a, b) * b
}

/// Property encoded by a recognized column header
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    /// Molar conductivity at a temperature given in the header; the
    /// concentration comes from the row's concentration column
    TemperatureDependentMolarConductivity { temperature: Quantity },

    /// Molar conductivity at a concentration given in the header
    ConcentrationDependentMolarConductivity { concentration: Quantity },

    /// Conductivity at a target weight percent given in the header
    WeightPercentConductivity { target_percent: f64 },

    /// Mean activity coefficient at a molality given in the header
    MeanActivityCoefficient { molality: Quantity },
}

/// A single property reading extracted from one column of a row
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnReading {
    pub property: String,
    pub concentration: Quantity,
    pub temperature: Quantity,
    pub value: Quantity,
}

/// Solution composition and conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionSpec {
    pub solutes: BTreeMap<String, Quantity>,
    pub temperature: Quantity,
}

/// Per-solute property values, keyed by ion name
pub type SoluteData = BTreeMap<String, Vec<(String, Quantity)>>;

/// Solution-level property values
pub type SolutionData = Vec<(String, Quantity)>;

/// One dataset record: `(solution, solute_data, solution_data)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry(pub SolutionSpec, pub SoluteData, pub SolutionData);

impl Entry {
    pub fn solution(&self) -> &SolutionSpec {
        &self.0
    }

    pub fn solute_data(&self) -> &SoluteData {
        &self.1
    }

    pub fn solution_data(&self) -> &SolutionData {
        &self.2
    }
}

/// Ordered, append-only collection of entries
pub type Dataset = Vec<Entry>;
