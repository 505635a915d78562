//! Turns classified column values into dataset entries.

use crate::config::ParserConfig;
use crate::constants::properties;
use crate::error::{CrcError, Result};
use crate::models::{ColumnKind, ColumnReading, Entry, Salt, SoluteData, SolutionSpec};
use crate::units::{Quantity, Unit, molar_to_conductivity};
use std::collections::BTreeMap;

/// Build the reading for one non-empty property value.
///
/// `factor` is the compound's coefficient prefix and scales every
/// concentration. `row_concentration` is the row's concentration column
/// (mol/L), required only by temperature-dependent tables.
pub fn read_column(
    kind: &ColumnKind,
    value: f64,
    factor: f64,
    row_concentration: Option<f64>,
    config: &ParserConfig,
) -> Result<ColumnReading> {
    match kind {
        ColumnKind::TemperatureDependentMolarConductivity { temperature } => {
            let concentration = row_concentration
                .ok_or_else(|| CrcError::missing_column(&config.concentration_column))?;
            let concentration = Quantity::new(concentration, Unit::MolePerLiter) * factor;
            molar_reading(concentration, *temperature, value)
        }
        ColumnKind::ConcentrationDependentMolarConductivity { concentration } => {
            molar_reading(*concentration * factor, config.default_temperature, value)
        }
        ColumnKind::WeightPercentConductivity { target_percent } => {
            // Ratio of solute to water that yields the target weight
            // percent, stored as a % amount for the solution builder
            let added = target_percent / (100.0 - target_percent);
            let kappa = Quantity::new(value, Unit::MilliSiemensPerCentimeter);
            Ok(ColumnReading {
                property: properties::CONDUCTIVITY.to_string(),
                concentration: Quantity::new(added, Unit::Percent) * factor,
                temperature: config.weight_percent_temperature,
                value: kappa.to(Unit::SiemensPerMeter)?,
            })
        }
        ColumnKind::MeanActivityCoefficient { molality } => Ok(ColumnReading {
            property: properties::MEAN_ACTIVITY_COEFFICIENT.to_string(),
            concentration: *molality * factor,
            temperature: config.default_temperature,
            value: Quantity::new(value, Unit::Dimensionless),
        }),
    }
}

fn molar_reading(concentration: Quantity, temperature: Quantity, value: f64) -> Result<ColumnReading> {
    let molar = Quantity::new(value, Unit::SiemensSquareCentimeterPerMole);
    Ok(ColumnReading {
        property: properties::CONDUCTIVITY.to_string(),
        concentration,
        temperature,
        value: molar_to_conductivity(&concentration, &molar)?,
    })
}

/// Assemble the `(solution, solute_data, solution_data)` entry for a reading
pub fn emit(salt: &Salt, reading: &ColumnReading) -> Result<Entry> {
    let mut solutes = BTreeMap::new();
    solutes.insert(
        salt.cation_name(),
        reading.concentration * f64::from(salt.nu_cation()),
    );
    solutes.insert(
        salt.anion_name(),
        reading.concentration * f64::from(salt.nu_anion()),
    );

    let solution = SolutionSpec {
        solutes,
        temperature: reading.temperature.to(Unit::Kelvin)?,
    };

    Ok(Entry(
        solution,
        SoluteData::new(),
        vec![(reading.property.clone(), reading.value)],
    ))
}
