//! Unit-aware quantities and conversions.
//!
//! Covers the handful of units found in CRC electrolyte tables and normalizes
//! them to canonical units: conductivity to S/m, amount concentration to
//! mol/L, molality to mol/kg and temperature to K. Quantities serialize as
//! `"<magnitude> <unit>"` strings.

use crate::error::{CrcError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;

/// Offset between the Celsius and Kelvin scales
const CELSIUS_OFFSET: f64 = 273.15;

/// Physical dimension of a unit; conversions only happen within one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Conductivity,
    MolarConductivity,
    AmountConcentration,
    Molality,
    MassFraction,
    Temperature,
    Dimensionless,
}

/// Units appearing in CRC electrolyte tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    SiemensPerMeter,
    SiemensPerCentimeter,
    MilliSiemensPerCentimeter,
    MicroSiemensPerCentimeter,
    SiemensSquareMeterPerMole,
    SiemensSquareCentimeterPerMole,
    MolePerLiter,
    MillimolePerLiter,
    MolePerKilogram,
    Percent,
    Kelvin,
    DegreeCelsius,
    Dimensionless,
}

impl Unit {
    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::SiemensPerMeter => "S/m",
            Unit::SiemensPerCentimeter => "S/cm",
            Unit::MilliSiemensPerCentimeter => "mS/cm",
            Unit::MicroSiemensPerCentimeter => "µS/cm",
            Unit::SiemensSquareMeterPerMole => "S m^2/mol",
            Unit::SiemensSquareCentimeterPerMole => "S cm^2/mol",
            Unit::MolePerLiter => "mol/L",
            Unit::MillimolePerLiter => "mmol/L",
            Unit::MolePerKilogram => "mol/kg",
            Unit::Percent => "%",
            Unit::Kelvin => "K",
            Unit::DegreeCelsius => "°C",
            Unit::Dimensionless => "dimensionless",
        }
    }

    pub fn dimension(&self) -> Dimension {
        match self {
            Unit::SiemensPerMeter
            | Unit::SiemensPerCentimeter
            | Unit::MilliSiemensPerCentimeter
            | Unit::MicroSiemensPerCentimeter => Dimension::Conductivity,
            Unit::SiemensSquareMeterPerMole | Unit::SiemensSquareCentimeterPerMole => {
                Dimension::MolarConductivity
            }
            Unit::MolePerLiter | Unit::MillimolePerLiter => Dimension::AmountConcentration,
            Unit::MolePerKilogram => Dimension::Molality,
            Unit::Percent => Dimension::MassFraction,
            Unit::Kelvin | Unit::DegreeCelsius => Dimension::Temperature,
            Unit::Dimensionless => Dimension::Dimensionless,
        }
    }

    /// Canonical unit of this unit's dimension
    pub fn canonical(&self) -> Unit {
        match self.dimension() {
            Dimension::Conductivity => Unit::SiemensPerMeter,
            Dimension::MolarConductivity => Unit::SiemensSquareMeterPerMole,
            Dimension::AmountConcentration => Unit::MolePerLiter,
            Dimension::Molality => Unit::MolePerKilogram,
            Dimension::MassFraction => Unit::Percent,
            Dimension::Temperature => Unit::Kelvin,
            Dimension::Dimensionless => Unit::Dimensionless,
        }
    }

    /// Scale factor and offset taking a magnitude to the canonical unit
    fn to_canonical(self) -> (f64, f64) {
        match self {
            Unit::SiemensPerCentimeter => (100.0, 0.0),
            Unit::MilliSiemensPerCentimeter => (0.1, 0.0),
            Unit::MicroSiemensPerCentimeter => (1e-4, 0.0),
            Unit::SiemensSquareCentimeterPerMole => (1e-4, 0.0),
            Unit::MillimolePerLiter => (1e-3, 0.0),
            Unit::DegreeCelsius => (1.0, CELSIUS_OFFSET),
            _ => (1.0, 0.0),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = CrcError;

    fn from_str(s: &str) -> Result<Self> {
        let unit = match s.trim() {
            "S/m" => Unit::SiemensPerMeter,
            "S/cm" => Unit::SiemensPerCentimeter,
            "mS/cm" => Unit::MilliSiemensPerCentimeter,
            "µS/cm" | "μS/cm" | "uS/cm" => Unit::MicroSiemensPerCentimeter,
            "S m^2/mol" | "S m2/mol" | "S m²/mol" => Unit::SiemensSquareMeterPerMole,
            "S cm^2/mol" | "S cm2/mol" | "S cm²/mol" | "S cm ** 2 /mol" => {
                Unit::SiemensSquareCentimeterPerMole
            }
            "mol/L" | "mol/l" | "M" => Unit::MolePerLiter,
            "mmol/L" | "mmol/l" | "mM" => Unit::MillimolePerLiter,
            "mol/kg" | "m" => Unit::MolePerKilogram,
            "%" => Unit::Percent,
            "K" => Unit::Kelvin,
            "°C" | "degC" | "C" => Unit::DegreeCelsius,
            "" | "dimensionless" => Unit::Dimensionless,
            other => {
                return Err(CrcError::UnknownUnit {
                    unit: other.to_string(),
                });
            }
        };
        Ok(unit)
    }
}

/// A magnitude with a unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Convert to `target`, which must share this quantity's dimension
    pub fn to(&self, target: Unit) -> Result<Quantity> {
        if self.unit.dimension() != target.dimension() {
            return Err(CrcError::UnitConversion {
                from: self.unit.to_string(),
                to: target.to_string(),
            });
        }

        let (scale, offset) = self.unit.to_canonical();
        let canonical = self.magnitude * scale + offset;
        let (target_scale, target_offset) = target.to_canonical();

        Ok(Quantity::new((canonical - target_offset) / target_scale, target))
    }

    /// Convert to the canonical unit of this quantity's dimension
    pub fn to_canonical(&self) -> Quantity {
        let (scale, offset) = self.unit.to_canonical();
        Quantity::new(self.magnitude * scale + offset, self.unit.canonical())
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, factor: f64) -> Quantity {
        Quantity::new(self.magnitude * factor, self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}

impl FromStr for Quantity {
    type Err = CrcError;

    /// Parse `"<magnitude> <unit>"`; the space is optional (`"25°C"`)
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace('\u{2212}', "-");
        let split = normalized
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
            .map(|(i, _)| i)
            .unwrap_or(normalized.len());

        let (number, unit) = normalized.split_at(split);
        let magnitude = number.parse::<f64>().map_err(|e| {
            CrcError::invalid_value("quantity", s, format!("invalid magnitude: {}", e))
        })?;

        Ok(Quantity::new(magnitude, unit.parse()?))
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Conductivity of a solution from its molar conductivity and concentration.
///
/// κ = Λ·c, returned in S/m.
pub fn molar_to_conductivity(concentration: &Quantity, molar: &Quantity) -> Result<Quantity> {
    let c = concentration.to(Unit::MolePerLiter)?;
    let lambda = molar.to(Unit::SiemensSquareMeterPerMole)?;

    // mol/L -> mol/m^3
    let c_si = c.magnitude * 1000.0;
    Ok(Quantity::new(c_si * lambda.magnitude, Unit::SiemensPerMeter))
}
