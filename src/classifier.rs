//! Column header classification.
//!
//! CRC exports keep their HTML markup in the header row, so headers are
//! matched raw. Patterns are tried in order and the first match wins;
//! headers that match nothing are metadata columns.

use crate::error::{CrcError, Result};
use crate::models::ColumnKind;
use crate::units::{Quantity, Unit};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::trace;

type Handler = fn(&str, &Captures<'_>) -> Result<ColumnKind>;

static PATTERNS: LazyLock<Vec<(Regex, Handler)>> = LazyLock::new(|| {
    let table: [(&str, Handler); 5] = [
        // Temperature-dependent molar conductivity (HBr/HCl tables)
        (
            r"<i>Λ</i>/S cm<sup>2</sup> mol<sup>-1</sup><br/>(?P<temp>[-−]?\d+(?:\.\d+)?)\s*°?\s*C",
            temperature_dependent,
        ),
        // Concentration-dependent molar conductivity (hydrohalic acids)
        (
            r"<i>Λ</i>/S cm<sup>2</sup> mol<sup>-1</sup><br/>(?P<conc>\d+\.\d+)",
            concentration_dependent,
        ),
        // Concentration-dependent molar conductivity (aqueous electrolytes)
        (
            r"<i>Λ</i><sup></sup>\((?P<conc>\d+\.\d+) M\)/S cm<sup>2 </sup>mol<sup>-1</sup>",
            concentration_dependent,
        ),
        (r"<i>κ</i>\((?P<conc>\d+(?:\.\d+)?)%\)", weight_percent),
        (r"<i>γ</i>\((?P<conc>\d+\.\d+) m\)", mean_activity),
    ];

    table
        .into_iter()
        .map(|(pattern, handler)| {
            (
                Regex::new(pattern).expect("valid column header regex"),
                handler,
            )
        })
        .collect()
});

fn capture_number(header: &str, caps: &Captures<'_>, group: &str) -> Result<f64> {
    let text = caps
        .name(group)
        .map(|m| m.as_str().replace('\u{2212}', "-"))
        .unwrap_or_default();
    text.parse::<f64>().map_err(|e| {
        CrcError::invalid_value(header, text.as_str(), format!("invalid number in header: {}", e))
    })
}

fn temperature_dependent(header: &str, caps: &Captures<'_>) -> Result<ColumnKind> {
    let temperature = capture_number(header, caps, "temp")?;
    Ok(ColumnKind::TemperatureDependentMolarConductivity {
        temperature: Quantity::new(temperature, Unit::DegreeCelsius),
    })
}

fn concentration_dependent(header: &str, caps: &Captures<'_>) -> Result<ColumnKind> {
    let concentration = capture_number(header, caps, "conc")?;
    Ok(ColumnKind::ConcentrationDependentMolarConductivity {
        concentration: Quantity::new(concentration, Unit::MolePerLiter),
    })
}

fn weight_percent(header: &str, caps: &Captures<'_>) -> Result<ColumnKind> {
    let target_percent = capture_number(header, caps, "conc")?;
    if target_percent >= 100.0 {
        return Err(CrcError::invalid_value(
            header,
            target_percent.to_string(),
            "weight percent must be below 100",
        ));
    }
    Ok(ColumnKind::WeightPercentConductivity { target_percent })
}

fn mean_activity(header: &str, caps: &Captures<'_>) -> Result<ColumnKind> {
    let molality = capture_number(header, caps, "conc")?;
    Ok(ColumnKind::MeanActivityCoefficient {
        molality: Quantity::new(molality, Unit::MolePerKilogram),
    })
}

/// Decide which property a column header encodes.
///
/// Returns `Ok(None)` for headers that carry no property (formula, CAS
/// number, concentration and other metadata columns).
pub fn classify(header: &str) -> Result<Option<ColumnKind>> {
    for (pattern, handler) in PATTERNS.iter() {
        if let Some(caps) = pattern.captures(header) {
            let kind = handler(header, &caps)?;
            trace!("Classified column '{}' as {:?}", header, kind);
            return Ok(Some(kind));
        }
    }
    Ok(None)
}
