//! Test fixtures and helpers for CRC table parser testing
//!
//! Fixtures reproduce the header markup of the four handbook table shapes.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;
mod stats_tests;

/// Molar conductivity of HCl as a function of temperature and concentration
pub const TEMPERATURE_TABLE: &str = "\
Mol. form.,<i>c</i>/M,<i>Λ</i>/S cm<sup>2</sup> mol<sup>-1</sup><br/>0°C,<i>Λ</i>/S cm<sup>2</sup> mol<sup>-1</sup><br/>25°C,<i>Λ</i>/S cm<sup>2</sup> mol<sup>-1</sup><br/>100°C
HCl,0.0005,,422.6,
HCl,0.001,,421.2,850.0
HCl,0.01,251.5,411.9,
";

/// Molar conductivity of electrolytes at 25 °C as a function of concentration
pub const CONCENTRATION_TABLE: &str = "\
Compound,Name,<i>Λ</i><sup></sup>(0.001 M)/S cm<sup>2 </sup>mol<sup>-1</sup>,<i>Λ</i><sup></sup>(0.010 M)/S cm<sup>2 </sup>mol<sup>-1</sup>
KCl,Potassium chloride,146.9,141.2
1/2CaCl<sub>2</sub>,Calcium chloride,124.2,
(C4H9)4N picrate,Tetrabutylammonium picrate,30.1,
";

/// Conductivity at a weight percent, 20 °C
pub const WEIGHT_PERCENT_TABLE: &str = "\
Name,Mol. form.,<i>κ</i>(0.5%),<i>κ</i>(5%)
Sodium chloride,NaCl,8.2,67.0
Potassium bromide,KBr,,46.9
";

/// Mean activity coefficients at 25 °C
pub const ACTIVITY_TABLE: &str = "\
Compound,<i>γ</i>(0.001 m),<i>γ</i>(0.500 m)
NaCl,0.965,0.681
MgCl<sub>2</sub>,0.889,0.481
";

/// Write CSV content to a temporary file
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9 * expected.abs().max(1.0),
        "expected {expected}, got {actual}"
    );
}
