//! Tests for the main CRC table parser functionality

use super::*;
use crate::config::ParserConfig;
use crate::error::CrcError;
use crate::models::ColumnKind;
use crate::parser::{ColumnMapping, CrcParser};
use crate::units::{Quantity, Unit};
use csv::StringRecord;
use std::path::Path;

fn parse(content: &str) -> crate::Result<crate::parser::ParseResult> {
    CrcParser::new(ParserConfig::default()).parse_reader(content.as_bytes(), "fixture")
}

#[test]
fn test_column_mapping() {
    let headers = StringRecord::from(vec![
        "Mol. form.",
        " <i>c</i>/M ",
        "<i>Λ</i>/S cm<sup>2</sup> mol<sup>-1</sup><br/>25°C",
        "Notes",
    ]);
    let mapping = ColumnMapping::analyze(&headers, &ParserConfig::default()).unwrap();

    assert_eq!(mapping.formula_column, "Mol. form.");
    assert_eq!(mapping.formula_index, 0);
    assert_eq!(mapping.concentration_index, Some(1));
    assert_eq!(mapping.stats(), (4, 1));
    assert!(mapping.needs_concentration());
    assert!(matches!(
        mapping.property_columns[0].2,
        ColumnKind::TemperatureDependentMolarConductivity { .. }
    ));
}

#[test]
fn test_column_mapping_prefers_molecular_formula() {
    let headers = StringRecord::from(vec!["Compound", "Mol. form.", "<i>γ</i>(0.100 m)"]);
    let mapping = ColumnMapping::analyze(&headers, &ParserConfig::default()).unwrap();
    assert_eq!(mapping.formula_index, 1);
    assert!(!mapping.needs_concentration());
}

#[test]
fn test_missing_formula_column() {
    let err = parse("Name,<i>γ</i>(0.100 m)\nSodium chloride,0.778\n").unwrap_err();
    assert!(matches!(err, CrcError::MissingColumn { .. }));
}

#[test]
fn test_temperature_dependent_table() {
    let result = parse(TEMPERATURE_TABLE).unwrap();

    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_parsed, 3);
    assert_eq!(result.entries.len(), 5);
    assert_eq!(result.stats.entries_emitted, 5);

    let first = &result.entries[0];
    let solution = first.solution();
    assert_eq!(solution.solutes["H[+1]"], Quantity::new(0.0005, Unit::MolePerLiter));
    assert_eq!(solution.solutes["Cl[-1]"], Quantity::new(0.0005, Unit::MolePerLiter));
    assert_close(solution.temperature.magnitude, 298.15);

    let (property, value) = &first.solution_data()[0];
    assert_eq!(property, "conductivity");
    assert_eq!(value.unit, Unit::SiemensPerMeter);
    assert_close(value.magnitude, 0.02113);

    // Second row: 25 °C then 100 °C, in column order
    assert_close(result.entries[1].solution().temperature.magnitude, 298.15);
    assert_close(result.entries[2].solution().temperature.magnitude, 373.15);

    // Third row: 0 °C column precedes 25 °C
    assert_close(result.entries[3].solution().temperature.magnitude, 273.15);
}

#[test]
fn test_concentration_table_with_coefficient_and_skip() {
    let result = parse(CONCENTRATION_TABLE).unwrap();

    assert_eq!(result.stats.total_rows, 3);
    assert_eq!(result.stats.rows_parsed, 2);
    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.rows_deliberately_skipped(), 1);
    assert!(result.stats.errors.is_empty());
    assert_eq!(result.entries.len(), 3);

    let kcl = result.entries[1].solution();
    assert_eq!(kcl.solutes["K[+1]"], Quantity::new(0.01, Unit::MolePerLiter));
    assert_close(kcl.temperature.magnitude, 298.15);

    let cacl2 = &result.entries[2];
    assert_close(cacl2.solution().solutes["Ca[+2]"].magnitude, 0.0005);
    assert_close(cacl2.solution().solutes["Cl[-1]"].magnitude, 0.001);
    assert_close(cacl2.solution_data()[0].1.magnitude, 0.00621);
}

#[test]
fn test_weight_percent_table() {
    let result = parse(WEIGHT_PERCENT_TABLE).unwrap();
    assert_eq!(result.entries.len(), 3);

    let nacl = &result.entries[0];
    let amount = nacl.solution().solutes["Na[+1]"];
    assert_eq!(amount.unit, Unit::Percent);
    assert_close(amount.magnitude, 0.5 / 99.5);
    assert_close(nacl.solution().temperature.magnitude, 293.15);
    assert_close(nacl.solution_data()[0].1.magnitude, 0.82);

    let kbr = &result.entries[2];
    assert!(kbr.solution().solutes.contains_key("Br[-1]"));
}

#[test]
fn test_activity_table() {
    let result = parse(ACTIVITY_TABLE).unwrap();
    assert_eq!(result.entries.len(), 4);

    let mgcl2 = &result.entries[3];
    assert_eq!(
        mgcl2.solution().solutes["Mg[+2]"],
        Quantity::new(0.5, Unit::MolePerKilogram)
    );
    assert_eq!(
        mgcl2.solution().solutes["Cl[-1]"],
        Quantity::new(1.0, Unit::MolePerKilogram)
    );
    assert_eq!(
        mgcl2.solution_data(),
        &vec![(
            "mean_activity_coefficient".to_string(),
            Quantity::new(0.481, Unit::Dimensionless)
        )]
    );
}

#[test]
fn test_strict_mode_aborts_on_bad_row() {
    let content = format!("{}XyZw,0.5,0.4\n", ACTIVITY_TABLE);
    let err = parse(&content).unwrap_err();
    assert!(matches!(err, CrcError::OxidationState { .. }));
}

#[test]
fn test_lenient_mode_records_errors() {
    let content = format!("{}XyZw,0.5,0.4\nKCl,abc,0.6\n", ACTIVITY_TABLE);
    let parser = CrcParser::new(ParserConfig::default().with_lenient());
    let result = parser.parse_reader(content.as_bytes(), "fixture").unwrap();

    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.rows_parsed, 2);
    assert_eq!(result.stats.rows_skipped, 2);
    assert_eq!(result.stats.errors.len(), 2);
    assert!(result.stats.errors[0].contains("row 3"));
    assert!(result.stats.errors[1].contains("abc"));
    assert!(!result.stats.is_successful());
    assert_eq!(result.entries.len(), 4);
}

#[test]
fn test_invalid_header_column_handling() {
    let content = "Mol. form.,<i>κ</i>(5%),<i>κ</i>(100%)\nNaCl,67.0,1.0\n";

    let err = parse(content).unwrap_err();
    assert!(matches!(err, CrcError::InvalidValue { .. }));

    let parser = CrcParser::new(ParserConfig::default().with_lenient());
    let result = parser.parse_reader(content.as_bytes(), "fixture").unwrap();

    assert_eq!(result.stats.rows_parsed, 1);
    assert_eq!(result.stats.rows_skipped, 0);
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.stats.errors.len(), 1);
    assert!(result.stats.errors[0].contains("<i>κ</i>(100%)"));
}

#[test]
fn test_skip_patterns_are_configurable() {
    let parser = CrcParser::new(ParserConfig::default().with_skip_compounds(vec![]));
    let err = parser
        .parse_reader(CONCENTRATION_TABLE.as_bytes(), "fixture")
        .unwrap_err();
    assert_eq!(err.formula(), Some("(C4H9)4N picrate"));
}

#[test]
fn test_missing_row_concentration() {
    let content = "Mol. form.,<i>Λ</i>/S cm<sup>2</sup> mol<sup>-1</sup><br/>25°C\nHCl,421.2\n";
    let err = parse(content).unwrap_err();
    assert!(matches!(err, CrcError::MissingColumn { .. }));
}

#[test]
fn test_condense_merges_rows() {
    let content = "Compound,<i>γ</i>(0.100 m)\nNaCl,0.778\nNaCl,0.779\nNaCl,0.778\n";
    let parser = CrcParser::new(ParserConfig::default().with_condense(true));
    let result = parser.parse_reader(content.as_bytes(), "fixture").unwrap();

    assert_eq!(result.stats.entries_emitted, 3);
    assert_eq!(result.entries.len(), 1);
    assert_eq!(result.entries[0].solution_data().len(), 2);
}

#[test]
fn test_parse_file_and_files() {
    let activity = create_temp_csv(ACTIVITY_TABLE);
    let weight = create_temp_csv(WEIGHT_PERCENT_TABLE);
    let parser = CrcParser::new(ParserConfig::default());

    let single = parser.parse_file(activity.path()).unwrap();
    assert_eq!(single.entries.len(), 4);
    assert_eq!(single.stats.files_parsed, 1);

    let files = vec![activity.path().to_path_buf(), weight.path().to_path_buf()];
    let combined = parser.parse_files(&files, None).unwrap();
    assert_eq!(combined.entries.len(), 7);
    assert_eq!(combined.stats.files_parsed, 2);
    assert_eq!(combined.stats.total_rows, 4);
}

#[test]
fn test_parse_missing_file() {
    let parser = CrcParser::default();
    let err = parser.parse_file(Path::new("/nonexistent/table.csv")).unwrap_err();
    assert!(matches!(err, CrcError::InputNotFound { .. }));
}
