//! Field parsing utilities for CRC table rows

use crate::error::{CrcError, Result};
use csv::StringRecord;

/// Get a field by index, trimmed; `None` when absent or empty
pub fn get_optional_field(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Get a field by index, failing when it is absent or empty
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    index: usize,
    column_name: &str,
) -> Result<&'a str> {
    get_optional_field(record, index).ok_or_else(|| {
        CrcError::invalid_value(column_name, "", "empty value for required column")
    })
}

/// Parse a numeric table value.
///
/// Accepts the Unicode minus sign and thin-space digit grouping found in
/// handbook exports.
pub fn parse_number(value: &str, column_name: &str) -> Result<f64> {
    let normalized: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '\u{2009}' | '\u{202f}' | ' '))
        .map(|c| if c == '\u{2212}' { '-' } else { c })
        .collect();

    normalized.parse::<f64>().map_err(|e| {
        CrcError::invalid_value(column_name, value, format!("invalid number: {}", e))
    })
}

/// Parse an optional numeric field; empty fields are `None`
pub fn parse_optional_number(
    record: &StringRecord,
    index: Option<usize>,
    column_name: &str,
) -> Result<Option<f64>> {
    match index.and_then(|i| get_optional_field(record, i)) {
        Some(value) => parse_number(value, column_name).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("118.5", "c").unwrap(), 118.5);
        assert_eq!(parse_number(" 0.001 ", "c").unwrap(), 0.001);
        assert_eq!(parse_number("\u{2212}1.5", "c").unwrap(), -1.5);
        assert_eq!(parse_number("1\u{2009}234.5", "c").unwrap(), 1234.5);
    }

    #[test]
    fn test_parse_number_invalid() {
        let err = parse_number("n/a", "<i>γ</i>(0.100 m)").unwrap_err();
        match err {
            CrcError::InvalidValue { column, value, .. } => {
                assert_eq!(column, "<i>γ</i>(0.100 m)");
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_optional_fields() {
        let record = StringRecord::from(vec!["KCl", "", "  ", "0.1"]);
        assert_eq!(get_optional_field(&record, 0), Some("KCl"));
        assert_eq!(get_optional_field(&record, 1), None);
        assert_eq!(get_optional_field(&record, 2), None);
        assert_eq!(get_optional_field(&record, 9), None);

        assert_eq!(parse_optional_number(&record, Some(3), "c").unwrap(), Some(0.1));
        assert_eq!(parse_optional_number(&record, Some(1), "c").unwrap(), None);
        assert_eq!(parse_optional_number(&record, None, "c").unwrap(), None);
        assert!(get_required_field(&record, 1, "Mol. form.").is_err());
    }
}
