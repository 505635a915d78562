//! Conversion of a single CRC table row into dataset entries

use csv::StringRecord;
use tracing::trace;

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    get_optional_field, get_required_field, parse_number, parse_optional_number,
};
use crate::config::ParserConfig;
use crate::emitter::{emit, read_column};
use crate::error::Result;
use crate::formula::parse_compound;
use crate::models::Entry;

/// Parse one row into one entry per non-empty property column.
///
/// Entries follow the column order of the table.
pub fn parse_row(
    record: &StringRecord,
    mapping: &ColumnMapping,
    config: &ParserConfig,
) -> Result<Vec<Entry>> {
    let raw_formula =
        get_required_field(record, mapping.formula_index, &mapping.formula_column)?;
    let compound = parse_compound(raw_formula)?;

    let row_concentration = if mapping.needs_concentration() {
        parse_optional_number(
            record,
            mapping.concentration_index,
            &config.concentration_column,
        )?
    } else {
        None
    };

    let mut entries = Vec::new();
    for (index, column_name, kind) in &mapping.property_columns {
        let Some(raw_value) = get_optional_field(record, *index) else {
            continue;
        };

        let value = parse_number(raw_value, column_name)?;
        let reading = read_column(kind, value, compound.factor, row_concentration, config)?;
        entries.push(emit(&compound.salt, &reading)?);
    }

    trace!(
        "Row '{}' produced {} entries ({})",
        compound.formula,
        entries.len(),
        compound.salt
    );
    Ok(entries)
}
