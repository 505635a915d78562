//! JSON persistence of datasets.
//!
//! A database file is a JSON array of `[solution, solute_data,
//! solution_data]` triples.

use crate::error::Result;
use crate::models::Dataset;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Render a dataset as JSON
pub fn to_json_string(dataset: &Dataset, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(dataset)?
    } else {
        serde_json::to_string(dataset)?
    };
    Ok(json)
}

/// Write a dataset to `path`, creating parent directories as needed
pub fn write_database(path: &Path, dataset: &Dataset, pretty: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, dataset)?;
    } else {
        serde_json::to_writer(&mut writer, dataset)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;

    info!("Wrote {} entries to {}", dataset.len(), path.display());
    Ok(())
}

/// Load a dataset previously written with [`write_database`]
pub fn load_database(path: &Path) -> Result<Dataset> {
    let reader = BufReader::new(File::open(path)?);
    let dataset: Dataset = serde_json::from_reader(reader)?;
    debug!("Loaded {} entries from {}", dataset.len(), path.display());
    Ok(dataset)
}
