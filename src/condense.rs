//! Merging of entries that describe the same solution
//!
//! A CRC table emits one entry per property column, so a row with several
//! readings at identical conditions produces several entries for one
//! solution. Condensing combines them into a single entry per solution while
//! keeping the order in which solutions first appear.

use crate::models::{Dataset, Entry, SolutionSpec};
use crate::units::Quantity;
use std::collections::HashMap;
use tracing::{debug, info};

/// Identity of a solution: solutes and temperature as rendered in the output
fn solution_key(solution: &SolutionSpec) -> String {
    let mut key = solution
        .solutes
        .iter()
        .map(|(ion, amount)| format!("{}={}", ion, amount))
        .collect::<Vec<_>>()
        .join(";");
    key.push('@');
    key.push_str(&solution.temperature.to_string());
    key
}

fn push_unique(target: &mut Vec<(String, Quantity)>, values: Vec<(String, Quantity)>) -> usize {
    let mut added = 0;
    for value in values {
        if !target.contains(&value) {
            target.push(value);
            added += 1;
        }
    }
    added
}

/// Combine entries with the same solution into one entry.
///
/// Solution data are concatenated and solute data merged per ion, dropping
/// exact duplicates. The first entry of each solution fixes its position.
pub fn condense(dataset: Dataset) -> Dataset {
    let input_len = dataset.len();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut condensed: Dataset = Vec::new();

    for Entry(solution, solute_data, solution_data) in dataset {
        let key = solution_key(&solution);

        match index.get(&key) {
            Some(&position) => {
                let existing = &mut condensed[position];
                let added = push_unique(&mut existing.2, solution_data);
                for (ion, values) in solute_data {
                    push_unique(existing.1.entry(ion).or_default(), values);
                }
                debug!("Merged {} value(s) into solution {}", added, key);
            }
            None => {
                index.insert(key, condensed.len());
                condensed.push(Entry(solution, solute_data, solution_data));
            }
        }
    }

    info!(
        "Condensed {} entries into {} solutions",
        input_len,
        condensed.len()
    );
    condensed
}
